pub mod alignment_entry;
pub mod sequence_aligner;
pub mod similarity;
