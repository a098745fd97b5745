pub mod filler_classifier;
pub mod repetition_detector;
pub mod tokenizer;
pub mod transcript;
