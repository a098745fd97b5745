//! Articulation scoring engine.
//!
//! Grades how faithfully a spoken transcript reproduces a reference script:
//! tokens are normalized, fillers are labelled, the two word sequences are
//! aligned with similarity-weighted dynamic programming, and the alignment is
//! turned into per-word outcomes, an accuracy grade and feedback.

pub mod alignment;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod shared;
pub mod text;

pub use error::{AssessmentError, InputSide};
pub use pipeline::assess_articulation_use_case::AssessArticulationUseCase;
pub use pipeline::assessment_config::AssessmentConfig;
pub use scoring::domain::assessment_result::{AssessmentResult, SimpleResult};

/// Assesses `transcript` against `reference` with default limits.
pub fn assess(
    transcript: &str,
    reference: &str,
    match_threshold: f64,
) -> Result<AssessmentResult, AssessmentError> {
    let config = AssessmentConfig::default().with_match_threshold(match_threshold);
    AssessArticulationUseCase::new(config).execute(transcript, reference)
}
