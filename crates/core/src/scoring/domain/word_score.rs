use serde::Serialize;

use crate::alignment::domain::alignment_entry::MatchType;
use crate::shared::constants::{NO_DETECTION_MARKER, NO_EXPECTATION_MARKER};

/// Evaluation of one alignment slot.
///
/// `expected` is `None` for insertions and `detected` is `None` for
/// deletions; `similarity` is `0.0` whenever either side is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordScore {
    pub position: usize,
    pub expected: Option<String>,
    pub detected: Option<String>,
    pub is_correct: bool,
    pub similarity: f64,
    pub is_filler: bool,
    pub match_type: MatchType,
    /// Start time of the spoken word, when the transcript carried timings.
    pub timestamp: Option<f64>,
    pub confidence: Option<f32>,
}

impl WordScore {
    pub fn expected_label(&self) -> &str {
        self.expected.as_deref().unwrap_or(NO_EXPECTATION_MARKER)
    }

    pub fn detected_label(&self) -> &str {
        self.detected.as_deref().unwrap_or(NO_DETECTION_MARKER)
    }

    /// An insertion of a filler: reported, never penalised.
    pub fn is_filler_insertion(&self) -> bool {
        self.is_filler && self.match_type == MatchType::Insertion
    }
}
