use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::shared::constants::{DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_WORDS};

/// Tunables for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Minimum similarity for two words to align as a match.
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    /// Per-side token cap checked before alignment.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

fn default_match_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl AssessmentConfig {
    pub fn with_match_threshold(mut self, match_threshold: f64) -> Self {
        self.match_threshold = match_threshold;
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn validate(&self) -> Result<(), AssessmentError> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(AssessmentError::InvalidThreshold(self.match_threshold));
        }
        if self.max_words == 0 {
            return Err(AssessmentError::InvalidConfig(
                "max_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
