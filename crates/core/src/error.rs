use std::fmt;

use thiserror::Error;

/// Which input of an assessment a limit was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSide {
    Reference,
    Transcript,
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSide::Reference => write!(f, "reference"),
            InputSide::Transcript => write!(f, "transcript"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AssessmentError {
    #[error("{side} has {words} words, exceeding the limit of {limit}")]
    InputTooLarge {
        side: InputSide,
        words: usize,
        limit: usize,
    },
    #[error("match threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_too_large_message_names_side_and_limit() {
        let err = AssessmentError::InputTooLarge {
            side: InputSide::Transcript,
            words: 2500,
            limit: 2000,
        };
        assert_eq!(
            err.to_string(),
            "transcript has 2500 words, exceeding the limit of 2000"
        );
    }

    #[test]
    fn test_invalid_threshold_message() {
        let err = AssessmentError::InvalidThreshold(1.5);
        assert_eq!(
            err.to_string(),
            "match threshold must be between 0.0 and 1.0, got 1.5"
        );
    }
}
