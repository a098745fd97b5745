use std::fmt;

use serde::Serialize;

/// How one alignment slot relates the reference to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Both sides present and similar enough.
    Match,
    /// Both sides present but too different.
    Substitution,
    /// Spoken word with no reference counterpart.
    Insertion,
    /// Reference word that was not spoken.
    Deletion,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchType::Match => write!(f, "match"),
            MatchType::Substitution => write!(f, "substitution"),
            MatchType::Insertion => write!(f, "insertion"),
            MatchType::Deletion => write!(f, "deletion"),
        }
    }
}

/// One slot of a global alignment. At least one side is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentEntry {
    pub reference: Option<String>,
    pub detected: Option<String>,
    pub match_type: MatchType,
}

impl AlignmentEntry {
    pub fn paired(reference: &str, detected: &str, is_match: bool) -> Self {
        Self {
            reference: Some(reference.to_string()),
            detected: Some(detected.to_string()),
            match_type: if is_match {
                MatchType::Match
            } else {
                MatchType::Substitution
            },
        }
    }

    pub fn deletion(reference: &str) -> Self {
        Self {
            reference: Some(reference.to_string()),
            detected: None,
            match_type: MatchType::Deletion,
        }
    }

    pub fn insertion(detected: &str) -> Self {
        Self {
            reference: None,
            detected: Some(detected.to_string()),
            match_type: MatchType::Insertion,
        }
    }
}
