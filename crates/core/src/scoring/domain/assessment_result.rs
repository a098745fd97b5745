use serde::Serialize;

use super::grade::Category;
use super::word_score::WordScore;
use crate::alignment::domain::alignment_entry::MatchType;
use crate::shared::constants::SIMPLE_UNCLEAR_WORDS_LIMIT;

/// Articulation error counts by kind. Filler insertions are not errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ErrorTally {
    /// Reference words that were not spoken.
    pub deletions: usize,
    /// Reference words spoken too differently.
    pub substitutions: usize,
    /// Spoken words outside the reference, fillers excluded.
    pub extra_words: usize,
}

impl ErrorTally {
    pub fn from_scores(word_scores: &[WordScore]) -> Self {
        word_scores
            .iter()
            .fold(ErrorTally::default(), |mut tally, ws| {
                match ws.match_type {
                    MatchType::Deletion => tally.deletions += 1,
                    MatchType::Substitution => tally.substitutions += 1,
                    MatchType::Insertion if !ws.is_filler => tally.extra_words += 1,
                    _ => {}
                }
                tally
            })
    }

    pub fn total(&self) -> usize {
        self.deletions + self.substitutions + self.extra_words
    }
}

/// Outcome of one articulation assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub reference_text: String,
    pub transcribed_text: String,
    pub word_scores: Vec<WordScore>,

    pub total_words: usize,
    pub correct_words: usize,
    pub accuracy_percentage: f64,

    pub category: Category,
    pub points: u8,

    pub filler_words_detected: Vec<String>,
    pub repetitions_detected: Vec<(String, usize)>,
    pub unclear_words: Vec<String>,
    pub error_tally: ErrorTally,

    pub detailed_feedback: Vec<String>,
    /// Wall-clock time of the assessment; zero until stamped by the caller.
    pub processing_time_secs: f64,
}

impl AssessmentResult {
    pub fn filler_count(&self) -> usize {
        self.filler_words_detected.len()
    }

    pub fn with_processing_time(mut self, secs: f64) -> Self {
        self.processing_time_secs = secs;
        self
    }

    /// Compact projection for API responses.
    pub fn simple(&self) -> SimpleResult {
        SimpleResult {
            accuracy_percentage: round_to(self.accuracy_percentage, 1),
            category: self.category,
            points: self.points,
            correct_words: self.correct_words,
            total_words: self.total_words,
            filler_count: self.filler_count(),
            unclear_words: self
                .unclear_words
                .iter()
                .take(SIMPLE_UNCLEAR_WORDS_LIMIT)
                .cloned()
                .collect(),
            processing_time: round_to(self.processing_time_secs, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleResult {
    pub accuracy_percentage: f64,
    pub category: Category,
    pub points: u8,
    pub correct_words: usize,
    pub total_words: usize,
    pub filler_count: usize,
    pub unclear_words: Vec<String>,
    pub processing_time: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
