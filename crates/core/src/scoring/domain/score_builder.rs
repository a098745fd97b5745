use super::assessment_result::{AssessmentResult, ErrorTally};
use super::feedback::{self, FeedbackContext};
use super::grade::Category;
use super::word_score::WordScore;
use crate::alignment::domain::alignment_entry::{AlignmentEntry, MatchType};
use crate::alignment::domain::similarity::similarity;
use crate::shared::constants::UNCLEAR_WORDS_LIMIT;
use crate::text::domain::filler_classifier::FillerClassifier;

/// Start time and confidence of a spoken token.
pub type WordTiming = (f64, f32);

/// Turns an alignment into an [`AssessmentResult`].
///
/// Filler matches never count as correct, and filler insertions are
/// excluded from the extra-word tally.
pub struct ScoreBuilder<'a> {
    reference_text: &'a str,
    transcribed_text: &'a str,
    total_words: usize,
    fillers: Vec<String>,
    repetitions: Vec<(String, usize)>,
    detected_timings: Option<&'a [WordTiming]>,
}

impl<'a> ScoreBuilder<'a> {
    /// `total_words` is the length of the tokenized reference.
    pub fn new(reference_text: &'a str, transcribed_text: &'a str, total_words: usize) -> Self {
        Self {
            reference_text,
            transcribed_text,
            total_words,
            fillers: Vec::new(),
            repetitions: Vec::new(),
            detected_timings: None,
        }
    }

    pub fn with_fillers(mut self, fillers: Vec<String>) -> Self {
        self.fillers = fillers;
        self
    }

    pub fn with_repetitions(mut self, repetitions: Vec<(String, usize)>) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// One timing per detected token, in transcript order.
    pub fn with_timings(mut self, timings: &'a [WordTiming]) -> Self {
        self.detected_timings = Some(timings);
        self
    }

    pub fn build(self, alignment: &[AlignmentEntry]) -> AssessmentResult {
        let word_scores = self.score_words(alignment);

        let correct_words = word_scores.iter().filter(|ws| ws.is_correct).count();
        let accuracy_percentage = accuracy(correct_words, self.total_words);
        let category = Category::from_accuracy(accuracy_percentage);
        let error_tally = ErrorTally::from_scores(&word_scores);

        let unclear_words: Vec<String> = word_scores
            .iter()
            .filter(|ws| {
                matches!(
                    ws.match_type,
                    MatchType::Substitution | MatchType::Deletion
                )
            })
            .filter_map(|ws| ws.expected.clone())
            .take(UNCLEAR_WORDS_LIMIT)
            .collect();

        let detailed_feedback = feedback::generate(&FeedbackContext {
            word_scores: &word_scores,
            fillers: &self.fillers,
            tally: error_tally,
            correct_words,
            total_words: self.total_words,
            accuracy_percentage,
            category,
        });

        AssessmentResult {
            reference_text: self.reference_text.to_string(),
            transcribed_text: self.transcribed_text.to_string(),
            word_scores,
            total_words: self.total_words,
            correct_words,
            accuracy_percentage,
            category,
            points: category.points(),
            filler_words_detected: self.fillers,
            repetitions_detected: self.repetitions,
            unclear_words,
            error_tally,
            detailed_feedback,
            processing_time_secs: 0.0,
        }
    }

    fn score_words(&self, alignment: &[AlignmentEntry]) -> Vec<WordScore> {
        let mut detected_index = 0;
        let mut word_scores = Vec::with_capacity(alignment.len());

        for (position, entry) in alignment.iter().enumerate() {
            let timing = if entry.detected.is_some() {
                let timing = self
                    .detected_timings
                    .and_then(|t| t.get(detected_index).copied());
                detected_index += 1;
                timing
            } else {
                None
            };
            word_scores.push(score_entry(position, entry, timing));
        }

        word_scores
    }
}

fn score_entry(position: usize, entry: &AlignmentEntry, timing: Option<WordTiming>) -> WordScore {
    let is_filler = entry
        .detected
        .as_deref()
        .is_some_and(FillerClassifier::is_filler);

    let pair_similarity = match (&entry.reference, &entry.detected) {
        (Some(r), Some(d)) => similarity(r, d),
        _ => 0.0,
    };

    let (is_correct, similarity) = match entry.match_type {
        MatchType::Match => (!is_filler, pair_similarity),
        MatchType::Insertion if is_filler => (false, 0.0),
        _ => (false, pair_similarity),
    };

    WordScore {
        position,
        expected: entry.reference.clone(),
        detected: entry.detected.clone(),
        is_correct,
        similarity,
        is_filler,
        match_type: entry.match_type,
        timestamp: timing.map(|(start, _)| start),
        confidence: timing.map(|(_, confidence)| confidence),
    }
}

/// Share of reference words judged correct, in percent; zero for an empty
/// reference.
pub fn accuracy(correct_words: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    correct_words as f64 * 100.0 / total_words as f64
}
