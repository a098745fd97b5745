use std::time::Instant;

use super::assessment_config::AssessmentConfig;
use super::assessment_logger::{AssessmentLogger, NullAssessmentLogger};
use crate::alignment::domain::sequence_aligner::SequenceAligner;
use crate::error::{AssessmentError, InputSide};
use crate::scoring::domain::assessment_result::AssessmentResult;
use crate::scoring::domain::score_builder::{ScoreBuilder, WordTiming};
use crate::text::domain::filler_classifier::FillerClassifier;
use crate::text::domain::repetition_detector::RepetitionDetector;
use crate::text::domain::tokenizer::{tokenize, tokenize_words};
use crate::text::domain::transcript::TranscriptWord;

/// Grades a transcript against its reference script:
/// tokenize, classify fillers, align, score.
///
/// Every run is independent; the only state carried between runs is what
/// the logger chooses to accumulate.
pub struct AssessArticulationUseCase {
    config: AssessmentConfig,
    logger: Box<dyn AssessmentLogger>,
}

impl AssessArticulationUseCase {
    pub fn new(config: AssessmentConfig) -> Self {
        Self {
            config,
            logger: Box::new(NullAssessmentLogger),
        }
    }

    pub fn with_logger(mut self, logger: Box<dyn AssessmentLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    pub fn logger(&self) -> &dyn AssessmentLogger {
        self.logger.as_ref()
    }

    /// Assesses a plain transcript string.
    pub fn execute(
        &mut self,
        transcript: &str,
        reference: &str,
    ) -> Result<AssessmentResult, AssessmentError> {
        let started = Instant::now();
        let detected = tokenize_words(transcript);
        let transcript_ms = elapsed_ms(started);

        self.run(started, transcript_ms, transcript, detected, None, reference)
    }

    /// Assesses speech-to-text output that carries word timings.
    ///
    /// Each timed word is tokenized on its own, so a word that splits into
    /// several tokens lends its timing to all of them.
    pub fn execute_timed(
        &mut self,
        words: &[TranscriptWord],
        reference: &str,
    ) -> Result<AssessmentResult, AssessmentError> {
        let started = Instant::now();
        let transcript = TranscriptWord::join(words);

        let mut detected = Vec::new();
        let mut timings: Vec<WordTiming> = Vec::new();
        for word in words {
            for unit in tokenize(&word.word) {
                detected.push(unit.text);
                timings.push((word.start_time, word.confidence));
            }
        }
        let transcript_ms = elapsed_ms(started);

        self.run(
            started,
            transcript_ms,
            &transcript,
            detected,
            Some(timings),
            reference,
        )
    }

    /// Shared stages after the transcript has been tokenized.
    ///
    /// `transcript_ms` is folded into the single "tokenize" timing together
    /// with the reference tokenization.
    fn run(
        &mut self,
        started: Instant,
        transcript_ms: f64,
        transcript: &str,
        detected: Vec<String>,
        timings: Option<Vec<WordTiming>>,
        reference: &str,
    ) -> Result<AssessmentResult, AssessmentError> {
        self.config.validate()?;

        let stage = Instant::now();
        let reference_words = tokenize_words(reference);
        self.logger
            .timing("tokenize", transcript_ms + elapsed_ms(stage));

        self.check_size(InputSide::Reference, reference_words.len())?;
        self.check_size(InputSide::Transcript, detected.len())?;

        self.logger.info(&format!(
            "Reference words: {}, detected words: {}",
            reference_words.len(),
            detected.len()
        ));
        match reference_words.len().cmp(&detected.len()) {
            std::cmp::Ordering::Greater => log::warn!(
                "Missing {} words in transcription",
                reference_words.len() - detected.len()
            ),
            std::cmp::Ordering::Less => log::warn!(
                "Extra {} words in transcription",
                detected.len() - reference_words.len()
            ),
            std::cmp::Ordering::Equal => log::debug!("Word count matches"),
        }
        self.logger
            .metric("reference_words", reference_words.len() as f64);
        self.logger.metric("detected_words", detected.len() as f64);

        let stage = Instant::now();
        let (filler_count, fillers) = FillerClassifier::count_fillers(transcript);
        let repetitions = RepetitionDetector::detect(&detected);
        self.logger.timing("fillers", elapsed_ms(stage));
        self.logger
            .info(&format!("Filler words detected: {filler_count}"));
        if !repetitions.is_empty() {
            log::debug!("Repetitions detected: {repetitions:?}");
        }

        let stage = Instant::now();
        let aligner = SequenceAligner::new(self.config.match_threshold);
        let alignment = aligner.align(&reference_words, &detected);
        self.logger.timing("align", elapsed_ms(stage));
        self.logger.metric(
            "dp_cells",
            SequenceAligner::cell_count(reference_words.len(), detected.len()) as f64,
        );
        log::debug!("Aligned {} positions", alignment.len());

        let stage = Instant::now();
        let mut builder = ScoreBuilder::new(reference, transcript, reference_words.len())
            .with_fillers(fillers)
            .with_repetitions(repetitions);
        if let Some(timings) = timings.as_deref() {
            builder = builder.with_timings(timings);
        }
        let result = builder.build(&alignment);
        self.logger.timing("score", elapsed_ms(stage));

        self.logger.info(&format!(
            "Correct: {}/{} ({:.1}%) - {}",
            result.correct_words,
            result.total_words,
            result.accuracy_percentage,
            result.category
        ));
        self.logger
            .assessed(result.correct_words, result.total_words);

        Ok(result.with_processing_time(started.elapsed().as_secs_f64()))
    }

    fn check_size(&self, side: InputSide, words: usize) -> Result<(), AssessmentError> {
        if words > self.config.max_words {
            return Err(AssessmentError::InputTooLarge {
                side,
                words,
                limit: self.config.max_words,
            });
        }
        Ok(())
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
