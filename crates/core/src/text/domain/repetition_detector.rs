use super::filler_classifier::FillerClassifier;

/// Finds consecutive repeats of the same word ("saya saya saya").
///
/// Fillers are skipped: "eh eh" is hesitation, not a restart.
pub struct RepetitionDetector;

impl RepetitionDetector {
    /// Returns `(word, run_length)` for every run of two or more identical
    /// tokens, in transcript order.
    pub fn detect(tokens: &[String]) -> Vec<(String, usize)> {
        let mut repetitions = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let word = &tokens[i];
            let mut run = 1;
            while i + run < tokens.len() && tokens[i + run] == *word {
                run += 1;
            }

            if run >= 2 && !FillerClassifier::is_filler(word) {
                repetitions.push((word.clone(), run));
            }
            i += run;
        }

        repetitions
    }
}
