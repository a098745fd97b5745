use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Closed filler lexicon: hesitation sounds plus Indonesian discourse markers.
const FILLER_WORDS: &[&str] = &[
    // hesitation sounds
    "um", "umm", "ummm", "em", "emm", "emmm", "eh", "ehh", "ehhh", "ehm", "ehmm", "ehmmm", "ah",
    "ahh", "ahhh", "ahm", "ahmm", "ahmmm", "hmm", "hmmm", "hmmmm", "uh", "uhh", "uhhh", "uhm",
    "uhmm",
    // discourse fillers
    "anu", "ano", "gitu", "gituloh", "kayak", "kayaknya", "apa", "maksudnya", "jadi", "jadinya",
    "nah", "terus", "lalu", "kemudian", "gini", "begini", "begitu", "semacam", "semisal",
    "ibaratnya", "kan", "ya", "yah", "sepertinya", "mungkin",
    // regional particles
    "toh", "sih", "deh", "dong", "lah",
];

static FILLER_LEXICON: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FILLER_WORDS.iter().copied().collect());

/// Elongated hesitations outside the lexicon ("ummmmm", "ehmmmm", "hmmmmmm").
static HESITATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(um+|em+|eh+m*|ah+m*|uh+m*|hmm+)$").unwrap());

/// Labels disfluency tokens. Fillers are reported, never removed.
pub struct FillerClassifier;

impl FillerClassifier {
    pub fn is_filler(token: &str) -> bool {
        let cleaned = token.trim().to_lowercase();
        let cleaned = cleaned.trim_end_matches(|c: char| c.is_ascii_punctuation());

        FILLER_LEXICON.contains(cleaned) || HESITATION_PATTERN.is_match(cleaned)
    }

    /// Counts fillers over a plain whitespace split of `text`.
    ///
    /// Returned tokens are lowercased but otherwise as written (trailing
    /// punctuation included), in order, duplicates kept.
    pub fn count_fillers(text: &str) -> (usize, Vec<String>) {
        let fillers: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .filter(|w| Self::is_filler(w))
            .map(str::to_string)
            .collect();
        (fillers.len(), fillers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lexicon_hesitation("eh")]
    #[case::lexicon_hmm("hmm")]
    #[case::lexicon_discourse("anu")]
    #[case::lexicon_kayaknya("kayaknya")]
    #[case::lexicon_particle("dong")]
    #[case::uppercase("EH")]
    #[case::trailing_punctuation("sih,")]
    #[case::trailing_punctuation_run("gitu...")]
    #[case::surrounding_whitespace("  kan ")]
    #[case::long_um("ummmmmm")]
    #[case::long_ehm("ehhhmmmm")]
    #[case::long_hmm("hmmmmmmm")]
    #[case::long_ahm("ahhhhm")]
    #[case::long_em("emmmmmm")]
    fn test_is_filler(#[case] token: &str) {
        assert!(FillerClassifier::is_filler(token), "{token:?} should be a filler");
    }

    #[rstest]
    #[case::content_word("makan")]
    #[case::contains_filler("kanan")]
    #[case::prefix_filler("umbrella")]
    #[case::single_h("hm")]
    #[case::leading_punctuation(",eh")]
    #[case::multi_word_phrase("gitu loh")]
    #[case::empty("")]
    #[case::m_only("mmm")]
    fn test_is_not_filler(#[case] token: &str) {
        assert!(
            !FillerClassifier::is_filler(token),
            "{token:?} should not be a filler"
        );
    }

    #[test]
    fn test_count_fillers_keeps_duplicates_and_order() {
        let (count, fillers) = FillerClassifier::count_fillers("Eh saya eh suka, sih makan");
        assert_eq!(count, 3);
        assert_eq!(fillers, vec!["eh", "eh", "sih"]);
    }

    #[test]
    fn test_count_fillers_keeps_trailing_punctuation_in_report() {
        let (count, fillers) = FillerClassifier::count_fillers("Hmm, baiklah");
        assert_eq!(count, 1);
        assert_eq!(fillers, vec!["hmm,"]);
    }

    #[test]
    fn test_count_fillers_empty_text() {
        let (count, fillers) = FillerClassifier::count_fillers("");
        assert_eq!(count, 0);
        assert!(fillers.is_empty());
    }
}
