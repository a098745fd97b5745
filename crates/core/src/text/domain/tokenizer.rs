use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,.!?;:]+").unwrap());
static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A normalized token together with the whitespace-delimited chunk it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordUnit {
    pub text: String,
    pub surface: String,
}

/// Lowercases, turns runs of `, . ! ? ; :` into a space, collapses
/// whitespace and trims.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = PUNCTUATION_PATTERN.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_PATTERN.replace_all(&spaced, " ");
    collapsed.trim().to_string()
}

/// Splits text into normalized word units in reading order.
///
/// Each whitespace-delimited chunk is normalized on its own, so a chunk such
/// as `"pagi,dan"` yields two units that share the same surface form.
pub fn tokenize(text: &str) -> Vec<WordUnit> {
    text.split_whitespace()
        .flat_map(|chunk| {
            normalize_text(chunk)
                .split(' ')
                .filter(|w| !w.is_empty())
                .map(|w| WordUnit {
                    text: w.to_string(),
                    surface: chunk.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Normalized word sequence of `text`, as consumed by the aligner.
pub fn tokenize_words(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|unit| unit.text).collect()
}
