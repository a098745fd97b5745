/// Alignment reward for a word pair whose similarity reaches the match threshold.
pub const MATCH_SCORE: i32 = 2;
/// Alignment penalty for a word pair below the match threshold.
pub const MISMATCH_PENALTY: i32 = -1;
/// Alignment penalty for skipping a word on either side.
pub const GAP_PENALTY: i32 = -1;

pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

/// Per-side token cap; keeps the (m+1)*(n+1) back-pointer table bounded.
pub const DEFAULT_MAX_WORDS: usize = 2000;

pub const UNCLEAR_WORDS_LIMIT: usize = 20;
pub const SIMPLE_UNCLEAR_WORDS_LIMIT: usize = 10;
pub const SUBSTITUTION_EXAMPLES_LIMIT: usize = 10;
pub const FILLER_PREVIEW_LIMIT: usize = 5;

/// Shown in place of the expected word for an insertion.
pub const NO_EXPECTATION_MARKER: &str = "[INSERTION]";
/// Shown in place of the detected word for a deletion.
pub const NO_DETECTION_MARKER: &str = "[DELETION]";
