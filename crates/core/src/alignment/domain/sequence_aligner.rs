use super::alignment_entry::AlignmentEntry;
use super::similarity::similarity;
use crate::shared::constants::{
    DEFAULT_MATCH_THRESHOLD, GAP_PENALTY, MATCH_SCORE, MISMATCH_PENALTY,
};

/// Back-pointer of one DP cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Step {
    Done,
    /// Pair `reference[i-1]` with `detected[j-1]`.
    Diagonal,
    /// Skip `reference[i-1]` (deletion).
    Up,
    /// Skip `detected[j-1]` (insertion).
    Left,
}

/// Similarity-weighted Needleman-Wunsch alignment of two word sequences.
///
/// A pair scores `MATCH_SCORE` when its similarity reaches the threshold and
/// `MISMATCH_PENALTY` otherwise; skipping a word on either side costs
/// `GAP_PENALTY`. Equal-scoring moves resolve as diagonal, then up, then left.
#[derive(Debug, Clone, Copy)]
pub struct SequenceAligner {
    match_threshold: f64,
}

impl Default for SequenceAligner {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl SequenceAligner {
    pub fn new(match_threshold: f64) -> Self {
        Self { match_threshold }
    }

    pub fn match_threshold(&self) -> f64 {
        self.match_threshold
    }

    /// Number of DP cells an alignment of `m` by `n` words allocates.
    pub fn cell_count(m: usize, n: usize) -> usize {
        (m + 1) * (n + 1)
    }

    /// Aligns `reference` against `detected`, left to right.
    pub fn align(&self, reference: &[String], detected: &[String]) -> Vec<AlignmentEntry> {
        if reference.is_empty() {
            return detected
                .iter()
                .map(|w| AlignmentEntry::insertion(w))
                .collect();
        }
        if detected.is_empty() {
            return reference
                .iter()
                .map(|w| AlignmentEntry::deletion(w))
                .collect();
        }

        let steps = self.fill_table(reference, detected);
        self.traceback(&steps, reference, detected)
    }

    /// Score pass over rolling rows; only back-pointers are kept for every cell.
    fn fill_table(&self, reference: &[String], detected: &[String]) -> Vec<Step> {
        let m = reference.len();
        let n = detected.len();
        let width = n + 1;

        let mut steps = vec![Step::Done; Self::cell_count(m, n)];
        let mut prev: Vec<i32> = (0..=n).map(|j| j as i32 * GAP_PENALTY).collect();
        let mut curr = vec![0i32; width];

        for cell in steps.iter_mut().take(width).skip(1) {
            *cell = Step::Left;
        }

        for i in 1..=m {
            curr[0] = i as i32 * GAP_PENALTY;
            steps[i * width] = Step::Up;

            for j in 1..=n {
                let pair_score = if self.is_match(&reference[i - 1], &detected[j - 1]) {
                    MATCH_SCORE
                } else {
                    MISMATCH_PENALTY
                };

                let diagonal = prev[j - 1] + pair_score;
                let up = prev[j] + GAP_PENALTY;
                let left = curr[j - 1] + GAP_PENALTY;

                let (score, step) = if diagonal >= up && diagonal >= left {
                    (diagonal, Step::Diagonal)
                } else if up >= left {
                    (up, Step::Up)
                } else {
                    (left, Step::Left)
                };

                curr[j] = score;
                steps[i * width + j] = step;
            }

            std::mem::swap(&mut prev, &mut curr);
        }

        steps
    }

    fn traceback(
        &self,
        steps: &[Step],
        reference: &[String],
        detected: &[String],
    ) -> Vec<AlignmentEntry> {
        let width = detected.len() + 1;
        let mut alignment = Vec::with_capacity(reference.len() + detected.len());
        let (mut i, mut j) = (reference.len(), detected.len());

        while i > 0 || j > 0 {
            match steps[i * width + j] {
                Step::Diagonal => {
                    let (r, d) = (&reference[i - 1], &detected[j - 1]);
                    alignment.push(AlignmentEntry::paired(r, d, self.is_match(r, d)));
                    i -= 1;
                    j -= 1;
                }
                Step::Up => {
                    alignment.push(AlignmentEntry::deletion(&reference[i - 1]));
                    i -= 1;
                }
                Step::Left => {
                    alignment.push(AlignmentEntry::insertion(&detected[j - 1]));
                    j -= 1;
                }
                Step::Done => break,
            }
        }

        alignment.reverse();
        alignment
    }

    fn is_match(&self, reference: &str, detected: &str) -> bool {
        similarity(reference, detected) >= self.match_threshold
    }
}
