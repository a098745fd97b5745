//! Longest-matching-blocks string similarity.
//!
//! The ratio is `2 * M / T`, where `T` is the combined length of both strings
//! and `M` is the total size of the non-overlapping common blocks found by
//! repeatedly taking the longest common substring and recursing on the
//! pieces to its left and right.

use std::collections::HashMap;

/// Sequences at least this long get their most frequent elements treated as
/// junk when seeding matches.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Case-insensitive similarity in `[0, 1]`.
///
/// Block selection is order-dependent ("tide"/"diet" finds one block one way
/// and two the other), so both directions are scored and the better one is
/// kept. This makes the measure symmetric.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let forward = matching_ratio(&a, &b);
    if forward >= 1.0 {
        return forward;
    }
    forward.max(matching_ratio(&b, &a))
}

/// Directional ratio of `a` against `b`. Two empty sequences are identical.
pub fn matching_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = BlockMatcher::new(a, b)
        .matching_blocks()
        .iter()
        .map(|&(_, _, size)| size)
        .sum();
    2.0 * matched as f64 / total as f64
}

struct BlockMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each element of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let max_occurrences = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= max_occurrences);
        }

        Self { a, b, b2j }
    }

    /// Longest common block within `a[alo..ahi]` and `b[blo..bhi]` as
    /// `(i, j, size)`. Ties go to the earliest `i`, then the earliest `j`.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular elements were left out of b2j; grow the block over them.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    /// All matching blocks `(i, j, size)` sorted by position.
    fn matching_blocks(&self) -> Vec<(usize, usize, usize)> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, size) = self.find_longest_match(alo, ahi, blo, bhi);
            if size == 0 {
                continue;
            }
            blocks.push((i, j, size));
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                pending.push((i + size, ahi, j + size, bhi));
            }
        }

        blocks.sort_unstable();
        blocks
    }
}
