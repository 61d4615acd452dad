//! # Verification
//!
//! Audits a finished block set for overlapping pairs. Every pair is checked,
//! with the outer loop spread across the rayon pool.

use crate::map::{Block, OverlapPolicy};
use rayon::prelude::*;

/// Returns every `(i, j)` with `i < j` whose blocks overlap under `policy`,
/// sorted by `i` then `j`.
pub fn find_overlaps(blocks: &[Block], policy: OverlapPolicy) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = (0..blocks.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let a = &blocks[i];
            blocks[i + 1..]
                .iter()
                .enumerate()
                .filter(move |(_, b)| policy.overlaps(a, b))
                .map(move |(offset, _)| (i, i + 1 + offset))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

pub fn has_overlap(blocks: &[Block], policy: OverlapPolicy) -> bool {
    (0..blocks.len()).into_par_iter().any(|i| {
        blocks[i + 1..]
            .iter()
            .any(|b| policy.overlaps(&blocks[i], b))
    })
}
