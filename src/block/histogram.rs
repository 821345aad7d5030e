//! Exact-color histogram used by direct mode.

use super::{CellColor, BLOCK_PIXELS};

/// Find the two most frequent exact colors of a block.
///
/// Returns `Some((first, second))` only when together they cover more than
/// half of the block. Ties on count go to the numerically larger packed
/// color. A single-color block yields the same color twice.
pub fn dominant_colors(block: &[CellColor; BLOCK_PIXELS]) -> Option<(CellColor, CellColor)> {
    let mut packed = block.map(CellColor::packed);
    packed.sort_unstable();

    // (count, color), so a descending sort orders by count then color.
    let mut runs: Vec<(usize, u32)> = packed
        .chunk_by(|a, b| a == b)
        .map(|run| (run.len(), run[0]))
        .collect();
    runs.sort_unstable_by(|a, b| b.cmp(a));

    let (count1, first) = runs[0];
    let (count2, second) = runs.get(1).copied().unwrap_or((0, first));

    (count1 + count2 > BLOCK_PIXELS / 2)
        .then(|| (CellColor::from_packed(first), CellColor::from_packed(second)))
}
