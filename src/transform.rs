//! Parallel conversion of a whole image into a [`CharGrid`].
//!
//! The grid is split into horizontal stripes of whole character rows. Each
//! stripe owns a disjoint slice of the output and only reads the pixel
//! buffer, so the stripes run on the rayon pool without any locking. The
//! result does not depend on the stripe count.

use rayon::prelude::*;

use crate::block::{match_block, CharData, CharGrid, MatchOptions, PixelBuffer};
use crate::layout::{BLOCK_HEIGHT, BLOCK_WIDTH};

/// Upper bound on the number of stripes.
pub const MAX_STRIPES: usize = 8;

/// Pick how many stripes to cut `char_rows` into.
///
/// Uses the largest divisor of `char_rows` in `2..=max_stripes` (capped at
/// [`MAX_STRIPES`]) so all stripes are the same height, or 1 if none divides.
pub fn stripe_count(char_rows: u32, max_stripes: usize) -> usize {
    if char_rows == 0 {
        return 1;
    }
    let upper = max_stripes.min(MAX_STRIPES);
    (2..=upper)
        .rev()
        .find(|&n| char_rows as usize % n == 0)
        .unwrap_or(1)
}

/// Convert every whole 4x8 block of `pixels` into a [`CharData`].
///
/// Trailing pixel columns and rows that do not fill a block are ignored.
pub fn to_char_grid(pixels: &PixelBuffer, options: MatchOptions, max_stripes: usize) -> CharGrid {
    let rows = pixels.height() / BLOCK_HEIGHT;
    to_char_grid_with_stripes(pixels, options, stripe_count(rows, max_stripes))
}

/// Same as [`to_char_grid`] with an explicit stripe count.
///
/// Any count is accepted; it is clamped to `1..=rows` and the last stripe
/// may be shorter than the others.
pub fn to_char_grid_with_stripes(
    pixels: &PixelBuffer,
    options: MatchOptions,
    stripes: usize,
) -> CharGrid {
    let columns = pixels.width() / BLOCK_WIDTH;
    let rows = pixels.height() / BLOCK_HEIGHT;
    let mut cells = vec![CharData::default(); columns as usize * rows as usize];

    if cells.is_empty() {
        return CharGrid {
            cells,
            width: columns,
            height: rows,
        };
    }

    let stripes = stripes.clamp(1, rows as usize);
    let rows_per_stripe = (rows as usize).div_ceil(stripes);
    log::debug!(
        "converting {}x{} blocks in {} stripe(s) of {} row(s)",
        columns,
        rows,
        stripes,
        rows_per_stripe
    );

    cells
        .par_chunks_mut(rows_per_stripe * columns as usize)
        .enumerate()
        .for_each(|(stripe, out)| {
            convert_stripe(pixels, options, columns, stripe * rows_per_stripe, out);
        });

    CharGrid {
        cells,
        width: columns,
        height: rows,
    }
}

fn convert_stripe(
    pixels: &PixelBuffer,
    options: MatchOptions,
    columns: u32,
    first_row: usize,
    out: &mut [CharData],
) {
    for (i, cell) in out.iter_mut().enumerate() {
        let col = (i % columns as usize) as u32;
        let row = (first_row + i / columns as usize) as u32;
        *cell = match_block(pixels, col * BLOCK_WIDTH, row * BLOCK_HEIGHT, options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::CellColor;

    fn noise(width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::filled(width, height, CellColor::default());
        let mut state = 0x1234_5678u32;
        for y in 0..height {
            for x in 0..width {
                // xorshift, deterministic
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                buffer.set_pixel(x, y, CellColor::from_packed(state));
            }
        }
        buffer
    }

    #[test]
    fn test_stripe_count_largest_divisor() {
        assert_eq!(stripe_count(16, 8), 8);
        assert_eq!(stripe_count(12, 8), 6);
        assert_eq!(stripe_count(9, 8), 3);
        assert_eq!(stripe_count(14, 8), 7);
    }

    #[test]
    fn test_stripe_count_prime_rows() {
        assert_eq!(stripe_count(11, 8), 1);
        assert_eq!(stripe_count(1, 8), 1);
        assert_eq!(stripe_count(0, 8), 1);
    }

    #[test]
    fn test_stripe_count_respects_bound() {
        assert_eq!(stripe_count(16, 4), 4);
        assert_eq!(stripe_count(16, 1), 1);
        assert_eq!(stripe_count(16, 64), 8);
    }

    #[test]
    fn test_grid_dimensions_truncate() {
        let grid = to_char_grid(&noise(10, 17), MatchOptions::default(), MAX_STRIPES);
        assert_eq!(grid.width, 2);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.cells.len(), 4);
    }

    #[test]
    fn test_too_small_image_gives_empty_grid() {
        let grid = to_char_grid(&noise(3, 40), MatchOptions::default(), MAX_STRIPES);
        assert!(grid.is_empty());
        assert_eq!(grid.width, 0);
    }

    #[test]
    fn test_stripe_count_does_not_change_result() {
        let pixels = noise(24, 64);
        let options = MatchOptions::default();
        let single = to_char_grid_with_stripes(&pixels, options, 1);
        for stripes in [2, 3, 4, 5, 8] {
            assert_eq!(to_char_grid_with_stripes(&pixels, options, stripes), single);
        }
    }

    #[test]
    fn test_cells_are_row_major() {
        let pixels = noise(16, 24);
        let options = MatchOptions::default();
        let grid = to_char_grid(&pixels, options, MAX_STRIPES);
        for row in 0..grid.height {
            for col in 0..grid.width {
                let expected = match_block(&pixels, col * 4, row * 8, options);
                assert_eq!(grid.get(col, row), Some(&expected));
            }
        }
    }
}
