//! Choosing a glyph and two colors for one 4x8 block.
//!
//! The block is first reduced to a 32-bit coverage mask, either by splitting
//! on the channel with the widest range or, in direct mode, by assigning each
//! pixel to the nearer of the two dominant colors. The mask is then compared
//! against every glyph pattern and its complement by Hamming distance.

use super::histogram::dominant_colors;
use super::{CellColor, CharData, PixelBuffer};
use crate::glyphs::{GlyphPattern, GlyphSet};
use crate::layout::{BLOCK_HEIGHT, BLOCK_WIDTH};

/// Pixels in one block.
pub const BLOCK_PIXELS: usize = (BLOCK_WIDTH * BLOCK_HEIGHT) as usize;

/// Provisional winner before any table pattern is compared.
pub const FALLBACK_PATTERN: GlyphPattern = GlyphPattern {
    mask: 0x0000_ffff,
    codepoint: 0x2584,
};

/// Patterns must beat this distance to replace [`FALLBACK_PATTERN`].
pub const FALLBACK_DISTANCE: u32 = 8;

/// Matcher settings shared by every block of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    pub glyphs: GlyphSet,
    /// Classify by the two dominant exact colors when they cover most of
    /// the block.
    pub direct_mode: bool,
}

/// Result of the table scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Table entry as declared, never complemented.
    pub pattern: GlyphPattern,
    pub distance: u32,
    /// The complement of `pattern.mask` was the closer candidate.
    pub inverted: bool,
}

/// Copy a block out of the buffer in mask order (row-major, top-left first).
pub fn read_block(pixels: &PixelBuffer, x0: u32, y0: u32) -> [CellColor; BLOCK_PIXELS] {
    debug_assert!(x0 + BLOCK_WIDTH <= pixels.width());
    debug_assert!(y0 + BLOCK_HEIGHT <= pixels.height());
    std::array::from_fn(|i| {
        let i = i as u32;
        pixels.pixel(x0 + i % BLOCK_WIDTH, y0 + i / BLOCK_WIDTH)
    })
}

/// Build a coverage mask, MSB first, from a per-pixel predicate.
fn coverage_mask(block: &[CellColor; BLOCK_PIXELS], is_set: impl Fn(CellColor) -> bool) -> u32 {
    block
        .iter()
        .fold(0u32, |bits, &pixel| (bits << 1) | u32::from(is_set(pixel)))
}

/// Threshold the channel with the widest range at the middle of that range.
pub fn split_mask(block: &[CellColor; BLOCK_PIXELS]) -> u32 {
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];
    for pixel in block {
        for i in 0..3 {
            min[i] = min[i].min(pixel.channel(i));
            max[i] = max[i].max(pixel.channel(i));
        }
    }

    // Strict comparison keeps the earliest channel on equal ranges.
    let mut split_index = 0;
    let mut best_range = 0;
    for i in 0..3 {
        let range = max[i] - min[i];
        if range > best_range {
            best_range = range;
            split_index = i;
        }
    }

    let split_value = min[split_index] + best_range / 2;
    coverage_mask(block, |pixel| pixel.channel(split_index) > split_value)
}

/// Mark the pixels nearer to `second` than to `first`.
pub fn direct_mask(block: &[CellColor; BLOCK_PIXELS], first: CellColor, second: CellColor) -> u32 {
    coverage_mask(block, |pixel| first.distance2(pixel) > second.distance2(pixel))
}

/// Scan the glyph set for the pattern closest to `bits`.
///
/// Each entry is tried as declared and then complemented; only a strictly
/// smaller distance replaces the current best, so the earliest entry wins
/// ties and the plain mask wins over its own complement.
pub fn find_best_pattern(bits: u32, glyphs: GlyphSet) -> PatternMatch {
    let mut best = PatternMatch {
        pattern: FALLBACK_PATTERN,
        distance: FALLBACK_DISTANCE,
        inverted: false,
    };

    for pattern in glyphs.patterns() {
        for (candidate, inverted) in [(pattern.mask, false), (!pattern.mask, true)] {
            let distance = (candidate ^ bits).count_ones();
            if distance < best.distance {
                best = PatternMatch {
                    pattern: *pattern,
                    distance,
                    inverted,
                };
            }
        }
    }

    best
}

/// Mean colors of the pixels inside and outside `mask`.
///
/// Returns `(fg, bg)`. Means truncate. An empty bucket takes the other
/// bucket's mean so solid blocks render with matching colors.
pub fn bucket_means(block: &[CellColor; BLOCK_PIXELS], mask: u32) -> (CellColor, CellColor) {
    let mut fg_sum = [0u32; 3];
    let mut bg_sum = [0u32; 3];
    let mut fg_count = 0u32;
    let mut bg_count = 0u32;

    for (i, pixel) in block.iter().enumerate() {
        let bit = 1u32 << (BLOCK_PIXELS - 1 - i);
        let (sum, count) = if mask & bit != 0 {
            (&mut fg_sum, &mut fg_count)
        } else {
            (&mut bg_sum, &mut bg_count)
        };
        for (c, total) in sum.iter_mut().enumerate() {
            *total += u32::from(pixel.channel(c));
        }
        *count += 1;
    }

    let mean = |sum: [u32; 3], count: u32| {
        CellColor::new(
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
        )
    };

    match (fg_count, bg_count) {
        (0, _) => {
            let bg = mean(bg_sum, bg_count);
            (bg, bg)
        }
        (_, 0) => {
            let fg = mean(fg_sum, fg_count);
            (fg, fg)
        }
        _ => (mean(fg_sum, fg_count), mean(bg_sum, bg_count)),
    }
}

/// Convert the 4x8 block at `(x0, y0)` into a glyph and two colors.
pub fn match_block(pixels: &PixelBuffer, x0: u32, y0: u32, options: MatchOptions) -> CharData {
    let block = read_block(pixels, x0, y0);

    let dominant = if options.direct_mode {
        dominant_colors(&block)
    } else {
        None
    };

    match dominant {
        Some((first, second)) => {
            let bits = direct_mask(&block, first, second);
            let found = find_best_pattern(bits, options.glyphs);
            let (bg, fg) = if found.inverted {
                (second, first)
            } else {
                (first, second)
            };
            CharData {
                fg,
                bg,
                codepoint: found.pattern.codepoint,
            }
        }
        None => {
            let bits = split_mask(&block);
            let found = find_best_pattern(bits, options.glyphs);
            let (fg, bg) = bucket_means(&block, found.pattern.mask);
            CharData {
                fg,
                bg,
                codepoint: found.pattern.codepoint,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: CellColor = CellColor::new(255, 0, 0);
    const BLACK: CellColor = CellColor::new(0, 0, 0);
    const WHITE: CellColor = CellColor::new(255, 255, 255);

    /// 4x8 buffer whose pixel at mask bit `31 - i` is `on` when `mask` has it.
    fn block_from_mask(mask: u32, on: CellColor, off: CellColor) -> PixelBuffer {
        let mut buffer = PixelBuffer::filled(4, 8, off);
        for i in 0..32u32 {
            if mask & (1 << (31 - i)) != 0 {
                buffer.set_pixel(i % 4, i / 4, on);
            }
        }
        buffer
    }

    #[test]
    fn test_solid_block_matches_blank() {
        let buffer = PixelBuffer::filled(4, 8, RED);
        let block = read_block(&buffer, 0, 0);
        assert_eq!(split_mask(&block), 0);

        let data = match_block(&buffer, 0, 0, MatchOptions::default());
        assert_eq!(data.codepoint, 0x00a0);
        assert_eq!(data.fg, RED);
        assert_eq!(data.bg, RED);
    }

    #[test]
    fn test_lower_half_block() {
        let buffer = block_from_mask(0x0000_ffff, WHITE, BLACK);
        let data = match_block(&buffer, 0, 0, MatchOptions::default());
        assert_eq!(data.codepoint, 0x2584);
        assert_eq!(data.fg, WHITE);
        assert_eq!(data.bg, BLACK);
    }

    #[test]
    fn test_upper_half_uses_inverted_lower_half() {
        let buffer = block_from_mask(0xffff_0000, WHITE, BLACK);
        let block = read_block(&buffer, 0, 0);
        let found = find_best_pattern(split_mask(&block), GlyphSet::Blocks);
        assert!(found.inverted);
        assert_eq!(found.pattern.codepoint, 0x2584);

        // Colors follow the table mask: the lower half is the foreground.
        let data = match_block(&buffer, 0, 0, MatchOptions::default());
        assert_eq!(data.codepoint, 0x2584);
        assert_eq!(data.fg, BLACK);
        assert_eq!(data.bg, WHITE);
    }

    #[test]
    fn test_split_uses_widest_channel() {
        // Green spans 0..200, red only 0..10.
        let mut buffer = PixelBuffer::filled(4, 8, CellColor::new(10, 0, 0));
        for y in 4..8 {
            for x in 0..4 {
                buffer.set_pixel(x, y, CellColor::new(0, 200, 0));
            }
        }
        let block = read_block(&buffer, 0, 0);
        assert_eq!(split_mask(&block), 0x0000_ffff);
    }

    #[test]
    fn test_tie_keeps_first_table_entry() {
        // Light vertical (0x44444444) is declared before the [ extension.
        let found = find_best_pattern(0x4444_4444, GlyphSet::Blocks);
        assert_eq!(found.distance, 0);
        assert_eq!(found.pattern.codepoint, 0x2502);

        // The same mask appears three times; the first one wins.
        let found = find_best_pattern(0x0006_6000, GlyphSet::Blocks);
        assert_eq!(found.pattern.codepoint, 0x2579);
    }

    #[test]
    fn test_plain_mask_beats_own_complement() {
        let found = find_best_pattern(0, GlyphSet::Blocks);
        assert!(!found.inverted);
        assert_eq!(found.pattern.codepoint, 0x00a0);

        let found = find_best_pattern(u32::MAX, GlyphSet::Blocks);
        assert!(found.inverted);
        assert_eq!(found.pattern.codepoint, 0x00a0);
    }

    #[test]
    fn test_fallback_when_nothing_is_close() {
        // Checkerboard: every pattern is at least 8 bits away.
        let found = find_best_pattern(0xa5a5_a5a5, GlyphSet::Blocks);
        assert_eq!(found.pattern, FALLBACK_PATTERN);
        assert_eq!(found.distance, FALLBACK_DISTANCE);
        assert!(!found.inverted);
    }

    #[test]
    fn test_teletext_set_finds_mosaic() {
        // Left column of the top third only exists in the teletext table.
        let found = find_best_pattern(0xccc0_0000, GlyphSet::Teletext);
        assert_eq!(found.pattern.codepoint, 0x1fb00);
        assert_eq!(found.distance, 0);

        let found = find_best_pattern(0xccc0_0000, GlyphSet::Blocks);
        assert_ne!(found.pattern.codepoint, 0x1fb00);
    }

    #[test]
    fn test_bucket_means_truncate() {
        let mut buffer = PixelBuffer::filled(4, 8, CellColor::new(10, 10, 10));
        buffer.set_pixel(0, 7, CellColor::new(11, 11, 11));
        let block = read_block(&buffer, 0, 0);
        // bottom row is foreground: (11 + 10 * 3) / 4 = 10
        let (fg, bg) = bucket_means(&block, 0x0000_000f);
        assert_eq!(fg, CellColor::new(10, 10, 10));
        assert_eq!(bg, CellColor::new(10, 10, 10));
    }

    #[test]
    fn test_direct_mode_uses_exact_colors() {
        let on = CellColor::new(200, 10, 10);
        let off = CellColor::new(10, 10, 200);
        let mut buffer = block_from_mask(0x0000_ffff, on, off);
        // A stray pixel that split mode would average in.
        buffer.set_pixel(0, 0, CellColor::new(100, 100, 100));
        let options = MatchOptions {
            direct_mode: true,
            ..MatchOptions::default()
        };

        let data = match_block(&buffer, 0, 0, options);
        assert_eq!(data.codepoint, 0x2584);
        assert_eq!(data.fg, on);
        assert_eq!(data.bg, off);
    }

    #[test]
    fn test_direct_mode_swaps_on_inverted_match() {
        let top = CellColor::new(0, 200, 0);
        let bottom = CellColor::new(0, 0, 200);
        let mut buffer = block_from_mask(0xffff_0000, top, bottom);
        // Make the bottom color the most frequent one.
        buffer.set_pixel(0, 0, bottom);
        let options = MatchOptions {
            direct_mode: true,
            ..MatchOptions::default()
        };

        let data = match_block(&buffer, 0, 0, options);
        assert_eq!(data.codepoint, 0x2584);
        assert_eq!(data.fg, bottom);
        assert_eq!(data.bg, top);
    }

    #[test]
    fn test_direct_mode_falls_back_to_split_on_noise() {
        let mut buffer = PixelBuffer::filled(4, 8, BLACK);
        for i in 0..32u32 {
            buffer.set_pixel(i % 4, i / 4, CellColor::new((i * 8) as u8, 0, 0));
        }
        let direct = MatchOptions {
            direct_mode: true,
            ..MatchOptions::default()
        };
        assert_eq!(
            match_block(&buffer, 0, 0, direct),
            match_block(&buffer, 0, 0, MatchOptions::default())
        );
    }

    #[test]
    fn test_match_is_deterministic() {
        let mut buffer = PixelBuffer::filled(8, 16, BLACK);
        for y in 0..16 {
            for x in 0..8 {
                buffer.set_pixel(x, y, CellColor::new((x * 30) as u8, (y * 15) as u8, 77));
            }
        }
        for &(x0, y0) in &[(0, 0), (4, 0), (0, 8), (4, 8)] {
            let first = match_block(&buffer, x0, y0, MatchOptions::default());
            let second = match_block(&buffer, x0, y0, MatchOptions::default());
            assert_eq!(first, second);
        }
    }
}
