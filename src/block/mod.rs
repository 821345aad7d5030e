//! Block-to-glyph conversion.
//!
//! Every 4x8 pixel block of the image becomes one [`CharData`]: a glyph
//! codepoint plus the foreground and background colors that best reproduce
//! the block.
//!
//! 1. **Mask** - split on the widest channel, or direct two-color mode
//! 2. **Match** - nearest glyph pattern by Hamming distance
//! 3. **Color** - mean color of each side of the matched pattern

mod histogram;
mod matcher;
mod pixels;

pub use histogram::dominant_colors;
pub use matcher::{
    bucket_means, direct_mask, find_best_pattern, match_block, read_block, split_mask,
    MatchOptions, PatternMatch, BLOCK_PIXELS, FALLBACK_DISTANCE, FALLBACK_PATTERN,
};
pub use pixels::{CellColor, CharData, CharGrid, PixelBuffer, BYTES_PER_PIXEL};
