//! Sizing the output for the terminal.
//!
//! - [`geometry`] - terminal size query with fallback and clamping
//! - [`dimensions`] - aspect-preserving fit of an image into that size

mod dimensions;
mod geometry;

pub use dimensions::{
    ideal_char_size, CharGeometry, TargetGeometry, BLOCK_HEIGHT, BLOCK_WIDTH, PADDING_COLUMNS,
    PADDING_ROWS, WIDTH_SCALE,
};
pub use geometry::{TerminalGeometry, MAX_COLUMNS, MAX_ROWS};
