//! Terminal output.
//!
//! - [`render_glyphs`] - one glyph per block with 24-bit colors
//! - [`render_compat`] - one colored space per pixel

mod ansi;
mod compat;
mod glyph;

pub use ansi::{
    encode_codepoint, write_bg, write_bg_padded, write_fg, write_glyph, CodepointEncodingError,
    CLEAR_SCREEN, PLACEHOLDER, RESET_LINE,
};
pub use compat::render_compat;
pub use glyph::render_glyphs;
