//! Glyph pattern tables.
//!
//! A glyph is described by the 4x8 pixel coverage it approximates. Two
//! ordered tables are available:
//!
//! - **Blocks** - block elements, quadrants and line drawing
//! - **Teletext** - the blocks followed by the 2x3 legacy-computing mosaics
//!
//! Table order matters: the matcher keeps the first pattern on distance ties.

mod table;

pub use table::{BLOCK_PATTERNS, TELETEXT_PATTERNS};

/// Coverage mask paired with the codepoint that draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPattern {
    /// 32-bit coverage, MSB = top-left pixel, row-major, set = foreground.
    pub mask: u32,
    /// Unicode scalar the renderer emits.
    pub codepoint: u32,
}

/// Which pattern tables the matcher scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// Block elements and line drawing only.
    Blocks,
    /// Block elements followed by the teletext mosaics.
    #[default]
    Teletext,
}

impl GlyphSet {
    /// Iterate the patterns of this set in match priority order.
    pub fn patterns(self) -> impl Iterator<Item = &'static GlyphPattern> {
        let extended: &'static [GlyphPattern] = match self {
            GlyphSet::Blocks => &[],
            GlyphSet::Teletext => TELETEXT_PATTERNS,
        };
        BLOCK_PATTERNS.iter().chain(extended.iter())
    }

    /// Get the configuration name of the set.
    pub fn name(self) -> &'static str {
        match self {
            GlyphSet::Blocks => "blocks",
            GlyphSet::Teletext => "teletext",
        }
    }

    /// Look up a set by its configuration name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "blocks" => Some(GlyphSet::Blocks),
            "teletext" => Some(GlyphSet::Teletext),
            _ => None,
        }
    }
}
