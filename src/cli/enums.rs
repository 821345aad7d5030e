//! CLI enum types for glyph set selection.

use clap::ValueEnum;

use termglyph::glyphs::GlyphSet;

/// Glyph table to match blocks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GlyphChoice {
    /// Block elements and line drawing
    Blocks,
    /// Blocks plus teletext mosaics (needs a font with Legacy Computing symbols)
    #[default]
    Teletext,
}

impl From<GlyphChoice> for GlyphSet {
    fn from(choice: GlyphChoice) -> Self {
        match choice {
            GlyphChoice::Blocks => GlyphSet::Blocks,
            GlyphChoice::Teletext => GlyphSet::Teletext,
        }
    }
}
