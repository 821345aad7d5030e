//! Glyph renderer with run-length suppression of color escapes.

use std::io::{self, Write};

use super::ansi::{write_bg, write_fg, write_glyph, RESET_LINE};
use crate::block::{CharData, CharGrid};

/// Write a [`CharGrid`] as colored glyphs.
///
/// Each row starts with both color escapes. Within a row a color escape is
/// only written when it differs from the previous cell's. Every row ends
/// with a style reset and a newline.
pub fn render_glyphs<W: Write>(grid: &CharGrid, out: &mut W) -> io::Result<()> {
    for row in grid.rows() {
        let mut prev: Option<&CharData> = None;
        for cell in row {
            if prev.map_or(true, |p| p.bg != cell.bg) {
                write_bg(out, cell.bg)?;
            }
            if prev.map_or(true, |p| p.fg != cell.fg) {
                write_fg(out, cell.fg)?;
            }
            write_glyph(out, cell.codepoint)?;
            prev = Some(cell);
        }
        out.write_all(RESET_LINE)?;
    }
    Ok(())
}
