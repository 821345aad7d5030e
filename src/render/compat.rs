//! Raw-color renderer for terminals without block glyphs.

use std::io::{self, Write};

use super::ansi::{write_bg_padded, RESET_LINE};
use crate::block::PixelBuffer;

/// Write one space per pixel with the pixel as background color.
pub fn render_compat<W: Write>(pixels: &PixelBuffer, out: &mut W) -> io::Result<()> {
    if pixels.width() == 0 {
        return Ok(());
    }
    let colors: Vec<_> = pixels.pixels().collect();
    for row in colors.chunks(pixels.width() as usize) {
        for &color in row {
            write_bg_padded(out, color)?;
            out.write_all(b" ")?;
        }
        out.write_all(RESET_LINE)?;
    }
    Ok(())
}
