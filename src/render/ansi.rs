//! SGR escape sequences and UTF-8 encoding of glyph codepoints.

use std::io::{self, Write};

use crate::block::CellColor;

/// Style reset followed by a newline, written at the end of every row.
pub const RESET_LINE: &[u8] = b"\x1b[0m\n";

/// Home the cursor and clear to the end of the screen.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[H\x1b[J";

/// Written in place of a codepoint that cannot be encoded.
pub const PLACEHOLDER: char = '\u{fffd}';

/// A glyph codepoint outside the Unicode range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("codepoint {0:#x} is outside the Unicode range")]
pub struct CodepointEncodingError(pub u32);

/// 24-bit background color.
pub fn write_bg<W: Write>(out: &mut W, color: CellColor) -> io::Result<()> {
    write!(out, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// 24-bit foreground color.
pub fn write_fg<W: Write>(out: &mut W, color: CellColor) -> io::Result<()> {
    write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// 24-bit background color with three-digit channels, as used by the
/// compat renderer.
pub fn write_bg_padded<W: Write>(out: &mut W, color: CellColor) -> io::Result<()> {
    write!(out, "\x1b[48;2;{:03};{:03};{:03}m", color.r, color.g, color.b)
}

/// Encode `codepoint` as UTF-8 into `buf`.
///
/// Uses 1 to 4 bytes depending on the value. Anything at or above
/// `0x110000` is rejected.
pub fn encode_codepoint(codepoint: u32, buf: &mut [u8; 4]) -> Result<&[u8], CodepointEncodingError> {
    let len = if codepoint < 0x80 {
        buf[0] = codepoint as u8;
        1
    } else if codepoint < 0x800 {
        buf[0] = 0xc0 | (codepoint >> 6) as u8;
        buf[1] = 0x80 | (codepoint & 0x3f) as u8;
        2
    } else if codepoint < 0x1_0000 {
        buf[0] = 0xe0 | (codepoint >> 12) as u8;
        buf[1] = 0x80 | ((codepoint >> 6) & 0x3f) as u8;
        buf[2] = 0x80 | (codepoint & 0x3f) as u8;
        3
    } else if codepoint < 0x11_0000 {
        buf[0] = 0xf0 | (codepoint >> 18) as u8;
        buf[1] = 0x80 | ((codepoint >> 12) & 0x3f) as u8;
        buf[2] = 0x80 | ((codepoint >> 6) & 0x3f) as u8;
        buf[3] = 0x80 | (codepoint & 0x3f) as u8;
        4
    } else {
        return Err(CodepointEncodingError(codepoint));
    };
    Ok(&buf[..len])
}

/// Write a glyph, substituting [`PLACEHOLDER`] if it cannot be encoded.
pub fn write_glyph<W: Write>(out: &mut W, codepoint: u32) -> io::Result<()> {
    let mut buf = [0u8; 4];
    match encode_codepoint(codepoint, &mut buf) {
        Ok(bytes) => out.write_all(bytes),
        Err(e) => {
            log::error!("{}, writing {:?} instead", e, PLACEHOLDER);
            let mut buf = [0u8; 4];
            out.write_all(PLACEHOLDER.encode_utf8(&mut buf).as_bytes())
        }
    }
}
