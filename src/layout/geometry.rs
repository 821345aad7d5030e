//! Terminal geometry with clamping and a fixed fallback.

use std::io;

/// Widest terminal the renderer will plan for.
pub const MAX_COLUMNS: u16 = 400;

/// Tallest terminal the renderer will plan for.
pub const MAX_ROWS: u16 = 120;

/// Usable terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

impl TerminalGeometry {
    /// Query the controlling terminal.
    ///
    /// Never fails: a failed or degenerate query yields the 80x24 default.
    pub fn detect() -> Self {
        Self::from_query(crossterm::terminal::size())
    }

    /// Build a geometry from the result of a raw `(columns, rows)` query.
    ///
    /// The result is clamped to [`MAX_COLUMNS`] x [`MAX_ROWS`]. An error or a
    /// zero-by-zero answer falls back to [`TerminalGeometry::default`].
    pub fn from_query(query: io::Result<(u16, u16)>) -> Self {
        match query {
            Ok((0, 0)) => {
                log::warn!("terminal reported 0x0, assuming 80x24");
                Self::default()
            }
            Ok((cols, rows)) => Self {
                cols: cols.min(MAX_COLUMNS),
                rows: rows.min(MAX_ROWS),
            },
            Err(e) => {
                log::warn!("terminal size query failed ({}), assuming 80x24", e);
                Self::default()
            }
        }
    }
}
