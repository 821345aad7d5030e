//! Fitting an image into the terminal while keeping its aspect ratio.

use super::TerminalGeometry;

/// Columns kept free around the image, also the width shrink step.
pub const PADDING_COLUMNS: i64 = 8;

/// Rows kept free around the image, also the height shrink step.
pub const PADDING_ROWS: i64 = 4;

/// Horizontal stretch applied when double-width compensation is on.
/// Glyph cells are roughly twice as tall as they are wide.
pub const WIDTH_SCALE: u32 = 2;

/// Pixel width of one character block.
pub const BLOCK_WIDTH: u32 = 4;

/// Pixel height of one character block.
pub const BLOCK_HEIGHT: u32 = 8;

/// Size of the character grid the image should occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharGeometry {
    pub columns: u32,
    pub rows: u32,
}

impl CharGeometry {
    /// Pixel size of an image that maps exactly onto this grid.
    pub fn to_pixels(self) -> TargetGeometry {
        TargetGeometry {
            width: self.columns * BLOCK_WIDTH,
            height: self.rows * BLOCK_HEIGHT,
        }
    }
}

/// Pixel dimensions the source image is resized to before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGeometry {
    pub width: u32,
    pub height: u32,
}

impl TargetGeometry {
    /// Combine the solver result with explicit per-axis overrides.
    ///
    /// An override of 0 means "unset"; the solver's value is used for that
    /// axis. Both axes are clamped to at least one pixel.
    pub fn resolve(ideal: CharGeometry, width_override: u32, height_override: u32) -> Self {
        let solved = ideal.to_pixels();
        let width = if width_override == 0 { solved.width } else { width_override };
        let height = if height_override == 0 { solved.height } else { height_override };
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Number of whole 4x8 blocks in each direction.
    pub fn char_geometry(self) -> CharGeometry {
        CharGeometry {
            columns: self.width / BLOCK_WIDTH,
            rows: self.height / BLOCK_HEIGHT,
        }
    }
}

/// Compute the character grid an image should occupy in the terminal.
///
/// The image is first stretched horizontally by [`WIDTH_SCALE`] when
/// `double_width` is set. The usable area is the terminal minus
/// [`PADDING_COLUMNS`] x [`PADDING_ROWS`]. Width and height are then shrunk
/// alternately by one padding step, each time recomputing the other axis from
/// the aspect ratio, until both fit. Either branch can re-trigger the other,
/// so both are checked on every pass.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `double_width` - Compensate for glyph cells being narrower than tall
/// * `terminal` - Terminal size in cells
///
/// # Returns
/// The ideal grid size, at least 1x1.
pub fn ideal_char_size(
    img_width: u32,
    img_height: u32,
    double_width: bool,
    terminal: TerminalGeometry,
) -> CharGeometry {
    if img_width == 0 || img_height == 0 {
        return CharGeometry { columns: 1, rows: 1 };
    }

    let scale = if double_width { WIDTH_SCALE } else { 1 };
    let mut width = i64::from(img_width) * i64::from(scale);
    let mut height = i64::from(img_height);
    let aspect = width as f64 / height as f64;

    // Tiny terminals still need a positive target or the loop never settles.
    let max_width = (i64::from(terminal.cols) - PADDING_COLUMNS).max(1);
    let max_height = (i64::from(terminal.rows) - PADDING_ROWS).max(1);

    let mut solving = true;
    while solving {
        solving = false;

        if width > max_width {
            width = (width - PADDING_COLUMNS).max(1);
            height = (width as f64 / aspect) as i64;
            solving = true;
        }

        if height > max_height {
            height = (height - PADDING_ROWS).max(1);
            width = (height as f64 * aspect) as i64;
            solving = true;
        }
    }

    CharGeometry {
        columns: width.max(1) as u32,
        rows: height.max(1) as u32,
    }
}
