//! End-to-end conversion from encoded image bytes to terminal output.
//!
//! decode -> fit to terminal -> resize -> blocks to glyphs -> escapes
//!
//! The whole frame is rendered into memory before anything is written, so a
//! failure at any stage leaves the output stream untouched.

use std::io::Write;

use crate::block::{MatchOptions, PixelBuffer};
use crate::error::{Error, Result};
use crate::image_io::{decode, resize};
use crate::layout::{
    ideal_char_size, CharGeometry, TargetGeometry, TerminalGeometry, BLOCK_HEIGHT, BLOCK_WIDTH,
};
use crate::render::{render_compat, render_glyphs, CLEAR_SCREEN};
use crate::transform::{to_char_grid, MAX_STRIPES};

/// Per-invocation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Explicit target pixel width, 0 = fit to terminal.
    pub width: u32,
    /// Explicit target pixel height, 0 = fit to terminal.
    pub height: u32,
    /// One colored space per pixel instead of glyphs.
    pub compat: bool,
    /// Stretch the width by 2 before fitting.
    pub double_width: bool,
    pub match_options: MatchOptions,
    pub max_stripes: usize,
    /// Clear the screen when the fitted grid size changes between calls.
    pub clear_on_resize: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            compat: false,
            double_width: true,
            match_options: MatchOptions::default(),
            max_stripes: MAX_STRIPES,
            clear_on_resize: true,
        }
    }
}

/// Last fitted grid size, carried by the caller across invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenState {
    last: Option<CharGeometry>,
}

impl ScreenState {
    /// Record `geometry` and report whether it differs from the previous one.
    ///
    /// The first call always reports a change.
    pub fn update(&mut self, geometry: CharGeometry) -> bool {
        let changed = self.last != Some(geometry);
        self.last = Some(geometry);
        changed
    }

    pub fn last(&self) -> Option<CharGeometry> {
        self.last
    }
}

/// Pixel size the decoded image will be resized to.
///
/// In compat mode every pixel becomes one cell, so the glyph-mode size is
/// divided by the block size.
pub fn target_geometry(ideal: CharGeometry, options: &RenderOptions) -> TargetGeometry {
    let target = TargetGeometry::resolve(ideal, options.width, options.height);
    if options.compat {
        TargetGeometry {
            width: (target.width / BLOCK_WIDTH).max(1),
            height: (target.height / BLOCK_HEIGHT).max(1),
        }
    } else {
        target
    }
}

/// Decode, fit and resize `bytes` into the buffer that will be rendered.
///
/// Also returns the fitted character grid, which drives screen clearing.
pub fn prepare(
    bytes: &[u8],
    options: &RenderOptions,
    terminal: TerminalGeometry,
) -> Result<(PixelBuffer, CharGeometry)> {
    let source = decode(bytes)?;
    let ideal = ideal_char_size(
        source.width(),
        source.height(),
        options.double_width,
        terminal,
    );
    let target = target_geometry(ideal, options);
    log::debug!(
        "source {}x{}, terminal {}x{}, grid {}x{}, target {}x{}",
        source.width(),
        source.height(),
        terminal.cols,
        terminal.rows,
        ideal.columns,
        ideal.rows,
        target.width,
        target.height
    );

    if !options.compat && (target.width < BLOCK_WIDTH || target.height < BLOCK_HEIGHT) {
        return Err(Error::DegenerateTarget {
            width: target.width,
            height: target.height,
        });
    }

    let pixels = resize(source, target.width, target.height)?;
    Ok((pixels, ideal))
}

/// Render already prepared pixels into a byte buffer.
pub fn render_frame(pixels: &PixelBuffer, options: &RenderOptions, clear: bool) -> Result<Vec<u8>> {
    let mut frame = Vec::new();
    if clear {
        frame.extend_from_slice(CLEAR_SCREEN);
    }
    if options.compat {
        render_compat(pixels, &mut frame)?;
    } else {
        let grid = to_char_grid(pixels, options.match_options, options.max_stripes);
        render_glyphs(&grid, &mut frame)?;
    }
    Ok(frame)
}

/// Print one encoded image to `out`.
///
/// # Arguments
/// * `bytes` - Encoded image file contents
/// * `options` - Size overrides and render mode
/// * `terminal` - Terminal size used to fit the image
/// * `screen` - State shared with previous calls, for screen clearing
/// * `out` - Destination, written once the whole frame is ready
pub fn print_image<W: Write>(
    bytes: &[u8],
    options: &RenderOptions,
    terminal: TerminalGeometry,
    screen: &mut ScreenState,
    out: &mut W,
) -> Result<()> {
    let (pixels, ideal) = prepare(bytes, options, terminal)?;
    let clear = screen.update(ideal) && options.clear_on_resize;
    let frame = render_frame(&pixels, options, clear)?;
    out.write_all(&frame)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_state_first_update_changes() {
        let mut state = ScreenState::default();
        let grid = CharGeometry { columns: 10, rows: 5 };
        assert!(state.update(grid));
        assert!(!state.update(grid));
        assert!(state.update(CharGeometry { columns: 11, rows: 5 }));
        assert_eq!(state.last(), Some(CharGeometry { columns: 11, rows: 5 }));
    }

    #[test]
    fn test_target_geometry_glyph_mode() {
        let ideal = CharGeometry { columns: 10, rows: 5 };
        let target = target_geometry(ideal, &RenderOptions::default());
        assert_eq!(target, TargetGeometry { width: 40, height: 40 });
    }

    #[test]
    fn test_target_geometry_compat_mode() {
        let ideal = CharGeometry { columns: 10, rows: 5 };
        let options = RenderOptions {
            compat: true,
            ..RenderOptions::default()
        };
        assert_eq!(
            target_geometry(ideal, &options),
            TargetGeometry { width: 10, height: 5 }
        );
    }

    #[test]
    fn test_target_geometry_compat_never_zero() {
        let ideal = CharGeometry { columns: 10, rows: 5 };
        let options = RenderOptions {
            compat: true,
            width: 3,
            height: 7,
            ..RenderOptions::default()
        };
        assert_eq!(
            target_geometry(ideal, &options),
            TargetGeometry { width: 1, height: 1 }
        );
    }
}
