//! Crate-level error type.

use crate::config::ConfigError;

/// Errors that abort an image conversion.
///
/// Nothing is written to the output stream once one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error reading image data: {0}")]
    Decode(#[source] image::ImageError),

    #[error("error resizing image from {src_width}x{src_height} to {width}x{height}")]
    Resize {
        src_width: u32,
        src_height: u32,
        width: u32,
        height: u32,
    },

    #[error("target size {width}x{height} is too small to hold one character cell")]
    DegenerateTarget { width: u32, height: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
