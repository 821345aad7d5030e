//! Image decoding and resampling backed by the `image` crate.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::block::PixelBuffer;
use crate::error::{Error, Result};

/// Decode an encoded image (PNG, JPEG, GIF, BMP, WebP) into RGB pixels.
///
/// Alpha and grayscale sources are converted to three channels.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer> {
    let image = image::load_from_memory(bytes).map_err(Error::Decode)?;
    Ok(PixelBuffer::from(image.into_rgb8()))
}

/// Resample `pixels` to exactly `width` x `height`.
///
/// Returns the buffer untouched when it already has that size.
pub fn resize(pixels: PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer> {
    let (src_width, src_height) = (pixels.width(), pixels.height());
    if (src_width, src_height) == (width, height) {
        return Ok(pixels);
    }

    let failed = || Error::Resize {
        src_width,
        src_height,
        width,
        height,
    };
    if width == 0 || height == 0 || src_width == 0 || src_height == 0 {
        return Err(failed());
    }

    let source = RgbImage::from_raw(src_width, src_height, pixels.into_bytes()).ok_or_else(failed)?;
    log::debug!(
        "resizing {}x{} -> {}x{}",
        src_width,
        src_height,
        width,
        height
    );
    Ok(PixelBuffer::from(imageops::resize(
        &source,
        width,
        height,
        FilterType::Triangle,
    )))
}
