//! RGB pixel buffers and per-cell records.

/// Bytes per pixel in a [`PixelBuffer`].
pub const BYTES_PER_PIXEL: usize = 3;

/// RGB color of a pixel or a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel by index: 0 = red, 1 = green, 2 = blue.
    #[inline]
    pub fn channel(self, index: usize) -> u8 {
        match index {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }

    /// Squared Euclidean distance in RGB space.
    #[inline]
    pub fn distance2(self, other: CellColor) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Pack as `0x00RRGGBB`.
    #[inline]
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    #[inline]
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

/// Tightly packed, row-major RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap raw RGB bytes.
    ///
    /// Returns `None` when `data` is not exactly `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(BYTES_PER_PIXEL)?;
        (data.len() == expected).then_some(Self { data, width, height })
    }

    /// A buffer filled with a single color.
    pub fn filled(width: u32, height: u32, color: CellColor) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for _ in 0..count {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self { data, width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Color at `(x, y)`. Coordinates must be in bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> CellColor {
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        CellColor::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Overwrite the color at `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: CellColor) {
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&[color.r, color.g, color.b]);
    }

    /// Iterate the pixels row-major.
    pub fn pixels(&self) -> impl Iterator<Item = CellColor> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgb| CellColor::new(rgb[0], rgb[1], rgb[2]))
    }
}

impl From<image::RgbImage> for PixelBuffer {
    fn from(image: image::RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            data: image.into_raw(),
            width,
            height,
        }
    }
}

/// Render record for one 4x8 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharData {
    pub fg: CellColor,
    pub bg: CellColor,
    pub codepoint: u32,
}

/// Row-major grid of [`CharData`], one per block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharGrid {
    pub cells: Vec<CharData>,
    pub width: u32,
    pub height: u32,
}

impl CharGrid {
    /// Iterate the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[CharData]> {
        // chunks() rejects a zero size; an empty grid has no rows anyway.
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn get(&self, col: u32, row: u32) -> Option<&CharData> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get((row * self.width + col) as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_color_default() {
        assert_eq!(CellColor::default(), CellColor::new(0, 0, 0));
    }

    #[test]
    fn test_packed_round_trip() {
        let color = CellColor::new(0x12, 0x34, 0x56);
        assert_eq!(color.packed(), 0x0012_3456);
        assert_eq!(CellColor::from_packed(0x0012_3456), color);
    }

    #[test]
    fn test_distance2() {
        let black = CellColor::new(0, 0, 0);
        let white = CellColor::new(255, 255, 255);
        assert_eq!(black.distance2(white), 3 * 255 * 255);
        assert_eq!(white.distance2(white), 0);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 11]).is_none());
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 12]).is_some());
    }

    #[test]
    fn test_pixel_access() {
        let mut buffer = PixelBuffer::filled(3, 2, CellColor::new(1, 2, 3));
        buffer.set_pixel(2, 1, CellColor::new(9, 8, 7));
        assert_eq!(buffer.pixel(0, 0), CellColor::new(1, 2, 3));
        assert_eq!(buffer.pixel(2, 1), CellColor::new(9, 8, 7));
        assert_eq!(&buffer.as_bytes()[15..18], &[9, 8, 7]);
        assert_eq!(buffer.pixels().count(), 6);
    }

    #[test]
    fn test_grid_rows_and_get() {
        let cell = CharData {
            codepoint: 0x2584,
            ..CharData::default()
        };
        let grid = CharGrid {
            cells: vec![cell; 6],
            width: 3,
            height: 2,
        };
        assert_eq!(grid.rows().count(), 2);
        assert!(grid.get(2, 1).is_some());
        assert!(grid.get(3, 0).is_none());
        assert!(CharGrid::default().is_empty());
    }
}
