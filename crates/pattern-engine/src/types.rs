//! Buffers and geometry shared by the pipeline stages.

use image::RgbaImage;

use crate::{PatternError, Result};

/// A decoded RGBA raster, row-major, origin top-left.
pub type PixelBuffer = RgbaImage;

/// An RGBA raster whose color channels are all 0 or all 255.
///
/// Only the binarizer (or [`BinaryBuffer::from_rgba`], which checks the
/// invariant) can produce one. Alpha carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryBuffer(RgbaImage);

impl BinaryBuffer {
    /// Wrap a buffer already known to be binary.
    pub(crate) fn new_unchecked(img: RgbaImage) -> Self {
        Self(img)
    }

    /// Wrap an RGBA buffer, rejecting any pixel that is not pure black or white.
    pub fn from_rgba(img: RgbaImage) -> Result<Self> {
        if let Some((x, y, px)) = img
            .enumerate_pixels()
            .find(|(_, _, px)| !(px[0] == px[1] && px[1] == px[2] && (px[0] == 0 || px[0] == 255)))
        {
            return Err(PatternError::InvariantViolation(format!(
                "pixel ({x}, {y}) = {:?} is not black or white",
                px.0
            )));
        }
        Ok(Self(img))
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    /// Whether the pixel at `(x, y)` is dark. Panics when out of bounds.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        self.0.get_pixel(x, y)[0] == 0
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.0
    }

    pub fn into_image(self) -> RgbaImage {
        self.0
    }
}

/// Minimal axis-aligned box around the dark pixels, covering
/// `[x, x + width) × [y, y + height)`. Width and height are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// One past the rightmost column.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the box fits inside a `width × height` raster.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && u64::from(self.x) + u64::from(self.width) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(height)
    }
}

/// A maximal run of dark pixels in one column, rows `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: u32,
    pub end: u32,
}

impl Segment {
    /// Number of rows covered.
    pub fn rows(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// A sampled column and its segments in increasing row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Absolute x in the binary buffer.
    pub x: u32,
    pub segments: Vec<Segment>,
}
