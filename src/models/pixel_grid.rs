use crate::error::{Error, Result};
use crate::models::Rgb;

/// Owned RGB pixel grid backed by a flat row-major buffer (3 bytes per
/// pixel). Immutable once constructed; one grid corresponds to one decoded
/// image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Build a grid from raw RGB bytes.
    ///
    /// The buffer length must be exactly `width * height * 3` and both
    /// dimensions must be at least one pixel.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::BufferSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from a decoded `image` crate buffer.
    pub fn from_image(img: image::RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }

    /// Grid width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at (x, y), or `None` when the coordinate is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Raw RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
