//! colorgrid - image color inspection
//!
//! Decode an image into an owned RGB pixel grid, then inspect it: look up
//! the color under a pixel coordinate, compute per-channel intensity
//! histograms, and sample a grid of hex color codes on a fixed pixel stride
//! for CSV export.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Error type and result alias.
pub mod error;
/// CSV export/import of sampled grids.
pub mod export;
/// Per-channel intensity histograms.
pub mod histogram;
/// Single-pixel color lookup.
pub mod lookup;
/// Core data structures (PixelGrid, Rgb, SampleGrid).
pub mod models;
/// Stride-based color grid sampling.
pub mod sampler;
/// Image loading helpers.
pub mod tools;

pub use error::{Error, Result};
pub use histogram::{Histogram, histogram, histogram_parallel};
pub use lookup::{PixelSample, lookup};
pub use models::{PixelGrid, Rgb, SampleGrid};
pub use sampler::sample;

use std::path::Path;

/// Inspector owning one decoded image.
///
/// Wraps a [`PixelGrid`] for the duration of one analysis pass, mirroring
/// the one-image-per-request lifecycle: decode once, then run any number of
/// lookups, histograms and samplings against the same buffer.
pub struct Inspector {
    image: PixelGrid,
}

impl Inspector {
    /// Decode an image file into an inspector.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            image: tools::load_grid(path)?,
        })
    }

    /// Wrap an already decoded pixel grid.
    pub fn from_grid(image: PixelGrid) -> Self {
        Self { image }
    }

    /// The decoded image.
    pub fn image(&self) -> &PixelGrid {
        &self.image
    }

    /// Color under a pixel coordinate, `None` when out of bounds.
    pub fn lookup(&self, x: u32, y: u32) -> Option<PixelSample> {
        lookup(&self.image, x, y)
    }

    /// Channel intensity histograms for the whole image.
    pub fn histogram(&self) -> Histogram {
        histogram(&self.image)
    }

    /// Sample a color grid on the given pixel stride.
    pub fn sample(&self, step: u32) -> Result<SampleGrid> {
        sampler::sample(&self.image, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelGrid {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 0]);
            }
        }
        PixelGrid::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn test_inspector_runs_all_analyses_on_one_image() {
        let inspector = Inspector::from_grid(gradient(50, 40));

        let sample = inspector.lookup(10, 20).unwrap();
        assert_eq!(sample.rgb, Rgb::new(10, 20, 0));

        let hist = inspector.histogram();
        assert_eq!(hist.pixel_count, 50 * 40);

        let grid = inspector.sample(10).unwrap();
        assert_eq!(grid.row_offsets().len(), 4);
        assert_eq!(grid.col_offsets().len(), 5);
    }

    #[test]
    fn test_lookup_hex_matches_grid_cell_modulo_case() {
        let inspector = Inspector::from_grid(gradient(30, 30));
        let grid = inspector.sample(10).unwrap();
        let clicked = inspector.lookup(20, 10).unwrap();
        let cell = grid.cell_at_offsets(10, 20).unwrap();
        assert_eq!(clicked.hex.to_uppercase(), cell);
    }
}
