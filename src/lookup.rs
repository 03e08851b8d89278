//! Single-pixel color lookup.

use serde::Serialize;

use crate::models::{PixelGrid, Rgb};

/// Color found at a clicked pixel coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelSample {
    /// X coordinate of the inspected pixel.
    pub x: u32,
    /// Y coordinate of the inspected pixel.
    pub y: u32,
    /// Channel intensities at the pixel.
    pub rgb: Rgb,
    /// Lowercase `#rrggbb` encoding of the color.
    pub hex: String,
}

/// Look up the color at (x, y).
///
/// Returns `None` when the coordinate lies outside the image. An
/// out-of-bounds click is an expected interaction state, not an error.
pub fn lookup(image: &PixelGrid, x: u32, y: u32) -> Option<PixelSample> {
    let rgb = image.get(x, y)?;
    Some(PixelSample {
        x,
        y,
        rgb,
        hex: rgb.hex_lower(),
    })
}
