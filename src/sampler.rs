//! Stride-based color grid sampling.

use log::debug;

use crate::error::{Error, Result};
use crate::models::{PixelGrid, SampleGrid};

/// Sample an image on a fixed pixel stride.
///
/// Walks the image height and width in steps of `step` starting at 0,
/// stopping before the image bound (half-open stepping), and records the
/// uppercase hex code of the pixel at each (offset, offset) position. A
/// stride larger than a dimension leaves a single entry (0) on that axis.
///
/// Returns [`Error::InvalidStride`] when `step` is zero.
pub fn sample(image: &PixelGrid, step: u32) -> Result<SampleGrid> {
    if step == 0 {
        return Err(Error::InvalidStride(step));
    }

    let rows: Vec<u32> = (0..image.height()).step_by(step as usize).collect();
    let cols: Vec<u32> = (0..image.width()).step_by(step as usize).collect();

    let mut cells = Vec::with_capacity(rows.len() * cols.len());
    for &y in &rows {
        for &x in &cols {
            // Offsets come from the image's own bounds, so the pixel exists.
            let rgb = image.get(x, y).expect("sampled offset within image bounds");
            cells.push(rgb.hex_upper());
        }
    }

    debug!(
        "sampled {}x{} image at step {} -> {}x{} grid",
        image.width(),
        image.height(),
        step,
        rows.len(),
        cols.len()
    );

    Ok(SampleGrid::new(rows, cols, cells))
}
