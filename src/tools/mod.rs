//! Image loading helpers shared by the library, CLI and benches.

use std::env;
use std::path::Path;

use image::GenericImageView;
use log::debug;

use crate::error::Result;
use crate::models::PixelGrid;

fn max_dim_from_env() -> Option<u32> {
    match env::var("COLORGRID_MAX_DIM") {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(0) => None,
            Ok(v) => Some(v),
            Err(_) => None,
        },
        Err(_) => None,
    }
}

/// Load an image file and decode it into an RGB pixel grid.
///
/// When `COLORGRID_MAX_DIM` is set to a non-zero value, images whose longest
/// side exceeds it are downscaled to that bound before analysis (`0` or
/// unset disables the cap).
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let img = image::open(path)?;
    let rgb = if let Some(max_dim) = max_dim_from_env() {
        let (orig_w, orig_h) = img.dimensions();
        if orig_w.max(orig_h) > max_dim {
            debug!(
                "downscaling {}x{} image to fit COLORGRID_MAX_DIM={}",
                orig_w, orig_h, max_dim
            );
            img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle)
                .to_rgb8()
        } else {
            img.to_rgb8()
        }
    } else {
        img.to_rgb8()
    };
    PixelGrid::from_image(rgb)
}
