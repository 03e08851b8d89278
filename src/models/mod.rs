/// RGB color triple and hex encoding.
pub mod color;
/// Owned decoded image buffer.
pub mod pixel_grid;
/// Sampled color table with pixel-offset axes.
pub mod sample_grid;

pub use color::Rgb;
pub use pixel_grid::PixelGrid;
pub use sample_grid::SampleGrid;
