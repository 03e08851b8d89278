//! Error types shared across the crate.

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by decoding, sampling and CSV parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be decoded into a pixel grid.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A pixel buffer did not match the declared dimensions.
    #[error("buffer of {len} bytes does not match {width}x{height} RGB image")]
    BufferSize {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
        /// Actual buffer length in bytes.
        len: usize,
    },

    /// Image dimensions must both be at least one pixel.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
    },

    /// The sampling stride must be a positive number of pixels.
    #[error("sampling stride must be at least 1 pixel, got {0}")]
    InvalidStride(u32),

    /// A hex color string was not a 6-digit code.
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),

    /// A CSV document did not parse back into a sample grid.
    #[error("invalid grid CSV at line {line}: {reason}")]
    CsvParse {
        /// 1-based line number of the offending row.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
