//! Per-channel intensity histograms.

use rayon::prelude::*;
use serde::Serialize;

use crate::models::PixelGrid;

/// 256-bucket intensity counts for the three RGB channels of one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    /// Red channel bucket counts.
    #[serde(serialize_with = "serialize_buckets")]
    pub r: [u32; 256],
    /// Green channel bucket counts.
    #[serde(serialize_with = "serialize_buckets")]
    pub g: [u32; 256],
    /// Blue channel bucket counts.
    #[serde(serialize_with = "serialize_buckets")]
    pub b: [u32; 256],
    /// Total pixels counted; each channel's buckets sum to this.
    pub pixel_count: u64,
}

// serde only derives Serialize for arrays up to length 32.
fn serialize_buckets<S: serde::Serializer>(
    buckets: &[u32; 256],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(buckets)
}

impl Histogram {
    fn empty() -> Self {
        Self {
            r: [0; 256],
            g: [0; 256],
            b: [0; 256],
            pixel_count: 0,
        }
    }

    fn accumulate(&mut self, rgb_bytes: &[u8]) {
        for px in rgb_bytes.chunks_exact(3) {
            self.r[px[0] as usize] += 1;
            self.g[px[1] as usize] += 1;
            self.b[px[2] as usize] += 1;
        }
        self.pixel_count += (rgb_bytes.len() / 3) as u64;
    }

    fn merge(mut self, other: Self) -> Self {
        for i in 0..256 {
            self.r[i] += other.r[i];
            self.g[i] += other.g[i];
            self.b[i] += other.b[i];
        }
        self.pixel_count += other.pixel_count;
        self
    }

    /// Bucket with the highest count for a channel, with its count.
    /// Ties resolve to the lowest intensity.
    pub fn peak(buckets: &[u32; 256]) -> (u8, u32) {
        let mut best = (0u8, buckets[0]);
        for (value, &count) in buckets.iter().enumerate().skip(1) {
            if count > best.1 {
                best = (value as u8, count);
            }
        }
        best
    }

    /// Mean intensity for a channel, 0.0 when the image is empty.
    pub fn mean(&self, buckets: &[u32; 256]) -> f64 {
        if self.pixel_count == 0 {
            return 0.0;
        }
        let sum: u64 = buckets
            .iter()
            .enumerate()
            .map(|(value, &count)| value as u64 * count as u64)
            .sum();
        sum as f64 / self.pixel_count as f64
    }
}

/// Count channel intensity occurrences across the whole image.
pub fn histogram(image: &PixelGrid) -> Histogram {
    let mut hist = Histogram::empty();
    hist.accumulate(image.as_bytes());
    hist
}

/// Parallel variant of [`histogram`] for large images.
///
/// Rows are counted into per-thread partial histograms and merged, so the
/// result is identical to the sequential version.
pub fn histogram_parallel(image: &PixelGrid) -> Histogram {
    let row_bytes = image.width() as usize * 3;
    image
        .as_bytes()
        .par_chunks(row_bytes)
        .fold(Histogram::empty, |mut hist, row| {
            hist.accumulate(row);
            hist
        })
        .reduce(Histogram::empty, Histogram::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> PixelGrid {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    data.extend_from_slice(&[255, 0, 0]);
                } else {
                    data.extend_from_slice(&[0, 0, 255]);
                }
            }
        }
        PixelGrid::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn test_buckets_sum_to_pixel_count() {
        let img = checkerboard(7, 5);
        let hist = histogram(&img);
        assert_eq!(hist.pixel_count, 35);
        for buckets in [&hist.r, &hist.g, &hist.b] {
            assert_eq!(buckets.iter().map(|&c| c as u64).sum::<u64>(), 35);
        }
    }

    #[test]
    fn test_counts_land_in_expected_buckets() {
        let img = checkerboard(4, 4);
        let hist = histogram(&img);
        assert_eq!(hist.r[255], 8);
        assert_eq!(hist.r[0], 8);
        assert_eq!(hist.g[0], 16);
        assert_eq!(hist.b[255], 8);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let img = checkerboard(33, 17);
        assert_eq!(histogram(&img), histogram_parallel(&img));
    }

    #[test]
    fn test_serializes_full_buckets() {
        let img = checkerboard(4, 4);
        let hist = histogram(&img);
        let json: serde_json::Value = serde_json::from_str(
            &serde_json::to_string(&hist).expect("histogram must serialize"),
        )
        .unwrap();
        assert_eq!(json["r"].as_array().unwrap().len(), 256);
        assert_eq!(json["g"][0], 16);
        assert_eq!(json["b"][255], 8);
        assert_eq!(json["pixel_count"], 16);
    }

    #[test]
    fn test_peak_and_mean() {
        let img = checkerboard(4, 4);
        let hist = histogram(&img);
        assert_eq!(Histogram::peak(&hist.g), (0, 16));
        assert_eq!(hist.mean(&hist.g), 0.0);
        assert!((hist.mean(&hist.r) - 127.5).abs() < 1e-9);
    }
}
