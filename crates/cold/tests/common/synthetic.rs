#![allow(dead_code)]

use cold::ColdFeatures;
use cold_core::Image;
use image::{DynamicImage, Rgb, RgbImage};

/// Opens the test logger; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Black mask with a white axis-aligned square `[lo, hi)` on both axes.
pub fn square_mask(size: usize, lo: usize, hi: usize) -> Image<u8> {
    assert!(lo < hi && hi <= size, "square must fit in the mask");
    let mut data = vec![0u8; size * size];
    for y in lo..hi {
        for x in lo..hi {
            data[y * size + x] = 255;
        }
    }
    Image::from_vec(size, size, data).expect("valid image")
}

/// Black mask with white filled disks `(cx, cy, r)`.
pub fn disks_mask(width: usize, height: usize, disks: &[(i64, i64, i64)]) -> Image<u8> {
    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let inside = disks.iter().any(|&(cx, cy, r)| {
                let dx = x as i64 - cx;
                let dy = y as i64 - cy;
                dx * dx + dy * dy <= r * r
            });
            if inside {
                data[y * width + x] = 255;
            }
        }
    }
    Image::from_vec(width, height, data).expect("valid image")
}

/// Light page with a dark rectangular stroke block, as an RGB raster.
pub fn page_with_block(width: u32, height: u32, block: (u32, u32, u32, u32)) -> DynamicImage {
    let (x0, y0, x1, y1) = block;
    let rgb = RgbImage::from_fn(width, height, |x, y| {
        if (x0..x1).contains(&x) && (y0..y1).contains(&y) {
            Rgb([30, 25, 40])
        } else {
            Rgb([235, 232, 220])
        }
    });
    DynamicImage::ImageRgb8(rgb)
}

/// Sum of one offset's histogram over all radial bins, per angular bin.
pub fn angular_marginal(features: &ColdFeatures, j: usize, n_angle_bins: usize) -> Vec<f64> {
    let mut out = vec![0.0; n_angle_bins];
    for (i, &v) in features.offset_slice(j).iter().enumerate() {
        out[i % n_angle_bins] += v;
    }
    out
}

/// Each offset histogram is a distribution or all zero.
pub fn assert_valid_features(features: &ColdFeatures) {
    for (k, hist) in features.iter_offsets() {
        assert!(
            hist.iter().all(|v| v.is_finite() && (0.0..=1.0).contains(v)),
            "offset {k} has out-of-range entries"
        );
        let sum: f64 = hist.iter().sum();
        assert!(
            (sum - 1.0).abs() < 1e-9 || sum == 0.0,
            "offset {k} sums to {sum}"
        );
    }
}
