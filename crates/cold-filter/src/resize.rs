//! Separable bicubic resampling (Keys kernel, `a = -0.5`).
//!
//! Source sample for output index `i` is centered at `(i + 0.5) * scale`
//! in pixel-edge coordinates. When downscaling the kernel is stretched by the
//! scale factor. Taps outside the source are dropped and the remaining
//! weights renormalized. The horizontal pass runs first and is rounded to
//! 8 bits before the vertical pass.

use cold_core::{Image, ImageView};

const CUBIC_A: f64 = -0.5;
const CUBIC_SUPPORT: f64 = 2.0;

fn cubic(x: f64) -> f64 {
    let x = x.abs();
    if x < 1.0 {
        ((CUBIC_A + 2.0) * x - (CUBIC_A + 3.0)) * x * x + 1.0
    } else if x < 2.0 {
        (((x - 5.0) * x + 8.0) * x - 4.0) * CUBIC_A
    } else {
        0.0
    }
}

/// Per-output-sample tap window and normalized weights.
#[derive(Debug, Clone)]
struct Taps {
    start: Vec<usize>,
    weights: Vec<Vec<f64>>,
}

impl Taps {
    fn new(in_size: usize, out_size: usize) -> Self {
        let scale = in_size as f64 / out_size as f64;
        let filter_scale = scale.max(1.0);
        let support = CUBIC_SUPPORT * filter_scale;

        let mut start = Vec::with_capacity(out_size);
        let mut weights = Vec::with_capacity(out_size);
        for i in 0..out_size {
            let center = (i as f64 + 0.5) * scale;
            let lo = ((center - support + 0.5) as isize).max(0) as usize;
            let hi = ((center + support + 0.5) as isize).clamp(0, in_size as isize) as usize;

            let mut w: Vec<f64> = (lo..hi)
                .map(|s| cubic((s as f64 - center + 0.5) / filter_scale))
                .collect();
            let sum: f64 = w.iter().sum();
            if sum != 0.0 {
                for wi in &mut w {
                    *wi /= sum;
                }
            }

            start.push(lo);
            weights.push(w);
        }

        Self { start, weights }
    }

    fn apply(&self, i: usize, samples: impl Fn(usize) -> u8) -> u8 {
        let lo = self.start[i];
        let acc: f64 = self.weights[i]
            .iter()
            .enumerate()
            .map(|(k, &w)| w * f64::from(samples(lo + k)))
            .sum();
        (acc + 0.5).floor().clamp(0.0, 255.0) as u8
    }
}

pub fn resize_bicubic_u8(src: &ImageView<'_, u8>, out_w: usize, out_h: usize) -> Image<u8> {
    if src.is_empty() || out_w == 0 || out_h == 0 {
        return Image::new_fill(out_w, out_h, 0u8);
    }

    let horizontal = if out_w == src.width() {
        src.to_image()
    } else {
        let taps = Taps::new(src.width(), out_w);
        let mut out = Image::new_fill(out_w, src.height(), 0u8);
        let mut dst = out.as_view_mut();
        for y in 0..src.height() {
            let row = src.row(y);
            for (x, px) in dst.row_mut(y).iter_mut().enumerate() {
                *px = taps.apply(x, |s| row[s]);
            }
        }
        out
    };

    if out_h == src.height() {
        return horizontal;
    }

    let taps = Taps::new(src.height(), out_h);
    let mut out = Image::new_fill(out_w, out_h, 0u8);
    let hview = horizontal.as_view();
    let mut dst = out.as_view_mut();
    for y in 0..out_h {
        for (x, px) in dst.row_mut(y).iter_mut().enumerate() {
            *px = taps.apply(y, |s| hview.row(s)[x]);
        }
    }
    out
}

/// Doubles both dimensions.
pub fn upscale2x_bicubic_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    resize_bicubic_u8(src, src.width() * 2, src.height() * 2)
}
