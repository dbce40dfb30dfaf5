use cold_core::{Image, ImageView};

const SMOOTH_KERNEL: [[u32; 3]; 3] = [[1, 1, 1], [1, 5, 1], [1, 1, 1]];
const SMOOTH_SCALE: u32 = 13;

/// Center-weighted 3x3 smoothing. The outermost rows and columns are copied
/// unchanged; interior sums are divided by 13 and rounded.
pub fn smooth3x3_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let (w, h) = (src.width(), src.height());
    let mut out = src.to_image();
    if w < 3 || h < 3 {
        return out;
    }

    let mut dst = out.as_view_mut();
    for y in 1..h - 1 {
        let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
        let row = dst.row_mut(y);
        for (x, px) in row.iter_mut().enumerate().take(w - 1).skip(1) {
            let mut acc = 0u32;
            for (krow, srow) in SMOOTH_KERNEL.iter().zip(&rows) {
                for (k, &kv) in krow.iter().enumerate() {
                    acc += kv * u32::from(srow[x + k - 1]);
                }
            }
            *px = ((2 * acc + SMOOTH_SCALE) / (2 * SMOOTH_SCALE)) as u8;
        }
    }

    out
}

/// Sharpness enhancement by extrapolating away from the smoothed image:
/// `out = smooth + factor * (src - smooth)`, clamped to `[0, 255]` and
/// truncated.
///
/// `factor == 1` returns the input, `factor == 0` the smoothed image. On a
/// strictly binary input any `factor >= 1` keeps the output binary.
pub fn sharpen_u8(src: &ImageView<'_, u8>, factor: f32) -> Image<u8> {
    let degenerate = smooth3x3_u8(src);
    let mut out = degenerate.clone();

    let mut dst = out.as_view_mut();
    for y in 0..src.height() {
        let smooth_row = degenerate.as_view().row(y);
        let src_row = src.row(y);
        let row = dst.row_mut(y);
        for ((px, &s), &d) in row.iter_mut().zip(src_row).zip(smooth_row) {
            let blended = f32::from(d) + factor * (f32::from(s) - f32::from(d));
            *px = if blended <= 0.0 {
                0
            } else if blended >= 255.0 {
                255
            } else {
                blended as u8
            };
        }
    }

    out
}

pub fn invert_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    src.to_image().map(|&v| 255 - v)
}
