use cold_core::{BorderMode, Image, ImageView, map_index};

/// 3-tap Gaussian for sigma 0.8, scaled to integers (sum 4).
const TAPS: [u32; 3] = [1, 2, 1];

/// Separable 3x3 Gaussian blur (`[1, 2, 1] / 4` per axis) with reflect-101
/// borders. The 2D sum is accumulated in integers and rounded once.
pub fn gaussian3x3_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let (w, h) = (src.width(), src.height());
    let mut out = Image::new_fill(w, h, 0u8);
    if src.is_empty() {
        return out;
    }

    let mode = BorderMode::Reflect101;
    let col_index = |x: isize| map_index(x, w, mode).expect("reflect101 maps non-empty rows");
    let row_index = |y: isize| map_index(y, h, mode).expect("reflect101 maps non-empty cols");

    // Horizontal pass kept at full precision (scale 4).
    let mut horiz = vec![0u32; w * h];
    for y in 0..h {
        let row = src.row(y);
        for x in 0..w {
            let mut acc = 0u32;
            for (k, &t) in TAPS.iter().enumerate() {
                let sx = col_index(x as isize + k as isize - 1);
                acc += t * u32::from(row[sx]);
            }
            horiz[y * w + x] = acc;
        }
    }

    let mut dst = out.as_view_mut();
    for y in 0..h {
        let taps_y = [
            row_index(y as isize - 1),
            y,
            row_index(y as isize + 1),
        ];
        let row = dst.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            let mut acc = 0u32;
            for (&t, &sy) in TAPS.iter().zip(&taps_y) {
                acc += t * horiz[sy * w + x];
            }
            *px = ((acc + 8) >> 4) as u8;
        }
    }

    out
}
