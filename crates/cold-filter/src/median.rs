use cold_core::{BorderMode, Image, ImageView, tap};

/// 3x3 median filter with replicated edges.
pub fn median3x3_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let mut out = Image::new_fill(src.width(), src.height(), 0u8);
    if src.is_empty() {
        return out;
    }

    let mode = BorderMode::Clamp;
    let mut window = [0u8; 9];
    let mut dst = out.as_view_mut();
    for y in 0..src.height() {
        let row = dst.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            let mut i = 0;
            for dy in -1isize..=1 {
                for dx in -1isize..=1 {
                    window[i] = tap(src, x as isize + dx, y as isize + dy, mode)
                        .expect("clamp border maps every tap of a non-empty image");
                    i += 1;
                }
            }
            window.sort_unstable();
            *px = window[4];
        }
    }

    out
}
