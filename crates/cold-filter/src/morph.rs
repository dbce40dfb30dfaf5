//! Grayscale 3x3 morphology with a full square structuring element.
//!
//! Taps outside the image do not participate, so the image border is never
//! eroded or dilated by an implicit background.

use cold_core::{BorderMode, Image, ImageView, tap};

pub fn erode3x3_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    reduce3x3(src, u8::MAX, u8::min)
}

pub fn dilate3x3_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    reduce3x3(src, u8::MIN, u8::max)
}

/// Dilation followed by erosion: fills gaps narrower than the element.
pub fn close3x3_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let dilated = dilate3x3_u8(src);
    erode3x3_u8(&dilated.as_view())
}

fn reduce3x3(src: &ImageView<'_, u8>, identity: u8, op: fn(u8, u8) -> u8) -> Image<u8> {
    let mut out = Image::new_fill(src.width(), src.height(), identity);
    if src.is_empty() {
        return out;
    }

    let mode = BorderMode::Skip;
    let mut dst = out.as_view_mut();
    for y in 0..src.height() {
        let row = dst.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            let mut acc = identity;
            for dy in -1isize..=1 {
                for dx in -1isize..=1 {
                    if let Some(v) = tap(src, x as isize + dx, y as isize + dy, mode) {
                        acc = op(acc, v);
                    }
                }
            }
            *px = acc;
        }
    }

    out
}
