//! Normalization of input images into strictly binary 0/255 bitmaps.
//!
//! Both variants produce the page as foreground (255) and the strokes as
//! background (0). Padding with white joins page and padding into one frame
//! component whose outer border encloses the whole image; strokes show up
//! as holes inside it.

use cold_core::{Image, ImageView};
use cold_filter::{
    close3x3_u8, gaussian3x3_u8, invert_u8, luma_from_rgb, median3x3_u8, otsu_binarize_u8,
    sharpen_u8, threshold_binary_u8, upscale2x_bicubic_u8,
};
use log::debug;

use crate::error::ColdError;

const PAD_VALUE: u8 = 255;
/// Midpoint level used to snap sharpened pixels back to 0/255.
const REBINARIZE_LEVEL: u8 = 127;

/// Output of a preprocessing variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessed {
    /// Strictly binary image handed to contour tracing.
    pub binary: Image<u8>,
    /// Image before binarization, one plane per channel.
    pub reference: Vec<Image<u8>>,
    /// Otsu threshold chosen for the binarization step.
    pub threshold: u8,
}

/// Mask variant: close, median, Otsu, sharpen, invert, pad with white.
///
/// Sharpness factors below 1 blend toward the smoothed image and leave grey
/// rims, so the sharpened mask is thresholded at mid-level again before
/// inversion. `reference` holds the single inverted plane without padding.
pub fn preprocess_binary(mask: &ImageView<'_, u8>, sharpness: f32, border: usize) -> Preprocessed {
    let closed = close3x3_u8(mask);
    let denoised = median3x3_u8(&closed.as_view());
    let (threshold, bw) = otsu_binarize_u8(&denoised.as_view());
    let sharp = sharpen_u8(&bw.as_view(), sharpness);
    let snapped = threshold_binary_u8(&sharp.as_view(), REBINARIZE_LEVEL);
    let inverted = invert_u8(&snapped.as_view());
    let binary = inverted.padded(border, PAD_VALUE);

    debug!(
        "binary preprocess: {}x{} -> {}x{}, otsu threshold {threshold}",
        mask.width(),
        mask.height(),
        binary.width(),
        binary.height()
    );

    Preprocessed {
        binary,
        reference: vec![inverted],
        threshold,
    }
}

/// Raster variant for one gray plane or three RGB planes: sharpen, upscale
/// 2x, pad with white, convert to luma, Gaussian blur, Otsu.
///
/// `reference` holds the padded, upscaled, sharpened planes.
pub fn preprocess_raster(
    planes: &[Image<u8>],
    sharpness: f32,
    border: usize,
) -> Result<Preprocessed, ColdError> {
    let reference: Vec<Image<u8>> = planes
        .iter()
        .map(|p| {
            let sharp = sharpen_u8(&p.as_view(), sharpness);
            upscale2x_bicubic_u8(&sharp.as_view()).padded(border, PAD_VALUE)
        })
        .collect();

    let gray = match reference.as_slice() {
        [gray] => gray.clone(),
        [r, g, b] => luma_from_rgb(&r.as_view(), &g.as_view(), &b.as_view())?,
        other => {
            return Err(ColdError::UnsupportedChannels(other.len()));
        }
    };

    let blurred = gaussian3x3_u8(&gray.as_view());
    let (threshold, binary) = otsu_binarize_u8(&blurred.as_view());

    if let Some(first) = planes.first() {
        debug!(
            "raster preprocess: {} plane(s) {}x{} -> {}x{}, otsu threshold {threshold}",
            planes.len(),
            first.width(),
            first.height(),
            binary.width(),
            binary.height()
        );
    }

    Ok(Preprocessed {
        binary,
        reference,
        threshold,
    })
}
