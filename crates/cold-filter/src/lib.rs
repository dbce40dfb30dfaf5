//! 8-bit image filters used to normalize scans before contour tracing.
//!
//! Every filter takes a borrowed view and returns a freshly allocated image;
//! no filter works in place.
//!
//! Border handling per filter:
//! - 3x3 morphology ignores taps outside the image.
//! - 3x3 median replicates edge pixels.
//! - 3x3 Gaussian mirrors with reflect-101.
//! - The sharpness smoothing kernel copies the outermost rows and columns.
//! - Bicubic resampling drops outside taps and renormalizes the weights.
//!
//! Rounding follows integer fixed-point conventions: blur, luma and resample
//! outputs round half up, sharpness blending truncates.

mod color;
mod enhance;
mod gaussian;
mod median;
mod morph;
mod resize;
mod threshold;

pub use color::luma_from_rgb;
pub use enhance::{invert_u8, sharpen_u8, smooth3x3_u8};
pub use gaussian::gaussian3x3_u8;
pub use median::median3x3_u8;
pub use morph::{close3x3_u8, dilate3x3_u8, erode3x3_u8};
pub use resize::{resize_bicubic_u8, upscale2x_bicubic_u8};
pub use threshold::{otsu_binarize_u8, otsu_threshold_u8, threshold_binary_u8};
