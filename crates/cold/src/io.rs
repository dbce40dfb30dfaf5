//! Conversions between `image` crate buffers and workspace images.
//!
//! - `load_mask`: decode a file into an 8-bit luma mask.
//! - `load_raster`: decode a file as-is.
//! - `raster_planes`: split a decoded raster into one gray or three RGB
//!   planes; alpha is dropped.
//! - `to_gray_image` / `planes_to_dynamic`: back to `image` buffers for
//!   saving.

use std::path::Path;

use cold_core::{Error, Image};
use image::{DynamicImage, GrayImage, RgbImage};

use crate::error::ColdError;

pub fn load_raster(path: &Path) -> Result<DynamicImage, ColdError> {
    image::open(path).map_err(|source| ColdError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_mask(path: &Path) -> Result<Image<u8>, ColdError> {
    let gray = load_raster(path)?.into_luma8();
    mask_from_gray(gray)
}

pub fn mask_from_gray(gray: GrayImage) -> Result<Image<u8>, ColdError> {
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    Ok(Image::from_vec(w, h, gray.into_raw())?)
}

pub fn raster_planes(img: &DynamicImage) -> Result<Vec<Image<u8>>, ColdError> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    if !img.color().has_color() {
        return Ok(vec![mask_from_gray(img.to_luma8())?]);
    }

    let rgb = img.to_rgb8();
    let mut planes = [
        Vec::with_capacity(w * h),
        Vec::with_capacity(w * h),
        Vec::with_capacity(w * h),
    ];
    for px in rgb.pixels() {
        for (plane, &v) in planes.iter_mut().zip(px.0.iter()) {
            plane.push(v);
        }
    }

    planes
        .into_iter()
        .map(|data| Image::from_vec(w, h, data).map_err(ColdError::from))
        .collect()
}

pub fn to_gray_image(img: &Image<u8>) -> Result<GrayImage, ColdError> {
    GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec()).ok_or(
        ColdError::Image(Error::SizeMismatch {
            expected: img.width() * img.height(),
            actual: img.data().len(),
        }),
    )
}

/// Reassembles one gray or three RGB planes into a `DynamicImage`.
pub fn planes_to_dynamic(planes: &[Image<u8>]) -> Result<DynamicImage, ColdError> {
    match planes {
        [gray] => Ok(DynamicImage::ImageLuma8(to_gray_image(gray)?)),
        [r, g, b] => {
            let (w, h) = (r.width(), r.height());
            for p in [g, b] {
                if (p.width(), p.height()) != (w, h) {
                    return Err(Error::ChannelMismatch {
                        expected: (w, h),
                        actual: (p.width(), p.height()),
                    }
                    .into());
                }
            }
            let interleaved: Vec<u8> = r
                .data()
                .iter()
                .zip(g.data())
                .zip(b.data())
                .flat_map(|((&rv, &gv), &bv)| [rv, gv, bv])
                .collect();
            RgbImage::from_raw(w as u32, h as u32, interleaved)
                .map(DynamicImage::ImageRgb8)
                .ok_or(ColdError::Image(Error::SizeMismatch {
                    expected: w * h * 3,
                    actual: r.data().len() * 3,
                }))
        }
        other => Err(ColdError::UnsupportedChannels(other.len())),
    }
}
