use std::path::Path;

use cold_contour::{Contour, extract_shape_contours};
use cold_core::Image;
use cold_descriptor::{ColdFeatures, build_descriptor};
use image::DynamicImage;
use log::{debug, info};

use crate::config::ColdConfig;
use crate::error::ColdError;
use crate::io::{load_mask, load_raster, raster_planes};
use crate::preprocess::{Preprocessed, preprocess_binary, preprocess_raster};

/// Features plus the intermediate artifacts they were computed from.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub features: ColdFeatures,
    /// Binary image the contours were traced on, padding included.
    pub binary: Image<u8>,
    /// Image before binarization, one plane per channel.
    pub reference: Vec<Image<u8>>,
    /// Traced contours, largest first, frame removed.
    pub contours: Vec<Contour>,
}

/// Validated extractor. Every call is independent of the previous ones.
#[derive(Debug, Clone)]
pub struct Cold {
    config: ColdConfig,
}

impl Cold {
    pub fn new(config: ColdConfig) -> Result<Self, ColdError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ColdConfig {
        &self.config
    }

    /// Loads `path` and runs the variant selected by `is_binary`.
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<ColdFeatures, ColdError> {
        self.extract_path_detailed(path).map(|e| e.features)
    }

    pub fn extract_path_detailed(&self, path: impl AsRef<Path>) -> Result<Extraction, ColdError> {
        let path = path.as_ref();
        info!(
            "extracting {} ({} variant)",
            path.display(),
            if self.config.is_binary { "binary" } else { "raster" }
        );
        if self.config.is_binary {
            let mask = load_mask(path)?;
            self.extract_mask_detailed(&mask)
        } else {
            let raster = load_raster(path)?;
            self.extract_raster_detailed(&raster)
        }
    }

    /// Binary-mask variant on an already loaded mask.
    pub fn extract_mask(&self, mask: &Image<u8>) -> Result<ColdFeatures, ColdError> {
        self.extract_mask_detailed(mask).map(|e| e.features)
    }

    pub fn extract_mask_detailed(&self, mask: &Image<u8>) -> Result<Extraction, ColdError> {
        ensure_non_empty(mask.width(), mask.height())?;
        let pre = preprocess_binary(
            &mask.as_view(),
            self.config.sharpness_factor,
            self.config.border_size,
        );
        Ok(self.describe(pre))
    }

    /// General variant on an already decoded raster.
    pub fn extract_raster(&self, raster: &DynamicImage) -> Result<ColdFeatures, ColdError> {
        self.extract_raster_detailed(raster).map(|e| e.features)
    }

    pub fn extract_raster_detailed(&self, raster: &DynamicImage) -> Result<Extraction, ColdError> {
        ensure_non_empty(raster.width() as usize, raster.height() as usize)?;
        let planes = raster_planes(raster)?;
        let pre = preprocess_raster(
            &planes,
            self.config.sharpness_factor,
            self.config.border_size,
        )?;
        Ok(self.describe(pre))
    }

    fn describe(&self, pre: Preprocessed) -> Extraction {
        let contours = extract_shape_contours(&pre.binary.as_view(), self.config.drops_frame());
        let features = build_descriptor(&contours, &self.config.descriptor);
        debug!(
            "{} contours, {} features, degenerate offsets: {:?}",
            contours.len(),
            features.len(),
            (0..features.offsets().len())
                .filter(|&j| features.is_degenerate_at(j))
                .collect::<Vec<_>>()
        );

        Extraction {
            features,
            binary: pre.binary,
            reference: pre.reference,
            contours,
        }
    }
}

fn ensure_non_empty(width: usize, height: usize) -> Result<(), ColdError> {
    if width == 0 || height == 0 {
        return Err(ColdError::EmptyImage { width, height });
    }
    Ok(())
}
