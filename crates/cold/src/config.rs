use std::fs;
use std::path::Path;

use cold_descriptor::DescriptorConfig;
use serde::{Deserialize, Serialize};

use crate::error::ColdError;

/// Parameters of one extraction run. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColdConfig {
    /// Sharpness enhancement strength; 1 leaves the image unchanged.
    pub sharpness_factor: f32,
    /// White padding added on every side before tracing, in pixels.
    pub border_size: usize,
    /// Keep intermediate images for inspection. Does not change features.
    pub show_images: bool,
    /// Treat the input as a binary mask instead of a photo or scan.
    pub is_binary: bool,
    pub descriptor: DescriptorConfig,
}

impl Default for ColdConfig {
    fn default() -> Self {
        Self {
            sharpness_factor: 10.0,
            border_size: 3,
            show_images: false,
            is_binary: false,
            descriptor: DescriptorConfig::default(),
        }
    }
}

impl ColdConfig {
    pub fn validate(&self) -> Result<(), ColdError> {
        if !self.sharpness_factor.is_finite() || self.sharpness_factor <= 0.0 {
            return Err(ColdError::InvalidConfig(format!(
                "sharpness_factor must be finite and > 0, got {}",
                self.sharpness_factor
            )));
        }
        self.descriptor.validate()?;
        Ok(())
    }

    /// Whether the largest contour is the padding frame and must be dropped.
    pub fn drops_frame(&self) -> bool {
        self.border_size > 0
    }
}

/// Reads a JSON configuration; missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<ColdConfig, ColdError> {
    let contents = fs::read_to_string(path).map_err(|source| ColdError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ColdError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
