use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColdError {
    #[error("failed to load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("unsupported channel layout: expected 1 or 3 planes, got {0}")]
    UnsupportedChannels(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("image buffer error: {0}")]
    Image(#[from] cold_core::Error),
}

impl From<cold_descriptor::ConfigError> for ColdError {
    fn from(err: cold_descriptor::ConfigError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
