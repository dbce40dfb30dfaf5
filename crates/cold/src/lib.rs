//! COLD shape descriptor for a single image.
//!
//! Pipeline:
//! - Preprocess into a strictly binary bitmap ([`preprocess_binary`] for
//!   masks, [`preprocess_raster`] for photos and scans), padded with white.
//! - Trace all borders, sort by area and drop the padding frame.
//! - Build per-offset log-distance/angle histograms over the simplified
//!   contours and concatenate them.
//!
//! [`Cold`] runs the whole pipeline from a path or an in-memory image:
//!
//! ```no_run
//! use cold::{Cold, ColdConfig};
//!
//! let cold = Cold::new(ColdConfig::default())?;
//! let features = cold.extract_path("signature.png")?;
//! assert_eq!(features.len(), 420);
//! # Ok::<(), cold::ColdError>(())
//! ```

mod config;
mod error;
mod extractor;
mod io;
mod preprocess;

pub use config::{ColdConfig, load_config};
pub use error::ColdError;
pub use extractor::{Cold, Extraction};
pub use io::{load_mask, load_raster, mask_from_gray, planes_to_dynamic, raster_planes, to_gray_image};
pub use preprocess::{Preprocessed, preprocess_binary, preprocess_raster};

pub use cold_contour::{BorderKind, Contour};
pub use cold_descriptor::{ColdFeatures, DescriptorConfig, RadialBinRule};
