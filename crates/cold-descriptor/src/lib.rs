//! COLD feature vector from contour point sequences.
//!
//! For each offset `k` every simplified contour polygon contributes one pair
//! per vertex: vertex `i` and vertex `(i + k) mod n`. The pair's distance is
//! binned on a log10 radial grid and its orientation on a uniform angular
//! grid over `[0, 360)`. Each offset's histogram is L1-normalized and the
//! histograms are concatenated in offset order.
//!
//! Default grid: 7 radial bins with edges at `log10(5, 10, ..., 35)`, 12
//! angular bins of 30 degrees, offsets `3..=7`, giving 420 features.

mod bins;
mod config;
mod descriptor;
mod histogram;

pub use bins::{RhoBinEdges, quantize_theta};
pub use config::{ConfigError, DescriptorConfig, RadialBinRule};
pub use descriptor::{ColdFeatures, build_descriptor};
pub use histogram::PairHistogram;
