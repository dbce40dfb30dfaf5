use std::fmt;

use serde::{Deserialize, Serialize};

/// How a log-distance is mapped onto a radial bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialBinRule {
    /// Bin = (number of edges strictly above the value) - 1, clamped.
    /// Near pairs land in high bins, far pairs in bin 0.
    #[default]
    EdgeCount,
    /// Bin = (number of edges at or below the value) - 1, clamped.
    /// Near pairs land in bin 0.
    Ascending,
}

/// Bin grid and pairing parameters of the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorConfig {
    /// Index offsets `k`; one histogram per entry, in this order.
    pub offsets: Vec<usize>,
    pub n_rho_bins: usize,
    pub n_angle_bins: usize,
    /// Smallest radial edge, in pixels.
    pub r_inner: f64,
    /// Largest radial edge, in pixels.
    pub r_outer: f64,
    /// Simplification tolerance as a fraction of the closed perimeter.
    pub approx_poly_factor: f64,
    pub radial_rule: RadialBinRule,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            offsets: vec![3, 4, 5, 6, 7],
            n_rho_bins: 7,
            n_angle_bins: 12,
            r_inner: 5.0,
            r_outer: 35.0,
            approx_poly_factor: 0.01,
            radial_rule: RadialBinRule::EdgeCount,
        }
    }
}

impl DescriptorConfig {
    pub fn bins_per_offset(&self) -> usize {
        self.n_rho_bins * self.n_angle_bins
    }

    /// Length of the feature vector this configuration produces.
    pub fn feature_len(&self) -> usize {
        self.offsets.len() * self.bins_per_offset()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.offsets.is_empty() {
            return Err(ConfigError::EmptyOffsets);
        }
        if self.offsets.contains(&0) {
            return Err(ConfigError::ZeroOffset);
        }
        if self.n_rho_bins == 0 || self.n_angle_bins == 0 {
            return Err(ConfigError::ZeroBins {
                rho: self.n_rho_bins,
                angle: self.n_angle_bins,
            });
        }
        let radii_ok = self.r_inner.is_finite()
            && self.r_outer.is_finite()
            && self.r_inner > 0.0
            && self.r_outer > self.r_inner;
        if !radii_ok {
            return Err(ConfigError::InvalidRadii {
                inner: self.r_inner,
                outer: self.r_outer,
            });
        }
        if !self.approx_poly_factor.is_finite() || self.approx_poly_factor < 0.0 {
            return Err(ConfigError::InvalidApproxFactor(self.approx_poly_factor));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    EmptyOffsets,
    ZeroOffset,
    ZeroBins { rho: usize, angle: usize },
    InvalidRadii { inner: f64, outer: f64 },
    InvalidApproxFactor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOffsets => write!(f, "offset set is empty"),
            Self::ZeroOffset => write!(f, "offsets must be positive"),
            Self::ZeroBins { rho, angle } => {
                write!(f, "bin counts must be positive, got {rho} radial x {angle} angular")
            }
            Self::InvalidRadii { inner, outer } => write!(
                f,
                "radii must satisfy 0 < r_inner < r_outer, got r_inner={inner}, r_outer={outer}"
            ),
            Self::InvalidApproxFactor(v) => {
                write!(f, "approx_poly_factor must be finite and >= 0, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
