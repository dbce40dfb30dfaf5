use cold_contour::{approx_polygon, arc_length};
use cold_core::Point2i;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::bins::RhoBinEdges;
use crate::config::DescriptorConfig;
use crate::histogram::PairHistogram;

/// Concatenated per-offset histograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColdFeatures {
    offsets: Vec<usize>,
    bins_per_offset: usize,
    values: Vec<f64>,
}

impl ColdFeatures {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn bins_per_offset(&self) -> usize {
        self.bins_per_offset
    }

    /// Normalized histogram of the `j`-th offset.
    ///
    /// # Panics
    /// If `j >= self.offsets().len()`.
    pub fn offset_slice(&self, j: usize) -> &[f64] {
        let start = j * self.bins_per_offset;
        &self.values[start..start + self.bins_per_offset]
    }

    /// `(k, histogram)` for every offset, in configuration order.
    pub fn iter_offsets(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        self.offsets
            .iter()
            .copied()
            .zip(self.values.chunks_exact(self.bins_per_offset.max(1)))
    }

    /// True when no pair contributed to offset `j`.
    pub fn is_degenerate_at(&self, j: usize) -> bool {
        self.offset_slice(j).iter().all(|&v| v == 0.0)
    }
}

/// Builds the descriptor of `contours` under `cfg`.
///
/// Every contour is simplified once with tolerance
/// `approx_poly_factor * perimeter` and shared by all offsets. The result
/// always has `cfg.feature_len()` entries.
pub fn build_descriptor<C: AsRef<[Point2i]>>(contours: &[C], cfg: &DescriptorConfig) -> ColdFeatures {
    debug_assert!(cfg.validate().is_ok(), "descriptor config must be validated");

    let polygons: Vec<Vec<Point2i>> = contours
        .iter()
        .map(|c| {
            let pts = c.as_ref();
            approx_polygon(pts, cfg.approx_poly_factor * arc_length(pts, true), true)
        })
        .filter(|p| !p.is_empty())
        .collect();
    debug!(
        "simplified {} contours into {} polygons ({} vertices)",
        contours.len(),
        polygons.len(),
        polygons.iter().map(Vec::len).sum::<usize>()
    );

    let edges = RhoBinEdges::new(cfg);
    trace!(
        "radial edges (log10, {:?} rule): {:?}",
        edges.rule(),
        edges.log_edges()
    );
    let mut values = Vec::with_capacity(cfg.feature_len());
    for &k in &cfg.offsets {
        let mut hist = PairHistogram::new(&edges, cfg.n_angle_bins);
        for poly in &polygons {
            hist.accumulate(poly, k);
        }
        let occupied = hist.counts().iter().filter(|&&c| c > 0).count();
        trace!(
            "offset {k}: {} pairs over {occupied}/{} cells",
            hist.total(),
            hist.counts().len()
        );
        values.extend(hist.normalized());
    }

    ColdFeatures {
        offsets: cfg.offsets.clone(),
        bins_per_offset: cfg.bins_per_offset(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use cold_contour::find_contours;
    use cold_core::{Image, Point2i};

    use super::{ColdFeatures, build_descriptor};
    use crate::config::DescriptorConfig;

    fn filled_rect(w: usize, h: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> Image<u8> {
        let mut data = vec![0u8; w * h];
        for y in y0..y1 {
            for x in x0..x1 {
                data[y * w + x] = 255;
            }
        }
        Image::from_vec(w, h, data).expect("valid image")
    }

    fn assert_offset_sums(features: &ColdFeatures) {
        for (k, hist) in features.iter_offsets() {
            let sum: f64 = hist.iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-9 || sum == 0.0,
                "offset {k} sums to {sum}"
            );
            assert!(hist.iter().all(|v| v.is_finite() && (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn no_contours_gives_zero_vector_of_full_length() {
        let cfg = DescriptorConfig::default();
        let features = build_descriptor::<Vec<Point2i>>(&[], &cfg);

        assert_eq!(features.len(), 420);
        assert!(features.as_slice().iter().all(|&v| v == 0.0));
        assert!((0..5).all(|j| features.is_degenerate_at(j)));
    }

    #[test]
    fn traced_rectangle_fills_axis_bins() {
        let img = filled_rect(60, 40, 10, 10, 50, 30);
        let contours = find_contours(&img.as_view());
        assert_eq!(contours.len(), 1);

        let cfg = DescriptorConfig::default();
        let features = build_descriptor(&contours, &cfg);
        assert_eq!(features.len(), cfg.feature_len());
        assert_offset_sums(&features);

        // k = 3: each corner paired with its predecessor.
        let k3 = features.offset_slice(0);
        for idx in [6, 3 * 12 + 3, 0, 3 * 12 + 9] {
            assert!((k3[idx] - 0.25).abs() < 1e-12, "bin {idx}");
        }

        // k = 4: every vertex paired with itself.
        let k4 = features.offset_slice(1);
        assert!((k4[6 * 12 + 6] - 1.0).abs() < 1e-12);

        // k = 5 behaves like k = 1.
        assert!(!features.is_degenerate_at(2));
        let k5: Vec<usize> = (0..84).filter(|&i| features.offset_slice(2)[i] > 0.0).collect();
        assert_eq!(k5, vec![0, 6, 3 * 12 + 3, 3 * 12 + 9]);
    }

    #[test]
    fn single_point_contours_are_kept() {
        let cfg = DescriptorConfig::default();
        let contours = vec![vec![Point2i::new(4, 4)], Vec::new()];
        let features = build_descriptor(&contours, &cfg);

        for j in 0..cfg.offsets.len() {
            assert!((features.offset_slice(j)[6 * 12 + 6] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn offsets_are_reported_in_order() {
        let cfg = DescriptorConfig {
            offsets: vec![7, 2],
            ..DescriptorConfig::default()
        };
        let features = build_descriptor(&[vec![Point2i::new(0, 0), Point2i::new(20, 0)]], &cfg);
        let ks: Vec<usize> = features.iter_offsets().map(|(k, _)| k).collect();
        assert_eq!(ks, vec![7, 2]);
        assert_eq!(features.offsets(), &[7, 2]);
        assert_offset_sums(&features);
    }

    #[test]
    fn serializes_with_shape() {
        let cfg = DescriptorConfig {
            offsets: vec![3],
            n_rho_bins: 2,
            n_angle_bins: 2,
            ..DescriptorConfig::default()
        };
        let features = build_descriptor::<Vec<Point2i>>(&[], &cfg);
        let json = serde_json::to_value(&features).expect("serializable");
        assert_eq!(json["offsets"], serde_json::json!([3]));
        assert_eq!(json["bins_per_offset"], 4);
        assert_eq!(json["values"].as_array().map(Vec::len), Some(4));
    }
}
