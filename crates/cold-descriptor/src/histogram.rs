use std::f64::consts::PI;

use cold_core::Point2i;

use crate::bins::{RhoBinEdges, quantize_theta};

/// Pair counts over the `n_rho x n_angle` grid, radial major.
#[derive(Debug, Clone)]
pub struct PairHistogram<'a> {
    edges: &'a RhoBinEdges,
    n_angle_bins: usize,
    counts: Vec<u32>,
}

impl<'a> PairHistogram<'a> {
    pub fn new(edges: &'a RhoBinEdges, n_angle_bins: usize) -> Self {
        Self {
            edges,
            n_angle_bins,
            counts: vec![0; edges.n_bins() * n_angle_bins],
        }
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn count(&self, rho_bin: usize, angle_bin: usize) -> u32 {
        self.counts[rho_bin * self.n_angle_bins + angle_bin]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Adds one entry per vertex `i`, pairing it with vertex `(i + k) mod n`.
    ///
    /// The pair orientation is `atan2(dy, dx) + pi` in degrees for
    /// `(dx, dy) = p2 - p1`. Empty polygons add nothing.
    pub fn accumulate(&mut self, polygon: &[Point2i], k: usize) {
        let n = polygon.len();
        if n == 0 || self.counts.is_empty() {
            return;
        }

        for (i, &p1) in polygon.iter().enumerate() {
            let p2 = polygon[(i + k) % n];
            let d = p2 - p1;
            let dx = f64::from(d.dx);
            let dy = f64::from(d.dy);

            let theta = (dy.atan2(dx) + PI).to_degrees();
            let r = self.edges.quantize_rho(d.norm());
            let a = quantize_theta(theta, self.n_angle_bins);
            self.counts[r * self.n_angle_bins + a] += 1;
        }
    }

    /// L1-normalized copy of the counts; all zeros when nothing was added.
    pub fn normalized(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let total = total as f64;
        self.counts.iter().map(|&c| f64::from(c) / total).collect()
    }
}
