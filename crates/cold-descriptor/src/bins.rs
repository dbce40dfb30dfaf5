use crate::config::{DescriptorConfig, RadialBinRule};

/// `n` evenly spaced samples over `[start, stop]`, endpoint included.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Log10 radial bin edges, ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct RhoBinEdges {
    log_edges: Vec<f64>,
    rule: RadialBinRule,
}

impl RhoBinEdges {
    pub fn new(cfg: &DescriptorConfig) -> Self {
        let log_edges = linspace(cfg.r_inner, cfg.r_outer, cfg.n_rho_bins)
            .into_iter()
            .map(f64::log10)
            .collect();
        Self {
            log_edges,
            rule: cfg.radial_rule,
        }
    }

    pub fn log_edges(&self) -> &[f64] {
        &self.log_edges
    }

    pub fn n_bins(&self) -> usize {
        self.log_edges.len()
    }

    pub fn rule(&self) -> RadialBinRule {
        self.rule
    }

    /// Radial bin of a pair at Euclidean distance `rho`, always in
    /// `[0, n_bins)`.
    ///
    /// `rho == 0` goes to the bin of the smallest distances without taking
    /// a logarithm.
    pub fn quantize_rho(&self, rho: f64) -> usize {
        let last = self.n_bins().saturating_sub(1);
        if rho <= 0.0 {
            return match self.rule {
                RadialBinRule::EdgeCount => last,
                RadialBinRule::Ascending => 0,
            };
        }

        let rho_log = rho.log10();
        let count = match self.rule {
            RadialBinRule::EdgeCount => self.log_edges.iter().filter(|&&e| rho_log < e).count(),
            RadialBinRule::Ascending => self.log_edges.iter().filter(|&&e| e <= rho_log).count(),
        };
        count.saturating_sub(1).min(last)
    }
}

/// Angular bin of an orientation in degrees, reduced modulo `n_bins`.
pub fn quantize_theta(theta_deg: f64, n_bins: usize) -> usize {
    if n_bins == 0 {
        return 0;
    }
    let bin_size = 360.0 / n_bins as f64;
    let bin = (theta_deg / bin_size).floor() as i64;
    bin.rem_euclid(n_bins as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::{RhoBinEdges, linspace, quantize_theta};
    use crate::config::{DescriptorConfig, RadialBinRule};

    #[test]
    fn linspace_matches_endpoints() {
        let v = linspace(5.0, 35.0, 7);
        assert_eq!(v, vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
        assert_eq!(linspace(5.0, 35.0, 1), vec![5.0]);
        assert!(linspace(5.0, 35.0, 0).is_empty());
    }

    #[test]
    fn default_edges_are_log10_of_radii() {
        let edges = RhoBinEdges::new(&DescriptorConfig::default());
        assert_eq!(edges.n_bins(), 7);
        assert!((edges.log_edges()[0] - 5f64.log10()).abs() < 1e-12);
        assert!((edges.log_edges()[1] - 1.0).abs() < 1e-12);
        assert!((edges.log_edges()[6] - 35f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn edge_count_rule_puts_near_pairs_high() {
        let edges = RhoBinEdges::new(&DescriptorConfig::default());
        assert_eq!(edges.quantize_rho(0.0), 6);
        assert_eq!(edges.quantize_rho(1.0), 6);
        assert_eq!(edges.quantize_rho(10.0), 4);
        assert_eq!(edges.quantize_rho(12.0), 4);
        assert_eq!(edges.quantize_rho(19.0), 3);
        assert_eq!(edges.quantize_rho(34.9), 0);
        // At or past the outermost edge: clamped, not wrapped.
        assert_eq!(edges.quantize_rho(35.0), 0);
        assert_eq!(edges.quantize_rho(1000.0), 0);
    }

    #[test]
    fn ascending_rule_puts_near_pairs_low() {
        let cfg = DescriptorConfig {
            radial_rule: RadialBinRule::Ascending,
            ..DescriptorConfig::default()
        };
        let edges = RhoBinEdges::new(&cfg);
        assert_eq!(edges.quantize_rho(0.0), 0);
        assert_eq!(edges.quantize_rho(1.0), 0);
        assert_eq!(edges.quantize_rho(5.0), 0);
        assert_eq!(edges.quantize_rho(12.0), 1);
        assert_eq!(edges.quantize_rho(1000.0), 6);
    }

    #[test]
    fn theta_bins_wrap() {
        assert_eq!(quantize_theta(0.0, 12), 0);
        assert_eq!(quantize_theta(29.999, 12), 0);
        assert_eq!(quantize_theta(30.0, 12), 1);
        assert_eq!(quantize_theta(359.9, 12), 11);
        assert_eq!(quantize_theta(360.0, 12), 0);
        assert_eq!(quantize_theta(-1.0, 12), 11);
        assert_eq!(quantize_theta(90.0, 4), 1);
    }
}
