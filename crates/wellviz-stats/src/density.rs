//! Kernel density estimation for violin-style charts.
//!
//! Densities are estimated with the Epanechnikov kernel and evaluated
//! pointwise over a caller-supplied grid (typically the chart axis ticks).
//! The curve is defined only at the grid points; it is not interpolated
//! beyond them.
//!
//! # Bandwidth
//!
//! Larger bandwidths produce smoother, flatter curves. The default policy is
//! one fifteenth of the sample range, floored at a small positive epsilon so
//! a near-constant sample still yields a finite curve.

/// Smallest bandwidth [`default_bandwidth`] will return.
pub const MIN_BANDWIDTH: f64 = 1e-6;

/// The Epanechnikov kernel: `0.75 * (1 - u^2)` for `|u| <= 1`, else `0`.
///
/// # Examples
///
/// ```
/// use wellviz_stats::density::epanechnikov;
///
/// assert_eq!(epanechnikov(0.0), 0.75);
/// assert_eq!(epanechnikov(1.0), 0.0);
/// assert_eq!(epanechnikov(2.5), 0.0);
/// ```
#[must_use]
pub fn epanechnikov(u: f64) -> f64 {
    if u.abs() <= 1.0 { 0.75 * (1.0 - u * u) } else { 0.0 }
}

/// Default bandwidth for a sample: `(max - min) / 15`, floored at
/// [`MIN_BANDWIDTH`].
///
/// # Panics
///
/// Panics if `values` is empty.
///
/// # Examples
///
/// ```
/// use wellviz_stats::density::default_bandwidth;
///
/// assert_eq!(default_bandwidth(&[0.0, 30.0]), 2.0);
///
/// // Near-constant samples are floored instead of collapsing to zero.
/// assert!(default_bandwidth(&[5.0, 5.0, 5.0]) > 0.0);
/// ```
#[must_use]
pub fn default_bandwidth(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "sample must be non-empty");
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    ((max - min) / 15.0).max(MIN_BANDWIDTH)
}

/// Builds an evenly spaced evaluation grid of `steps + 1` points covering
/// `lo..=hi`.
///
/// # Examples
///
/// ```
/// use wellviz_stats::density::evaluation_grid;
///
/// let grid = evaluation_grid(0.0, 10.0, 5);
/// assert_eq!(grid, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn evaluation_grid(lo: f64, hi: f64, steps: usize) -> Vec<f64> {
    assert!(steps > 0, "grid must have at least one step");
    let step = (hi - lo) / steps as f64;
    (0..=steps).map(|i| lo + step * i as f64).collect()
}

/// A kernel density estimate evaluated over a fixed grid.
///
/// Each point pairs a grid position with the estimated density at that
/// position. The curve is valid for the sample and bandwidth that produced
/// it; re-estimate rather than mutate when either changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    points: Vec<(f64, f64)>,
}

impl DensityCurve {
    /// Estimates the density of `values` at every point of `grid`.
    ///
    /// For each grid point `x`, the density is the mean over all sample
    /// values `v` of `K((x - v) / bandwidth) / bandwidth`, with `K` the
    /// Epanechnikov kernel.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or `bandwidth` is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellviz_stats::density::DensityCurve;
    ///
    /// let curve = DensityCurve::estimate(&[5.0], 1.0, &[4.0, 5.0, 6.0]);
    /// // A single observation peaks at its own value.
    /// assert_eq!(curve.points()[1], (5.0, 0.75));
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn estimate(values: &[f64], bandwidth: f64, grid: &[f64]) -> Self {
        assert!(!values.is_empty(), "sample must be non-empty");
        assert!(bandwidth > 0.0, "bandwidth must be strictly positive");

        let n = values.len() as f64;
        let points = grid
            .iter()
            .map(|&x| {
                let sum: f64 = values
                    .iter()
                    .map(|&v| epanechnikov((x - v) / bandwidth) / bandwidth)
                    .sum();
                (x, sum / n)
            })
            .collect();
        Self { points }
    }

    /// The `(position, density)` pairs, in grid order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The largest density value on the curve, or `0.0` for an empty grid.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.points
            .iter()
            .map(|&(_, d)| d)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_shape() {
        assert_eq!(epanechnikov(0.0), 0.75);
        assert_eq!(epanechnikov(-1.0), 0.0);
        assert!(epanechnikov(0.5) > epanechnikov(0.9));
    }

    #[test]
    fn test_densities_are_non_negative() {
        let values = [1.0, 2.0, 2.0, 3.0, 8.0, 9.0];
        let grid = evaluation_grid(0.0, 10.0, 50);
        let curve = DensityCurve::estimate(&values, default_bandwidth(&values), &grid);
        assert!(curve.points().iter().all(|&(_, d)| d >= 0.0));
    }

    #[test]
    fn test_single_observation_peaks_at_value() {
        let grid = evaluation_grid(0.0, 10.0, 100);
        let curve = DensityCurve::estimate(&[5.0], 1.0, &grid);
        let (peak_x, peak_d) = curve
            .points()
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert!((peak_x - 5.0).abs() < 0.11);
        assert!(peak_d > 0.0);
    }

    #[test]
    fn test_bimodal_sample_has_two_local_maxima() {
        let mut values = vec![0.0, 1.0, 2.0, 0.5, 1.5, 2.5, 1.0, 2.0, 0.0, 1.0];
        values.extend([98.0, 99.0, 100.0, 98.5, 99.5, 97.5, 99.0, 100.0, 98.0, 99.0]);
        let grid = evaluation_grid(0.0, 100.0, 200);
        let curve = DensityCurve::estimate(&values, default_bandwidth(&values), &grid);

        let points = curve.points();
        let local_maxima = points
            .windows(3)
            .filter(|w| w[1].1 > w[0].1 && w[1].1 > w[2].1)
            .map(|w| w[1].0)
            .collect::<Vec<_>>();

        assert!(local_maxima.iter().any(|&x| x < 10.0), "low mode missing");
        assert!(local_maxima.iter().any(|&x| x > 90.0), "high mode missing");
    }

    #[test]
    fn test_near_constant_sample_stays_finite() {
        let values = [5.0, 5.0, 5.0, 5.0];
        let grid = evaluation_grid(4.0, 6.0, 20);
        let curve = DensityCurve::estimate(&values, default_bandwidth(&values), &grid);
        assert!(curve.points().iter().all(|&(_, d)| d.is_finite()));
        assert!(curve.peak() > 0.0);
    }

    #[test]
    fn test_evaluation_grid_endpoints() {
        let grid = evaluation_grid(1.0, 7.0, 3);
        assert_eq!(grid.first(), Some(&1.0));
        assert_eq!(grid.last(), Some(&7.0));
        assert_eq!(grid.len(), 4);
    }

    #[test]
    #[should_panic(expected = "bandwidth must be strictly positive")]
    fn test_zero_bandwidth_panics() {
        let _ = DensityCurve::estimate(&[1.0], 0.0, &[0.0, 1.0]);
    }
}
