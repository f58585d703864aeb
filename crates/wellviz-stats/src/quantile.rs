//! Quantile computation over sorted samples.
//!
//! Uses the linear-interpolation method (R-7, the default of R and of
//! `d3.quantile`): for quantile `p` over `n` sorted values, the fractional
//! index is `p * (n - 1)` and the result interpolates between the values at
//! the floor and ceiling of that index.

/// Computes a single quantile from sorted data by linear interpolation.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `p` - The quantile to compute, in `0.0..=1.0`
///
/// # Panics
///
/// Panics if `sorted_values` is empty, not sorted in ascending order, or if
/// `p` is outside `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use wellviz_stats::quantile::quantile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&values, 0.5), 2.5);
/// assert_eq!(quantile(&values, 0.25), 1.75);
/// assert_eq!(quantile(&values, 0.0), 1.0);
/// assert_eq!(quantile(&values, 1.0), 4.0);
/// ```
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn quantile(sorted_values: &[f64], p: f64) -> f64 {
    assert!(!sorted_values.is_empty(), "sample must be non-empty");
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    assert!((0.0..=1.0).contains(&p), "quantile must be in [0, 1]");

    let index = p * (sorted_values.len() - 1) as f64;
    let lo = index.floor() as usize;
    let hi = index.ceil() as usize;
    let frac = index - index.floor();
    sorted_values[lo] + frac * (sorted_values[hi] - sorted_values[lo])
}

/// The first quartile, median, and third quartile of a sorted sample.
///
/// # Examples
///
/// ```
/// use wellviz_stats::quantile::Quartiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let q = Quartiles::from_sorted(&values);
/// assert_eq!(q.q1, 2.0);
/// assert_eq!(q.median, 3.0);
/// assert_eq!(q.q3, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// The 0.25 quantile.
    pub q1: f64,
    /// The 0.5 quantile.
    pub median: f64,
    /// The 0.75 quantile.
    pub q3: f64,
}

impl Quartiles {
    /// Computes all three quartiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is empty or not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        Self {
            q1: quantile(sorted_values, 0.25),
            median: quantile(sorted_values, 0.5),
            q3: quantile(sorted_values, 0.75),
        }
    }

    /// The interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let values = [7.0];
        assert_eq!(quantile(&values, 0.0), 7.0);
        assert_eq!(quantile(&values, 0.25), 7.0);
        assert_eq!(quantile(&values, 0.5), 7.0);
        assert_eq!(quantile(&values, 1.0), 7.0);
    }

    #[test]
    fn test_interpolated_median_even_count() {
        let values = [1.0, 2.0, 3.0, 10.0];
        assert_eq!(quantile(&values, 0.5), 2.5);
    }

    #[test]
    fn test_exact_median_odd_count() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&values, 0.5), 3.0);
    }

    #[test]
    fn test_matches_r7_reference() {
        // R: quantile(c(15, 20, 35, 40, 50), type = 7)
        let values = [15.0, 20.0, 35.0, 40.0, 50.0];
        assert_eq!(quantile(&values, 0.25), 20.0);
        assert_eq!(quantile(&values, 0.5), 35.0);
        assert_eq!(quantile(&values, 0.75), 40.0);
        assert_eq!(quantile(&values, 0.4), 29.0);
    }

    #[test]
    fn test_quartiles_constant_sample() {
        let values = [5.0, 5.0, 5.0, 5.0];
        let q = Quartiles::from_sorted(&values);
        assert_eq!(q.q1, 5.0);
        assert_eq!(q.median, 5.0);
        assert_eq!(q.q3, 5.0);
        assert_eq!(q.iqr(), 0.0);
    }

    #[test]
    #[should_panic(expected = "sample must be non-empty")]
    fn test_empty_sample_panics() {
        let _ = quantile(&[], 0.5);
    }

    #[test]
    #[should_panic(expected = "sorted in ascending order")]
    fn test_unsorted_sample_panics() {
        let _ = quantile(&[3.0, 1.0, 2.0], 0.5);
    }
}
