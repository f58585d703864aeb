//! Five-number boxplot summaries with IQR-based outlier fencing.
//!
//! A [`BoxplotSummary`] is a read-only snapshot of one sample: quartiles,
//! fences at 1.5 × IQR beyond the quartiles, whiskers clamped to the most
//! extreme in-fence values, and the outliers that fall strictly outside the
//! fences. It is recomputed from scratch whenever the underlying sample
//! changes, never mutated in place.
//!
//! Callers comparing groups are expected to filter out samples smaller than
//! their minimum-count threshold before summarizing; the summary itself
//! accepts any non-empty sample.

use crate::quantile::Quartiles;

/// Boxplot statistics for one non-empty sample.
///
/// # Examples
///
/// ```
/// use wellviz_stats::boxplot::BoxplotSummary;
///
/// let values = [6.0, 2.0, 3.0, 4.0, 5.0];
/// let summary = BoxplotSummary::new(&values);
/// assert_eq!(summary.median, 4.0);
/// assert_eq!(summary.whisker_low, 2.0);
/// assert_eq!(summary.whisker_high, 6.0);
/// assert!(summary.outliers.is_empty());
/// assert_eq!(summary.len, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotSummary {
    /// The first quartile (0.25 quantile).
    pub q1: f64,
    /// The median (0.5 quantile).
    pub median: f64,
    /// The third quartile (0.75 quantile).
    pub q3: f64,
    /// The interquartile range, `q3 - q1`.
    pub iqr: f64,
    /// Lower outlier fence, `q1 - 1.5 * iqr`.
    pub low_fence: f64,
    /// Upper outlier fence, `q3 + 1.5 * iqr`.
    pub high_fence: f64,
    /// Smallest sample value at or above the lower fence.
    pub whisker_low: f64,
    /// Largest sample value at or below the upper fence.
    pub whisker_high: f64,
    /// Values strictly outside the fences, in ascending order.
    pub outliers: Vec<f64>,
    /// Number of values in the sample.
    pub len: usize,
}

impl BoxplotSummary {
    /// Computes a summary from unsorted values.
    ///
    /// The values are sorted internally (total order on reals, so the result
    /// depends only on the multiset of values).
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty. Callers are responsible for filtering out
    /// empty and undersized groups first.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellviz_stats::boxplot::BoxplotSummary;
    ///
    /// let summary = BoxplotSummary::new(&[9.0, 1.0, 5.0]);
    /// assert_eq!(summary.median, 5.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes a summary from pre-sorted values, skipping the sort.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is empty or not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(!sorted_values.is_empty(), "sample must be non-empty");
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let quartiles = Quartiles::from_sorted(sorted_values);
        let iqr = quartiles.iqr();
        let low_fence = quartiles.q1 - 1.5 * iqr;
        let high_fence = quartiles.q3 + 1.5 * iqr;

        // q1 and q3 always lie inside the fences, so both filters are
        // non-empty for any non-empty sample.
        let whisker_low = sorted_values
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(quartiles.q1);
        let whisker_high = sorted_values
            .iter()
            .copied()
            .rfind(|&v| v <= high_fence)
            .unwrap_or(quartiles.q3);

        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        Self {
            q1: quartiles.q1,
            median: quartiles.median,
            q3: quartiles.q3,
            iqr,
            low_fence,
            high_fence,
            whisker_low,
            whisker_high,
            outliers,
            len: sorted_values.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_invariant() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0];
        let summary = BoxplotSummary::new(&values);
        assert!(summary.whisker_low <= summary.q1);
        assert!(summary.q1 <= summary.median);
        assert!(summary.median <= summary.q3);
        assert!(summary.q3 <= summary.whisker_high);
    }

    #[test]
    fn test_invariant_under_reordering() {
        let a = BoxplotSummary::new(&[5.0, 1.0, 3.0, 2.0, 4.0]);
        let b = BoxplotSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_value() {
        let summary = BoxplotSummary::new(&[42.0]);
        assert_eq!(summary.q1, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.q3, 42.0);
        assert_eq!(summary.iqr, 0.0);
        assert_eq!(summary.whisker_low, 42.0);
        assert_eq!(summary.whisker_high, 42.0);
        assert!(summary.outliers.is_empty());
        assert_eq!(summary.len, 1);
    }

    #[test]
    fn test_constant_sample() {
        let summary = BoxplotSummary::new(&[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(summary.q1, 5.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.q3, 5.0);
        assert_eq!(summary.whisker_low, 5.0);
        assert_eq!(summary.whisker_high, 5.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_outliers_strictly_outside_fences() {
        let mut values: Vec<f64> = (1..=20).map(f64::from).collect();
        values.push(1000.0);
        values.push(-1000.0);
        let summary = BoxplotSummary::new(&values);

        for &v in &summary.outliers {
            assert!(
                v < summary.low_fence || v > summary.high_fence,
                "outlier {v} should be strictly outside [{}, {}]",
                summary.low_fence,
                summary.high_fence,
            );
        }
        assert_eq!(summary.outliers, vec![-1000.0, 1000.0]);
    }

    #[test]
    fn test_non_outliers_inside_whiskers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 50.0];
        let summary = BoxplotSummary::new(&values);
        for &v in &values {
            if summary.outliers.contains(&v) {
                continue;
            }
            assert!(
                v >= summary.whisker_low && v <= summary.whisker_high,
                "non-outlier {v} should lie in [{}, {}]",
                summary.whisker_low,
                summary.whisker_high,
            );
        }
    }

    #[test]
    fn test_whiskers_clamp_to_in_fence_extremes() {
        // 100.0 falls outside the upper fence, so the upper whisker stops
        // at the largest in-fence value.
        let values = [1.0, 2.0, 3.0, 4.0, 100.0];
        let summary = BoxplotSummary::new(&values);
        assert_eq!(summary.whisker_low, 1.0);
        assert_eq!(summary.whisker_high, 4.0);
        assert_eq!(summary.outliers, vec![100.0]);
    }

    #[test]
    fn test_len_counts_outliers() {
        let summary = BoxplotSummary::new(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        assert_eq!(summary.len, 5);
    }

    #[test]
    #[should_panic(expected = "sample must be non-empty")]
    fn test_empty_sample_panics() {
        let _ = BoxplotSummary::new(&[]);
    }
}
