//! Descriptive statistics and IQR outlier fencing.

use super::finite_values;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Descriptive statistics over a numeric sample.
///
/// `Default` is the all-zero struct (with `mode: None`) returned for an
/// empty sample; none of the fields is ever NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; ties go to the first value reaching the maximum
    /// frequency in sorted order. `None` for an empty sample.
    pub mode: Option<f64>,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Population variance.
    pub variance: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

/// Result of IQR outlier detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub outliers: Vec<f64>,
    pub count: usize,
}

/// Linear-interpolated percentile over an ascending-sorted slice.
///
/// Returns 0 for an empty slice; `p` is in [0, 100].
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64)
    }
}

/// Compute descriptive statistics over a sample.
///
/// Non-finite values are dropped first; an empty remainder yields
/// `BasicStats::default()` rather than an error.
pub fn basic_stats(values: &[f64]) -> BasicStats {
    let mut clean = finite_values(values);
    if clean.is_empty() {
        return BasicStats::default();
    }
    // All values are finite here, so total ordering is safe.
    clean.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = clean.len();
    let mean = clean.iter().sum::<f64>() / n as f64;
    let variance = clean.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    let q1 = percentile(&clean, 25.0);
    let q3 = percentile(&clean, 75.0);

    BasicStats {
        count: n,
        mean,
        median: percentile(&clean, 50.0),
        mode: mode_of_sorted(&clean),
        min: clean[0],
        max: clean[n - 1],
        std_dev: variance.sqrt(),
        variance,
        q1,
        q3,
        iqr: q3 - q1,
    }
}

/// Most frequent value of an ascending-sorted sample. A strict comparison
/// while scanning runs gives ties to the first value reaching the maximum
/// frequency in sorted order.
fn mode_of_sorted(sorted: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, usize)> = None;
    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut run = 1;
        while i + run < sorted.len() && sorted[i + run] == value {
            run += 1;
        }
        if best.map_or(true, |(_, count)| run > count) {
            best = Some((value, run));
        }
        i += run;
    }
    best.map(|(value, _)| value)
}

/// Detect outliers with the IQR method.
///
/// Fewer than 4 clean values yields an empty result with zero bounds.
/// Outliers are all values strictly outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
pub fn outliers(values: &[f64]) -> OutlierSummary {
    let clean = finite_values(values);
    if clean.len() < 4 {
        return OutlierSummary::default();
    }

    let mut sorted = clean.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;
    let lower_bound = q1 - 1.5 * iqr;
    let upper_bound = q3 + 1.5 * iqr;

    let outliers: Vec<f64> = clean
        .into_iter()
        .filter(|v| *v < lower_bound || *v > upper_bound)
        .collect();

    OutlierSummary {
        lower_bound,
        upper_bound,
        count: outliers.len(),
        outliers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ==================== basic_stats tests ====================

    #[test]
    fn test_basic_stats_simple() {
        let stats = basic_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        // Population variance of 1..5 is 2.0
        assert!((stats.variance - 2.0).abs() < 1e-9);
        assert!((stats.std_dev - 2.0_f64.sqrt()).abs() < 1e-9);
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.iqr, 2.0);
    }

    #[test]
    fn test_basic_stats_empty_returns_zero_struct() {
        let stats = basic_stats(&[]);
        assert_eq!(stats, BasicStats::default());
        assert_eq!(stats.mode, None);
    }

    #[test]
    fn test_basic_stats_filters_non_finite() {
        let stats = basic_stats(&[f64::NAN, 2.0, f64::INFINITY, 4.0]);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 3.0);
    }

    #[test]
    fn test_basic_stats_all_nan_is_zero_struct() {
        assert_eq!(basic_stats(&[f64::NAN, f64::NAN]), BasicStats::default());
    }

    #[test]
    fn test_basic_stats_median_interpolation() {
        let stats = basic_stats(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q1, 1.75);
        assert_eq!(stats.q3, 3.25);
    }

    #[test]
    fn test_basic_stats_mode() {
        let stats = basic_stats(&[3.0, 1.0, 3.0, 2.0]);
        assert_eq!(stats.mode, Some(3.0));
    }

    #[test]
    fn test_basic_stats_mode_tie_takes_first_in_sorted_order() {
        let stats = basic_stats(&[5.0, 2.0, 5.0, 2.0]);
        assert_eq!(stats.mode, Some(2.0));
    }

    // ==================== percentile tests ====================

    #[test]
    fn test_percentile_edges() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 100.0), 4.0);
        assert_eq!(percentile(&sorted, 50.0), 2.5);
        assert_eq!(percentile(&[], 50.0), 0.0);
    }

    // ==================== outliers tests ====================

    #[test]
    fn test_outliers_detects_extreme_value() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let result = outliers(&values);
        assert_eq!(result.outliers, vec![100.0]);
        assert_eq!(result.count, 1);
        assert!(result.upper_bound < 100.0);
    }

    #[test]
    fn test_outliers_none_in_uniform_data() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let result = outliers(&values);
        assert!(result.outliers.is_empty());
    }

    #[test]
    fn test_outliers_small_sample_is_empty_with_zero_bounds() {
        let result = outliers(&[1.0, 2.0, 100.0]);
        assert_eq!(result, OutlierSummary::default());
        assert_eq!(result.lower_bound, 0.0);
        assert_eq!(result.upper_bound, 0.0);
    }

    #[test]
    fn test_outliers_values_on_fence_are_kept() {
        // Q1=2, Q3=4, IQR=2, fences at -1 and 7; 7.0 itself is not outside.
        let values = [1.0, 2.0, 3.0, 4.0, 7.0];
        let result = outliers(&values);
        assert!(result.outliers.is_empty());
    }
}
