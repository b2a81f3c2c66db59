//! Pearson correlation and simple trend classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slope magnitude below which a series counts as stable.
pub(crate) const TREND_SLOPE_THRESHOLD: f64 = 0.1;

/// A dated observation for trend analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Direction of a value series over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    InsufficientData,
}

/// Result of ordinary-least-squares trend fitting over a dated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    pub slope: f64,
    pub correlation: f64,
    /// Number of valid points the fit used.
    pub points: usize,
}

/// Pearson correlation coefficient between two series.
///
/// Returns 0 when the lengths differ, fewer than 2 valid pairs remain after
/// dropping non-finite entries, or either series has zero variance. The
/// divide is guarded; NaN never escapes.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() {
        return 0.0;
    }

    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .collect();
    if pairs.len() < 2 {
        return 0.0;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        covariance / denominator
    }
}

/// Fit a trend over a dated series.
///
/// Points are sorted by date ascending and the positional index becomes the
/// independent variable. Fewer than 2 valid points yields
/// [`TrendDirection::InsufficientData`] with zero slope and correlation.
pub fn trend_analysis(series: &[TrendPoint]) -> TrendAnalysis {
    let mut points: Vec<TrendPoint> = series
        .iter()
        .copied()
        .filter(|p| p.value.is_finite())
        .collect();
    points.sort_by_key(|p| p.date);

    if points.len() < 2 {
        return TrendAnalysis {
            direction: TrendDirection::InsufficientData,
            slope: 0.0,
            correlation: 0.0,
            points: points.len(),
        };
    }

    let xs: Vec<f64> = (0..points.len()).map(|i| i as f64).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.value).collect();

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let covariance: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    // Index variance is never zero for n >= 2.
    let var_x: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    let slope = covariance / var_x;

    let direction = if slope > TREND_SLOPE_THRESHOLD {
        TrendDirection::Increasing
    } else if slope < -TREND_SLOPE_THRESHOLD {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    TrendAnalysis {
        direction,
        slope,
        correlation: correlation(&xs, &ys),
        points: points.len(),
    }
}
