//! Generic statistical toolkit.
//!
//! Domain-agnostic numeric primitives shared by the aggregation layer. All
//! functions filter out non-finite input and degrade to defined zero-valued
//! results on empty or degenerate data instead of returning NaN.

mod correlation;
mod descriptive;
mod frequency;

pub use correlation::{correlation, trend_analysis, TrendAnalysis, TrendDirection, TrendPoint};
pub use descriptive::{basic_stats, outliers, percentile, BasicStats, OutlierSummary};
pub use frequency::{frequency_analysis, FrequencyEntry};

/// Keep only finite values.
pub(crate) fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}
