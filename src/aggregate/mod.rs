//! Aggregation engine built atop the statistical toolkit and cleaned
//! records.
//!
//! Every function here is a pure function of the record set it is given:
//! aggregates are never cached or updated incrementally, and a filter
//! change means full recomputation.

mod categories;
mod correlations;
mod overview;
mod ratings;
mod sentiment;

pub use categories::{category_performance, market_share, CategoryShare, CategoryStats, MarketShare};
pub use correlations::{correlation_analytics, CorrelationMatrix};
pub use overview::{overview, Overview};
pub use ratings::{rating_analysis, AppRating, RatingAnalysis, RatingBand, RATING_BANDS};
pub use sentiment::{sentiment_analysis, LabelCounts, LabelPercentages, SentimentReport};

/// Percentage with a guarded denominator: 0 over an empty set, never NaN.
pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
