//! Canonical record types and the composite analytics result.
//!
//! Raw rows come in as string-keyed maps straight from CSV parsing; the
//! cleaner turns them into immutable [`App`] and [`Review`] value records.
//! Everything downstream is a pure function of those records.

use crate::aggregate::{
    CategoryStats, CorrelationMatrix, MarketShare, Overview, RatingAnalysis, SentimentReport,
};
use crate::insights::InsightReport;
use crate::stats::FrequencyEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An untyped source record, one per CSV row. Transient; discarded after
/// normalization.
pub type RawRow = HashMap<String, String>;

/// Install count at or above which an app counts as popular.
pub const POPULAR_INSTALL_THRESHOLD: u64 = 1_000_000;

/// Lowest valid star rating.
pub const MIN_RATING: f64 = 1.0;
/// Highest valid star rating.
pub const MAX_RATING: f64 = 5.0;

/// A cleaned, deduplicated app record.
///
/// Exactly one `App` exists per unique `name` after deduplication; the
/// record kept is the one with the highest `review_count` among duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    /// App name, the dedup key. Never empty.
    pub name: String,
    /// Store category. Never empty.
    pub category: String,
    /// Star rating in [1.0, 5.0], absent when missing or unparseable.
    pub rating: Option<f64>,
    /// Number of user reviews.
    pub review_count: u64,
    /// Download size in bytes; absent when the size varies with device.
    pub size_bytes: Option<f64>,
    /// Install count derived from the display string (e.g. "10,000+").
    pub installs: u64,
    /// Label of the install-count bucket the app falls into.
    pub installs_bucket: String,
    /// "Free", "Paid", or whatever the source carried.
    pub app_type: String,
    /// Price in the store currency; 0 when free.
    pub price: f64,
    pub content_rating: Option<String>,
    pub genres: Option<String>,
    pub last_updated: Option<String>,
    pub current_version: Option<String>,
    pub android_version: Option<String>,
    /// price > 0
    pub is_paid: bool,
    /// rating present and > 0
    pub has_rating: bool,
    /// installs >= [`POPULAR_INSTALL_THRESHOLD`]
    pub is_popular: bool,
    /// Per-app sentiment aggregate. Always `Some` after
    /// [`merge_sentiment`](crate::cleaner::merge_sentiment) has run; apps
    /// with no matching reviews get a zero-valued summary.
    pub sentiment: Option<SentimentSummary>,
}

/// A cleaned user review record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Name of the reviewed app. Not a checked foreign key; it may reference
    /// an app absent after filtering.
    pub app_name: String,
    /// Lower-cased sentiment label: "positive", "negative", or "neutral".
    pub sentiment_label: String,
    /// Signed sentiment strength in [-1.0, 1.0].
    pub polarity: f64,
    /// Objective-to-subjective measure in [0.0, 1.0].
    pub subjectivity: f64,
    pub is_positive: bool,
    pub is_negative: bool,
    pub is_neutral: bool,
}

/// Per-app sentiment aggregate computed by merging reviews.
///
/// `Default` is the zero-valued summary used for apps without reviews, so
/// downstream consumers never branch on absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total_reviews: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    pub avg_polarity: f64,
    pub avg_subjectivity: f64,
    /// Equal to `avg_polarity`; kept under the name the source used.
    pub sentiment_score: f64,
}

/// The composite analytics result consumed by the presentation layer.
///
/// Fully recomputed on every filter or data change; there is no partial
/// invalidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    pub overview: Overview,
    pub categories: Vec<CategoryStats>,
    pub market_share: MarketShare,
    pub ratings: RatingAnalysis,
    pub sentiment: SentimentReport,
    pub correlations: CorrelationMatrix,
    pub insights: InsightReport,
    /// Distribution of content ratings across the app set.
    pub content_ratings: Vec<FrequencyEntry>,
    /// Most common genres across the app set.
    pub top_genres: Vec<FrequencyEntry>,
    /// When this result was generated.
    pub generated_at: DateTime<Utc>,
}
