//! App Market Analytics Library
//!
//! Turns raw app-store CSV exports into a composite analytics result:
//! cleaning, deduplication, sentiment merging, statistics, aggregation,
//! and rule-based insights.
//!
//! # Overview
//!
//! The pipeline has three phases:
//!
//! - **Normalization**: display strings ("23M", "1,000,000+", "$2.99")
//!   become numbers; unparseable values degrade to defaults, never errors
//! - **Cleaning**: raw rows become canonical [`App`] and [`Review`]
//!   records, deduplicated by app name with per-app sentiment attached
//! - **Analytics**: pure functions over the cleaned records produce an
//!   [`Analytics`] snapshot, recomputed in full on every run
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use market_analytics::{loader, AnalyticsPipeline, FilterCriteria, filter_apps};
//!
//! let raw_apps = loader::load_app_rows("googleplaystore.csv")?;
//! let raw_reviews = loader::load_review_rows("googleplaystore_user_reviews.csv")?;
//!
//! let pipeline = AnalyticsPipeline::with_defaults();
//! let (apps, reviews) = pipeline.prepare(&raw_apps, &raw_reviews);
//!
//! // Optionally narrow the app set; analytics recompute from scratch.
//! let games = filter_apps(&apps, &FilterCriteria::new().category("GAME"));
//! let analytics = pipeline.analyze(&games, &reviews)?;
//!
//! println!("{} apps, avg rating {:.2}",
//!     analytics.overview.total_apps, analytics.overview.avg_rating);
//! ```
//!
//! # Configuration
//!
//! Use [`PipelineConfig`] to adjust list lengths and recommendation caps:
//!
//! ```rust,ignore
//! use market_analytics::{AnalyticsPipeline, PipelineConfig};
//!
//! let config = PipelineConfig::builder()
//!     .top_app_limit(5)
//!     .frequency_top_n(20)
//!     .build()?;
//! let pipeline = AnalyticsPipeline::new(config)?;
//! ```

pub mod aggregate;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod filter;
pub mod insights;
pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod stats;
pub mod types;

// Re-exports for convenient access
pub use aggregate::{
    category_performance, correlation_analytics, market_share, overview, rating_analysis,
    sentiment_analysis, CategoryShare, CategoryStats, CorrelationMatrix, MarketShare, Overview,
    RatingAnalysis, RatingBand, SentimentReport,
};
pub use cleaner::{clean_apps, clean_reviews, deduplicate_apps, merge_sentiment};
pub use config::{ConfigValidationError, PipelineConfig, PipelineConfigBuilder};
pub use error::{AnalyticsError, Result as AnalyticsResult, ResultExt};
pub use filter::{filter_apps, FilterCriteria};
pub use insights::{generate_insights, Insight, InsightKind, InsightReport};
pub use normalize::{categorize_installs, installs_to_number, price_to_number, size_to_bytes};
pub use pipeline::AnalyticsPipeline;
pub use stats::{
    basic_stats, correlation, frequency_analysis, outliers, trend_analysis, BasicStats,
    FrequencyEntry, OutlierSummary, TrendAnalysis, TrendDirection, TrendPoint,
};
pub use types::{
    Analytics, App, RawRow, Review, SentimentSummary, POPULAR_INSTALL_THRESHOLD,
};
