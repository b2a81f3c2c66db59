//! The analytics pipeline: cleaning, merging, and full recomputation.
//!
//! `prepare` turns raw rows into canonical records once; `analyze` is then
//! a pure function of records that can be re-run cheaply after filtering.
//! An analytics cycle either returns a complete [`Analytics`] or a single
//! [`AnalyticsError::GenerationFailed`], never a partial result.

use crate::aggregate::{
    category_performance, correlation_analytics, market_share, overview, rating_analysis,
    sentiment_analysis,
};
use crate::cleaner::{clean_apps, clean_reviews, deduplicate_apps, merge_sentiment};
use crate::config::PipelineConfig;
use crate::error::{AnalyticsError, Result};
use crate::insights::generate_insights;
use crate::stats::frequency_analysis;
use crate::types::{Analytics, App, RawRow, Review};
use chrono::Utc;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, info};

/// Orchestrates cleaning and analytics generation.
#[derive(Debug, Clone)]
pub struct AnalyticsPipeline {
    config: PipelineConfig,
}

impl AnalyticsPipeline {
    /// Create a pipeline from a validated configuration.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AnalyticsError::InvalidConfig(e.to_string()))?;
        Ok(Self { config })
    }

    /// Create a pipeline with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Turn raw rows into canonical records: clean both sources, drop
    /// duplicate apps, then attach per-app sentiment summaries.
    pub fn prepare(&self, raw_apps: &[RawRow], raw_reviews: &[RawRow]) -> (Vec<App>, Vec<Review>) {
        let apps = clean_apps(raw_apps);
        let kept = deduplicate_apps(apps);
        let reviews = clean_reviews(raw_reviews);
        let apps = merge_sentiment(kept, &reviews);

        info!(
            apps = apps.len(),
            reviews = reviews.len(),
            raw_apps = raw_apps.len(),
            raw_reviews = raw_reviews.len(),
            "prepared records"
        );
        (apps, reviews)
    }

    /// Run a full analytics cycle over cleaned records.
    ///
    /// All aggregates are recomputed from scratch. A panic anywhere in the
    /// cycle is caught and surfaced as [`AnalyticsError::GenerationFailed`]
    /// so callers see one failure mode instead of an aborted process.
    pub fn analyze(&self, apps: &[App], reviews: &[Review]) -> Result<Analytics> {
        let config = self.config.clone();
        catch_unwind(AssertUnwindSafe(|| compute_analytics(apps, reviews, &config))).map_err(
            |panic| {
                let message = panic
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| panic.downcast_ref::<&str>().copied())
                    .unwrap_or("analytics cycle panicked");
                AnalyticsError::GenerationFailed(message.to_string())
            },
        )
    }

    /// Convenience: prepare raw rows and run one analytics cycle.
    pub fn process(&self, raw_apps: &[RawRow], raw_reviews: &[RawRow]) -> Result<Analytics> {
        let (apps, reviews) = self.prepare(raw_apps, raw_reviews);
        self.analyze(&apps, &reviews)
    }
}

fn compute_analytics(apps: &[App], reviews: &[Review], config: &PipelineConfig) -> Analytics {
    let categories = category_performance(apps);
    let insights = generate_insights(apps, &categories, reviews, config.max_opportunities);

    let content_ratings: Vec<&str> = apps
        .iter()
        .filter_map(|a| a.content_rating.as_deref())
        .collect();
    // Multi-genre apps carry a ';'-separated list; count each genre once.
    let genres: Vec<&str> = apps
        .iter()
        .filter_map(|a| a.genres.as_deref())
        .flat_map(|g| g.split(';'))
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect();

    debug!(categories = categories.len(), "analytics cycle complete");

    Analytics {
        overview: overview(apps),
        market_share: market_share(apps),
        ratings: rating_analysis(apps, config.top_app_limit),
        sentiment: sentiment_analysis(reviews),
        correlations: correlation_analytics(apps),
        content_ratings: frequency_analysis(&content_ratings, config.frequency_top_n),
        top_genres: frequency_analysis(&genres, config.frequency_top_n),
        insights,
        categories,
        generated_at: Utc::now(),
    }
}
