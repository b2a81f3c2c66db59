//! Configuration for the analytics pipeline.
//!
//! Uses the builder pattern for flexible and ergonomic setup.

use serde::{Deserialize, Serialize};

/// Configuration for [`AnalyticsPipeline`](crate::pipeline::AnalyticsPipeline).
///
/// Use [`PipelineConfig::builder()`] for a fluent API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of entries in the top/low rated app lists.
    /// Default: 10
    pub top_app_limit: usize,

    /// Number of entries in frequency breakdowns (content ratings, genres).
    /// Default: 10
    pub frequency_top_n: usize,

    /// Maximum number of opportunity categories to recommend.
    /// Default: 3
    pub max_opportunities: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_app_limit: 10,
            frequency_top_n: 10,
            max_opportunities: crate::insights::DEFAULT_MAX_OPPORTUNITIES,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("top_app_limit", self.top_app_limit),
            ("frequency_top_n", self.frequency_top_n),
            ("max_opportunities", self.max_opportunities),
        ] {
            if value == 0 {
                return Err(ConfigValidationError::InvalidLimit {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid limit for '{field}': {value} (must be at least 1)")]
    InvalidLimit { field: String, value: usize },
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    top_app_limit: Option<usize>,
    frequency_top_n: Option<usize>,
    max_opportunities: Option<usize>,
}

impl PipelineConfigBuilder {
    /// Set the length of the top/low rated app lists.
    pub fn top_app_limit(mut self, limit: usize) -> Self {
        self.top_app_limit = Some(limit);
        self
    }

    /// Set the length of frequency breakdowns.
    pub fn frequency_top_n(mut self, n: usize) -> Self {
        self.frequency_top_n = Some(n);
        self
    }

    /// Set the maximum number of opportunity recommendations.
    pub fn max_opportunities(mut self, n: usize) -> Self {
        self.max_opportunities = Some(n);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if validation fails.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let defaults = PipelineConfig::default();
        let config = PipelineConfig {
            top_app_limit: self.top_app_limit.unwrap_or(defaults.top_app_limit),
            frequency_top_n: self.frequency_top_n.unwrap_or(defaults.frequency_top_n),
            max_opportunities: self.max_opportunities.unwrap_or(defaults.max_opportunities),
        };
        config.validate()?;
        Ok(config)
    }
}
