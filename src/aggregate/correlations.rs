//! Named Pearson correlations across app attributes.

use crate::stats::correlation;
use crate::types::App;
use serde::{Deserialize, Serialize};

/// The six named correlations the dashboard presents.
///
/// Computed over apps that carry a rating and a finite price; the size
/// correlation additionally restricts to apps with a known size. Degenerate
/// inputs yield 0 rather than NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub rating_reviews: f64,
    pub rating_installs: f64,
    pub reviews_installs: f64,
    pub size_installs: f64,
    pub price_rating: f64,
    pub price_installs: f64,
    /// Number of apps that qualified for the correlation sample.
    pub sample_size: usize,
}

/// Compute the named correlation matrix over an app set.
pub fn correlation_analytics(apps: &[App]) -> CorrelationMatrix {
    let sample: Vec<&App> = apps
        .iter()
        .filter(|a| a.rating.is_some() && a.price.is_finite())
        .collect();

    let ratings: Vec<f64> = sample.iter().map(|a| a.rating.unwrap_or(0.0)).collect();
    let reviews: Vec<f64> = sample.iter().map(|a| a.review_count as f64).collect();
    let installs: Vec<f64> = sample.iter().map(|a| a.installs as f64).collect();
    let prices: Vec<f64> = sample.iter().map(|a| a.price).collect();

    let (sizes, sized_installs): (Vec<f64>, Vec<f64>) = sample
        .iter()
        .filter_map(|a| a.size_bytes.map(|s| (s, a.installs as f64)))
        .unzip();

    CorrelationMatrix {
        rating_reviews: correlation(&ratings, &reviews),
        rating_installs: correlation(&ratings, &installs),
        reviews_installs: correlation(&reviews, &installs),
        size_installs: correlation(&sizes, &sized_installs),
        price_rating: correlation(&prices, &ratings),
        price_installs: correlation(&prices, &installs),
        sample_size: sample.len(),
    }
}
