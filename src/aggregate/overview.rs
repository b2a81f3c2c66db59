//! Whole-dataset overview numbers.

use super::percentage;
use crate::stats::basic_stats;
use crate::types::App;
use serde::{Deserialize, Serialize};

/// Headline numbers over the full (possibly filtered) app set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overview {
    pub total_apps: usize,
    pub rated_apps: usize,
    pub paid_apps: usize,
    pub popular_apps: usize,
    pub total_installs: u64,
    pub total_reviews: u64,
    /// Mean rating over rated apps; 0 when none are rated.
    pub avg_rating: f64,
    pub rated_percentage: f64,
    pub paid_percentage: f64,
    pub popular_percentage: f64,
}

/// Compute the overview for an app set.
pub fn overview(apps: &[App]) -> Overview {
    let total = apps.len();
    let rated = apps.iter().filter(|a| a.has_rating).count();
    let paid = apps.iter().filter(|a| a.is_paid).count();
    let popular = apps.iter().filter(|a| a.is_popular).count();
    let ratings: Vec<f64> = apps.iter().filter_map(|a| a.rating).collect();

    Overview {
        total_apps: total,
        rated_apps: rated,
        paid_apps: paid,
        popular_apps: popular,
        total_installs: apps.iter().map(|a| a.installs).sum(),
        total_reviews: apps.iter().map(|a| a.review_count).sum(),
        avg_rating: basic_stats(&ratings).mean,
        rated_percentage: percentage(rated, total),
        paid_percentage: percentage(paid, total),
        popular_percentage: percentage(popular, total),
    }
}
