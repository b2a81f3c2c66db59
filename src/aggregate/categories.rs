//! Per-category performance and market share.

use super::percentage;
use crate::stats::{basic_stats, BasicStats};
use crate::types::App;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate statistics for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub app_count: usize,
    /// Mean rating over apps with a valid rating only.
    pub avg_rating: f64,
    pub median_rating: f64,
    /// Full descriptive statistics over this category's ratings.
    pub rating_stats: BasicStats,
    pub total_installs: u64,
    pub avg_installs: f64,
    pub total_reviews: u64,
    pub avg_reviews: f64,
    pub paid_count: usize,
    pub popular_count: usize,
}

/// One category's share of the market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub app_count: usize,
    pub total_installs: u64,
    /// This category's apps as a percentage of all apps.
    pub app_market_share: f64,
    /// This category's installs as a percentage of all installs.
    pub install_market_share: f64,
}

/// Market share breakdown across all categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketShare {
    pub total_apps: usize,
    pub total_installs: u64,
    pub categories: Vec<CategoryShare>,
}

/// Group apps by category and compute per-category statistics.
///
/// The result is sorted descending by app count; ties keep the first-seen
/// group order (stable sort).
pub fn category_performance(apps: &[App]) -> Vec<CategoryStats> {
    let mut groups: Vec<(String, Vec<&App>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for app in apps {
        match index.get(app.category.as_str()) {
            Some(&i) => groups[i].1.push(app),
            None => {
                index.insert(app.category.as_str(), groups.len());
                groups.push((app.category.clone(), vec![app]));
            }
        }
    }

    let mut stats: Vec<CategoryStats> = groups
        .into_iter()
        .map(|(category, members)| {
            let app_count = members.len();
            let ratings: Vec<f64> = members.iter().filter_map(|a| a.rating).collect();
            let rating_stats = basic_stats(&ratings);
            let total_installs: u64 = members.iter().map(|a| a.installs).sum();
            let total_reviews: u64 = members.iter().map(|a| a.review_count).sum();

            CategoryStats {
                category,
                app_count,
                avg_rating: rating_stats.mean,
                median_rating: rating_stats.median,
                total_installs,
                avg_installs: total_installs as f64 / app_count as f64,
                total_reviews,
                avg_reviews: total_reviews as f64 / app_count as f64,
                paid_count: members.iter().filter(|a| a.is_paid).count(),
                popular_count: members.iter().filter(|a| a.is_popular).count(),
                rating_stats,
            }
        })
        .collect();

    stats.sort_by(|a, b| b.app_count.cmp(&a.app_count));
    stats
}

/// Compute each category's share of total apps and total installs.
pub fn market_share(apps: &[App]) -> MarketShare {
    let total_apps = apps.len();
    let total_installs: u64 = apps.iter().map(|a| a.installs).sum();

    let categories = category_performance(apps)
        .into_iter()
        .map(|stats| CategoryShare {
            app_market_share: percentage(stats.app_count, total_apps),
            install_market_share: if total_installs == 0 {
                0.0
            } else {
                stats.total_installs as f64 / total_installs as f64 * 100.0
            },
            category: stats.category,
            app_count: stats.app_count,
            total_installs: stats.total_installs,
        })
        .collect();

    MarketShare {
        total_apps,
        total_installs,
        categories,
    }
}
