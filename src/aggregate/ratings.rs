//! Rating distribution, extremes, and outliers.

use super::percentage;
use crate::stats::{basic_stats, outliers, BasicStats, OutlierSummary};
use crate::types::App;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Rating at or above which an app counts as highly rated.
pub const HIGH_RATING_THRESHOLD: f64 = 4.0;
/// Rating at or above which an app makes the top-rated list.
pub const TOP_RATING_THRESHOLD: f64 = 4.5;
/// Rating below which an app makes the low-rated list.
pub const LOW_RATING_THRESHOLD: f64 = 3.0;

/// The fixed histogram bands: half-open `[min, max)`, except the last band
/// which is closed so a perfect 5.0 lands in it. Each rating matches
/// exactly one band.
pub const RATING_BANDS: [(f64, f64, &str); 5] = [
    (1.0, 2.0, "1.0-2.0"),
    (2.0, 3.0, "2.0-3.0"),
    (3.0, 4.0, "3.0-4.0"),
    (4.0, 4.5, "4.0-4.5"),
    (4.5, 5.0, "4.5-5.0"),
];

/// One histogram band with its population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBand {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// A single app's entry in the top/low rated lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRating {
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub review_count: u64,
}

/// Rating analysis over the rated subset of an app set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingAnalysis {
    pub distribution: Vec<RatingBand>,
    pub stats: BasicStats,
    pub outliers: OutlierSummary,
    pub top_rated: Vec<AppRating>,
    pub low_rated: Vec<AppRating>,
    /// Apps rated at least [`HIGH_RATING_THRESHOLD`] as a percentage of all
    /// rated apps.
    pub high_rated_percentage: f64,
}

fn band_index(rating: f64) -> Option<usize> {
    RATING_BANDS
        .iter()
        .enumerate()
        .find(|(i, (min, max, _))| {
            let closed = *i == RATING_BANDS.len() - 1;
            rating >= *min && (rating < *max || (closed && rating <= *max))
        })
        .map(|(i, _)| i)
}

fn entry(app: &App, rating: f64) -> AppRating {
    AppRating {
        name: app.name.clone(),
        category: app.category.clone(),
        rating,
        review_count: app.review_count,
    }
}

/// Analyze the rating distribution of an app set.
///
/// Only apps with a positive rating participate. The top and low lists are
/// capped at `list_limit` entries each.
pub fn rating_analysis(apps: &[App], list_limit: usize) -> RatingAnalysis {
    let rated: Vec<(&App, f64)> = apps
        .iter()
        .filter_map(|a| a.rating.filter(|r| *r > 0.0).map(|r| (a, r)))
        .collect();
    let ratings: Vec<f64> = rated.iter().map(|(_, r)| *r).collect();

    let mut counts = [0usize; RATING_BANDS.len()];
    for (_, rating) in &rated {
        if let Some(i) = band_index(*rating) {
            counts[i] += 1;
        }
    }
    let distribution = RATING_BANDS
        .iter()
        .zip(counts.iter())
        .map(|(&(_, _, label), &count)| RatingBand {
            label: label.to_string(),
            count,
            percentage: percentage(count, rated.len()),
        })
        .collect();

    let mut top_rated: Vec<AppRating> = rated
        .iter()
        .filter(|(_, r)| *r >= TOP_RATING_THRESHOLD)
        .map(|(a, r)| entry(a, *r))
        .collect();
    top_rated.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    top_rated.truncate(list_limit);

    let mut low_rated: Vec<AppRating> = rated
        .iter()
        .filter(|(_, r)| *r < LOW_RATING_THRESHOLD)
        .map(|(a, r)| entry(a, *r))
        .collect();
    low_rated.sort_by(|a, b| a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal));
    low_rated.truncate(list_limit);

    let high_count = ratings.iter().filter(|r| **r >= HIGH_RATING_THRESHOLD).count();

    RatingAnalysis {
        distribution,
        stats: basic_stats(&ratings),
        outliers: outliers(&ratings),
        top_rated,
        low_rated,
        high_rated_percentage: percentage(high_count, ratings.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::app;
    use pretty_assertions::assert_eq;

    fn rated(name: &str, rating: f64) -> crate::types::App {
        app(name, "GAME", Some(rating), 10, 100)
    }

    // ==================== band assignment tests ====================

    #[test]
    fn test_band_edges_land_in_exactly_one_band() {
        assert_eq!(band_index(1.0), Some(0));
        assert_eq!(band_index(2.0), Some(1));
        assert_eq!(band_index(3.9), Some(2));
        assert_eq!(band_index(4.0), Some(3));
        assert_eq!(band_index(4.5), Some(4));
        assert_eq!(band_index(5.0), Some(4));
    }

    // ==================== rating_analysis tests ====================

    #[test]
    fn test_rating_analysis_distribution() {
        let apps = vec![rated("A", 1.5), rated("B", 4.2), rated("C", 4.8), rated("D", 4.9)];
        let analysis = rating_analysis(&apps, 10);

        let counts: Vec<usize> = analysis.distribution.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 0, 1, 2]);
        assert_eq!(analysis.distribution[4].percentage, 50.0);
        assert_eq!(analysis.stats.count, 4);
    }

    #[test]
    fn test_rating_analysis_ignores_unrated_apps() {
        let apps = vec![rated("A", 4.0), app("B", "GAME", None, 0, 0)];
        let analysis = rating_analysis(&apps, 10);
        assert_eq!(analysis.stats.count, 1);
        assert_eq!(analysis.high_rated_percentage, 100.0);
    }

    #[test]
    fn test_rating_analysis_top_rated_sorted_descending() {
        let apps = vec![rated("A", 4.6), rated("B", 4.9), rated("C", 4.7), rated("D", 3.0)];
        let analysis = rating_analysis(&apps, 2);

        let names: Vec<&str> = analysis.top_rated.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_rating_analysis_low_rated_sorted_ascending() {
        let apps = vec![rated("A", 2.5), rated("B", 1.2), rated("C", 2.9), rated("D", 3.0)];
        let analysis = rating_analysis(&apps, 10);

        let names: Vec<&str> = analysis.low_rated.iter().map(|e| e.name.as_str()).collect();
        // 3.0 is not low rated; bound is exclusive.
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rating_analysis_high_rated_percentage() {
        let apps = vec![rated("A", 4.0), rated("B", 4.5), rated("C", 3.9), rated("D", 2.0)];
        let analysis = rating_analysis(&apps, 10);
        assert_eq!(analysis.high_rated_percentage, 50.0);
    }

    #[test]
    fn test_rating_analysis_empty_set_degrades_to_zero() {
        let analysis = rating_analysis(&[], 10);
        assert_eq!(analysis.stats.count, 0);
        assert_eq!(analysis.high_rated_percentage, 0.0);
        assert!(analysis.top_rated.is_empty());
        assert!(analysis.outliers.outliers.is_empty());
        assert_eq!(analysis.distribution.len(), RATING_BANDS.len());
    }
}
