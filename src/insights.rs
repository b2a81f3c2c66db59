//! Rule-based insight and recommendation synthesis.
//!
//! Deterministic, no randomness: a fixed rule set over pre-computed
//! aggregates. Business-rule thresholds live here as named constants so
//! the behavior is auditable and testable.

use crate::aggregate::CategoryStats;
use crate::types::{App, Review, POPULAR_INSTALL_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Rating at or above which an app counts toward the quality insight.
pub const EXCELLENT_RATING_THRESHOLD: f64 = 4.5;
/// The top category is flagged when its mean rating falls below this.
pub const QUALITY_ALERT_RATING: f64 = 4.0;
/// Categories below this mean rating are surfaced as opportunities.
pub const OPPORTUNITY_RATING: f64 = 3.5;
/// At most this many opportunity categories are listed.
pub const DEFAULT_MAX_OPPORTUNITIES: usize = 3;

/// Kind tag for an insight or recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    MarketLeader,
    Quality,
    Popularity,
    Sentiment,
    QualityAlert,
    Opportunity,
}

/// A single insight or recommendation statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    /// Formatted sentence embedding the metric to one or two decimals.
    pub description: String,
    pub metric: Option<f64>,
}

/// Ordered insights and recommendations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightReport {
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Insight>,
}

/// Derive insights and recommendations from pre-computed aggregates.
///
/// `categories` is expected sorted descending by app count, as
/// [`category_performance`](crate::aggregate::category_performance)
/// produces it; `max_opportunities` caps the opportunity list.
pub fn generate_insights(
    apps: &[App],
    categories: &[CategoryStats],
    reviews: &[Review],
    max_opportunities: usize,
) -> InsightReport {
    let mut insights = Vec::new();
    let mut recommendations = Vec::new();
    let total_apps = apps.len();

    if let Some(top) = categories.first() {
        let share = guarded_pct(top.app_count, total_apps);
        insights.push(Insight {
            kind: InsightKind::MarketLeader,
            title: "Market leader".to_string(),
            description: format!(
                "{} leads the market with {:.1}% of all apps",
                top.category, share
            ),
            metric: Some(share),
        });
    }

    if total_apps > 0 {
        let excellent = apps
            .iter()
            .filter(|a| a.rating.map_or(false, |r| r >= EXCELLENT_RATING_THRESHOLD))
            .count();
        let pct = guarded_pct(excellent, total_apps);
        insights.push(Insight {
            kind: InsightKind::Quality,
            title: "Highly rated apps".to_string(),
            description: format!("{:.1}% of apps are rated {EXCELLENT_RATING_THRESHOLD} or above", pct),
            metric: Some(pct),
        });

        let popular = apps.iter().filter(|a| a.is_popular).count();
        let pct = guarded_pct(popular, total_apps);
        insights.push(Insight {
            kind: InsightKind::Popularity,
            title: "Mass-market reach".to_string(),
            description: format!(
                "{:.1}% of apps have reached at least {} installs",
                pct, POPULAR_INSTALL_THRESHOLD
            ),
            metric: Some(pct),
        });
    }

    if !reviews.is_empty() {
        let positive = reviews.iter().filter(|r| r.is_positive).count();
        let pct = guarded_pct(positive, reviews.len());
        insights.push(Insight {
            kind: InsightKind::Sentiment,
            title: "Review sentiment".to_string(),
            description: format!("{:.1}% of user reviews are positive", pct),
            metric: Some(pct),
        });
    }

    if let Some(top) = categories.first() {
        if top.rating_stats.count > 0 && top.avg_rating < QUALITY_ALERT_RATING {
            recommendations.push(Insight {
                kind: InsightKind::QualityAlert,
                title: format!("Quality gap in {}", top.category),
                description: format!(
                    "The largest category {} averages only {:.2} stars; quality improvements could stand out",
                    top.category, top.avg_rating
                ),
                metric: Some(top.avg_rating),
            });
        }
    }

    for stats in categories
        .iter()
        .filter(|c| c.rating_stats.count > 0 && c.avg_rating < OPPORTUNITY_RATING)
        .take(max_opportunities)
    {
        recommendations.push(Insight {
            kind: InsightKind::Opportunity,
            title: format!("Opportunity in {}", stats.category),
            description: format!(
                "{} averages {:.2} stars; existing apps leave room for better alternatives",
                stats.category, stats.avg_rating
            ),
            metric: Some(stats.avg_rating),
        });
    }

    InsightReport {
        insights,
        recommendations,
    }
}

fn guarded_pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::category_performance;
    use crate::testutil::{app, review};
    use pretty_assertions::assert_eq;

    fn kinds(items: &[Insight]) -> Vec<InsightKind> {
        items.iter().map(|i| i.kind).collect()
    }

    // ==================== insight tests ====================

    #[test]
    fn test_insights_cover_market_quality_popularity_sentiment() {
        let apps = vec![
            app("A", "GAME", Some(4.8), 10, 2_000_000),
            app("B", "GAME", Some(4.6), 10, 100),
            app("C", "TOOLS", Some(3.0), 10, 100),
        ];
        let categories = category_performance(&apps);
        let reviews = vec![
            review("A", "positive", 0.8, 0.5),
            review("A", "negative", -0.8, 0.5),
        ];

        let report = generate_insights(&apps, &categories, &reviews, 3);
        assert_eq!(
            kinds(&report.insights),
            vec![
                InsightKind::MarketLeader,
                InsightKind::Quality,
                InsightKind::Popularity,
                InsightKind::Sentiment,
            ]
        );

        let leader = &report.insights[0];
        assert!(leader.description.contains("GAME"));
        assert!(leader.description.contains("66.7%"));
        assert_eq!(report.insights[3].metric, Some(50.0));
    }

    #[test]
    fn test_sentiment_insight_absent_without_reviews() {
        let apps = vec![app("A", "GAME", Some(4.0), 10, 100)];
        let categories = category_performance(&apps);
        let report = generate_insights(&apps, &categories, &[], 3);
        assert!(!kinds(&report.insights).contains(&InsightKind::Sentiment));
    }

    #[test]
    fn test_empty_dataset_yields_no_insights() {
        let report = generate_insights(&[], &[], &[], 3);
        assert!(report.insights.is_empty());
        assert!(report.recommendations.is_empty());
    }

    // ==================== recommendation tests ====================

    #[test]
    fn test_quality_alert_for_weak_top_category() {
        let apps = vec![
            app("A", "GAME", Some(3.5), 10, 100),
            app("B", "GAME", Some(3.7), 10, 100),
            app("C", "TOOLS", Some(4.9), 10, 100),
        ];
        let categories = category_performance(&apps);
        let report = generate_insights(&apps, &categories, &[], 3);

        assert_eq!(report.recommendations[0].kind, InsightKind::QualityAlert);
        assert!(report.recommendations[0].title.contains("GAME"));
    }

    #[test]
    fn test_no_quality_alert_for_strong_top_category() {
        let apps = vec![app("A", "GAME", Some(4.5), 10, 100)];
        let categories = category_performance(&apps);
        let report = generate_insights(&apps, &categories, &[], 3);
        assert!(!kinds(&report.recommendations).contains(&InsightKind::QualityAlert));
    }

    #[test]
    fn test_opportunities_capped_and_thresholded() {
        let apps = vec![
            app("A", "A", Some(3.0), 10, 100),
            app("B", "B", Some(3.1), 10, 100),
            app("C", "C", Some(3.2), 10, 100),
            app("D", "D", Some(3.3), 10, 100),
            app("E", "E", Some(4.9), 10, 100),
        ];
        let categories = category_performance(&apps);
        let report = generate_insights(&apps, &categories, &[], 3);

        let opportunities: Vec<&Insight> = report
            .recommendations
            .iter()
            .filter(|r| r.kind == InsightKind::Opportunity)
            .collect();
        assert_eq!(opportunities.len(), 3);
        assert!(opportunities.iter().all(|o| o.metric.unwrap() < OPPORTUNITY_RATING));
    }
}
