//! Review row cleaning and per-app sentiment merging.

use super::field;
use crate::types::{App, RawRow, Review, SentimentSummary};
use std::collections::HashMap;
use tracing::debug;

/// Label the source uses for a missing sentiment.
const NULL_SENTIMENT: &str = "nan";

/// Parse a polarity/subjectivity cell, defaulting to 0 on failure.
fn parse_score(raw: Option<&str>) -> f64 {
    raw.and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Clean raw review rows into canonical [`Review`] records.
///
/// Rows missing the app name or sentiment label, or carrying the null
/// sentinel label, are dropped. Output order follows input order.
pub fn clean_reviews(rows: &[RawRow]) -> Vec<Review> {
    let reviews: Vec<Review> = rows
        .iter()
        .filter_map(|row| {
            let app_name = field(row, "App")?;
            let label = field(row, "Sentiment")?.to_lowercase();
            if label == NULL_SENTIMENT {
                return None;
            }

            Some(Review {
                app_name: app_name.to_string(),
                is_positive: label == "positive",
                is_negative: label == "negative",
                is_neutral: label == "neutral",
                sentiment_label: label,
                polarity: parse_score(field(row, "Sentiment_Polarity")),
                subjectivity: parse_score(field(row, "Sentiment_Subjectivity")),
            })
        })
        .collect();

    debug!(
        total = rows.len(),
        kept = reviews.len(),
        dropped = rows.len() - reviews.len(),
        "cleaned review rows"
    );
    reviews
}

/// Attach a sentiment summary to every app.
///
/// Reviews are grouped by app name; apps with no matching reviews get the
/// zero-valued summary so downstream consumers never branch on absence.
pub fn merge_sentiment(apps: Vec<App>, reviews: &[Review]) -> Vec<App> {
    let mut grouped: HashMap<&str, Vec<&Review>> = HashMap::new();
    for review in reviews {
        grouped.entry(review.app_name.as_str()).or_default().push(review);
    }

    apps.into_iter()
        .map(|mut app| {
            app.sentiment = Some(match grouped.get(app.name.as_str()) {
                Some(matched) => summarize(matched),
                None => SentimentSummary::default(),
            });
            app
        })
        .collect()
}

fn summarize(reviews: &[&Review]) -> SentimentSummary {
    let total = reviews.len();
    let positive = reviews.iter().filter(|r| r.is_positive).count();
    let negative = reviews.iter().filter(|r| r.is_negative).count();
    let neutral = reviews.iter().filter(|r| r.is_neutral).count();
    let avg_polarity = reviews.iter().map(|r| r.polarity).sum::<f64>() / total as f64;
    let avg_subjectivity = reviews.iter().map(|r| r.subjectivity).sum::<f64>() / total as f64;

    let pct = |count: usize| count as f64 / total as f64 * 100.0;
    SentimentSummary {
        total_reviews: total,
        positive,
        negative,
        neutral,
        positive_percentage: pct(positive),
        negative_percentage: pct(negative),
        neutral_percentage: pct(neutral),
        avg_polarity,
        avg_subjectivity,
        sentiment_score: avg_polarity,
    }
}
