//! Review sentiment distribution.

use super::percentage;
use crate::stats::{basic_stats, BasicStats};
use crate::types::Review;
use serde::{Deserialize, Serialize};

/// Review counts per sentiment label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Per-label percentages over the full review count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelPercentages {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Sentiment distribution over a review set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    pub total_reviews: usize,
    pub counts: LabelCounts,
    pub percentages: LabelPercentages,
    pub polarity: BasicStats,
    pub subjectivity: BasicStats,
}

/// Compute the sentiment distribution of a review set.
pub fn sentiment_analysis(reviews: &[Review]) -> SentimentReport {
    let total = reviews.len();
    let counts = LabelCounts {
        positive: reviews.iter().filter(|r| r.is_positive).count(),
        negative: reviews.iter().filter(|r| r.is_negative).count(),
        neutral: reviews.iter().filter(|r| r.is_neutral).count(),
    };
    let percentages = LabelPercentages {
        positive: percentage(counts.positive, total),
        negative: percentage(counts.negative, total),
        neutral: percentage(counts.neutral, total),
    };

    let polarities: Vec<f64> = reviews.iter().map(|r| r.polarity).collect();
    let subjectivities: Vec<f64> = reviews.iter().map(|r| r.subjectivity).collect();

    SentimentReport {
        total_reviews: total,
        counts,
        percentages,
        polarity: basic_stats(&polarities),
        subjectivity: basic_stats(&subjectivities),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::review;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sentiment_analysis_counts_and_percentages() {
        let reviews = vec![
            review("X", "positive", 0.8, 0.5),
            review("X", "positive", 0.6, 0.3),
            review("Y", "negative", -0.4, 0.7),
            review("Y", "neutral", 0.0, 0.1),
        ];
        let report = sentiment_analysis(&reviews);

        assert_eq!(report.total_reviews, 4);
        assert_eq!(report.counts.positive, 2);
        assert_eq!(report.percentages.positive, 50.0);
        assert_eq!(report.percentages.negative, 25.0);
        assert_eq!(report.percentages.neutral, 25.0);
        assert!((report.polarity.mean - 0.25).abs() < 1e-9);
        assert!((report.subjectivity.mean - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_sentiment_analysis_empty_set() {
        let report = sentiment_analysis(&[]);
        assert_eq!(report.total_reviews, 0);
        assert_eq!(report.percentages, LabelPercentages::default());
        assert_eq!(report.polarity.count, 0);
    }
}
