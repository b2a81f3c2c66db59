//! Predicate-based subsetting of cleaned app records.

use crate::types::App;
use serde::{Deserialize, Serialize};

/// Filter criteria for an app set.
///
/// Absent fields impose no constraint; present constraints are ANDed.
/// Unknown keys in a deserialized criteria object are ignored, so the
/// format is forward-compatible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Exact-match category.
    pub category: Option<String>,
    /// Inclusive lower bound on rating; unrated apps never match.
    pub min_rating: Option<f64>,
    /// Exact-match app type ("Free"/"Paid").
    pub app_type: Option<String>,
    /// Exact-match content rating.
    pub content_rating: Option<String>,
    /// Exact-match paid flag.
    pub is_paid: Option<bool>,
}

impl FilterCriteria {
    /// An unconstrained filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn app_type(mut self, app_type: impl Into<String>) -> Self {
        self.app_type = Some(app_type.into());
        self
    }

    pub fn content_rating(mut self, content_rating: impl Into<String>) -> Self {
        self.content_rating = Some(content_rating.into());
        self
    }

    pub fn is_paid(mut self, paid: bool) -> Self {
        self.is_paid = Some(paid);
        self
    }

    /// Whether an app satisfies every present constraint.
    pub fn matches(&self, app: &App) -> bool {
        if let Some(ref category) = self.category {
            if app.category != *category {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if !app.rating.map_or(false, |r| r >= min_rating) {
                return false;
            }
        }
        if let Some(ref app_type) = self.app_type {
            if app.app_type != *app_type {
                return false;
            }
        }
        if let Some(ref content_rating) = self.content_rating {
            if app.content_rating.as_deref() != Some(content_rating.as_str()) {
                return false;
            }
        }
        if let Some(paid) = self.is_paid {
            if app.is_paid != paid {
                return false;
            }
        }
        true
    }

    /// Whether any constraint is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Return the subset of apps matching the criteria.
///
/// The input is never mutated; applying the same filter twice changes
/// nothing further.
pub fn filter_apps(apps: &[App], criteria: &FilterCriteria) -> Vec<App> {
    apps.iter()
        .filter(|app| criteria.matches(app))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::app;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<App> {
        let mut paid = app("Pro", "TOOLS", Some(4.6), 10, 100);
        paid.price = 2.99;
        paid.is_paid = true;
        paid.app_type = "Paid".to_string();
        vec![
            app("Chess", "GAME", Some(4.2), 10, 100),
            app("Sudoku", "GAME", Some(3.1), 10, 100),
            app("Scanner", "TOOLS", None, 10, 100),
            paid,
        ]
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let apps = sample();
        assert_eq!(filter_apps(&apps, &FilterCriteria::new()).len(), apps.len());
        assert!(FilterCriteria::new().is_empty());
    }

    #[test]
    fn test_category_filter() {
        let apps = sample();
        let filtered = filter_apps(&apps, &FilterCriteria::new().category("GAME"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|a| a.category == "GAME"));
    }

    #[test]
    fn test_min_rating_inclusive_and_excludes_unrated() {
        let apps = sample();
        let filtered = filter_apps(&apps, &FilterCriteria::new().min_rating(4.2));
        let names: Vec<&str> = filtered.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Chess", "Pro"]);
    }

    #[test]
    fn test_constraints_are_anded() {
        let apps = sample();
        let criteria = FilterCriteria::new().category("GAME").min_rating(4.0);
        let filtered = filter_apps(&apps, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Chess");
    }

    #[test]
    fn test_paid_filter() {
        let apps = sample();
        let filtered = filter_apps(&apps, &FilterCriteria::new().is_paid(true));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Pro");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let apps = sample();
        let criteria = FilterCriteria::new().category("GAME").min_rating(3.0);
        let once = filter_apps(&apps, &criteria);
        let twice = filter_apps(&once, &criteria);
        assert_eq!(once.len(), twice.len());
        let names =
            |set: &[App]| set.iter().map(|a| a.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn test_unknown_keys_ignored_on_deserialize() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"category": "GAME", "sort_order": "descending", "page": 3}"#,
        )
        .unwrap();
        assert_eq!(criteria.category.as_deref(), Some("GAME"));
        assert_eq!(criteria.min_rating, None);
    }
}
