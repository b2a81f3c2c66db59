//! App row cleaning and deduplication.

use super::field;
use crate::normalize::{categorize_installs, installs_to_number, price_to_number, size_to_bytes};
use crate::types::{App, RawRow, MAX_RATING, MIN_RATING, POPULAR_INSTALL_THRESHOLD};
use std::collections::HashMap;
use tracing::debug;

/// Parse a rating cell. Unparseable, non-finite, or out-of-range values are
/// rejected to `None` here rather than leaking into aggregation.
fn parse_rating(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.parse().ok()?;
    if value.is_finite() && (MIN_RATING..=MAX_RATING).contains(&value) {
        Some(value)
    } else {
        None
    }
}

/// Parse a review-count cell. The source sometimes carries float formatting
/// ("100.0"); anything unparseable or negative becomes 0.
fn parse_review_count(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u64)
        .unwrap_or(0)
}

/// Clean raw app rows into canonical [`App`] records.
///
/// Rows missing `App` or `Category` are dropped; every other field recovers
/// locally through the normalizer. Output order follows input order.
pub fn clean_apps(rows: &[RawRow]) -> Vec<App> {
    let apps: Vec<App> = rows
        .iter()
        .filter_map(|row| {
            let name = field(row, "App")?;
            let category = field(row, "Category")?;

            let rating = parse_rating(field(row, "Rating"));
            let installs = installs_to_number(field(row, "Installs").unwrap_or(""));
            let price = price_to_number(field(row, "Price").unwrap_or(""));

            Some(App {
                name: name.to_string(),
                category: category.to_string(),
                rating,
                review_count: parse_review_count(field(row, "Reviews")),
                size_bytes: size_to_bytes(field(row, "Size").unwrap_or("")),
                installs,
                installs_bucket: categorize_installs(installs).to_string(),
                app_type: field(row, "Type").unwrap_or("Free").to_string(),
                price,
                content_rating: field(row, "Content Rating").map(str::to_string),
                genres: field(row, "Genres").map(str::to_string),
                last_updated: field(row, "Last Updated").map(str::to_string),
                current_version: field(row, "Current Ver").map(str::to_string),
                android_version: field(row, "Android Ver").map(str::to_string),
                is_paid: price > 0.0,
                has_rating: rating.map_or(false, |r| r > 0.0),
                is_popular: installs >= POPULAR_INSTALL_THRESHOLD,
                sentiment: None,
            })
        })
        .collect();

    debug!(
        total = rows.len(),
        kept = apps.len(),
        dropped = rows.len() - apps.len(),
        "cleaned app rows"
    );
    apps
}

/// Collapse duplicate app records by name.
///
/// For each name the record with the highest `review_count` is kept; ties
/// keep the first-encountered record. Output is in first-seen name order.
pub fn deduplicate_apps(apps: Vec<App>) -> Vec<App> {
    let before = apps.len();
    let mut kept: Vec<App> = Vec::with_capacity(apps.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for app in apps {
        match index.get(&app.name) {
            Some(&i) => {
                if app.review_count > kept[i].review_count {
                    kept[i] = app;
                }
            }
            None => {
                index.insert(app.name.clone(), kept.len());
                kept.push(app);
            }
        }
    }

    debug!(before, after = kept.len(), "deduplicated apps");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::test_support::raw_row;
    use pretty_assertions::assert_eq;

    fn app_row(name: &str, category: &str, reviews: &str) -> crate::types::RawRow {
        raw_row(&[
            ("App", name),
            ("Category", category),
            ("Rating", "4.5"),
            ("Reviews", reviews),
            ("Size", "23M"),
            ("Installs", "10,000+"),
            ("Type", "Free"),
            ("Price", "0"),
        ])
    }

    // ==================== clean_apps tests ====================

    #[test]
    fn test_clean_apps_builds_canonical_record() {
        let rows = vec![app_row("Chess", "GAME", "120")];
        let apps = clean_apps(&rows);

        assert_eq!(apps.len(), 1);
        let app = &apps[0];
        assert_eq!(app.name, "Chess");
        assert_eq!(app.category, "GAME");
        assert_eq!(app.rating, Some(4.5));
        assert_eq!(app.review_count, 120);
        assert_eq!(app.size_bytes, Some(23.0 * 1024.0 * 1024.0));
        assert_eq!(app.installs, 10_000);
        assert_eq!(app.installs_bucket, "10K-100K");
        assert!(!app.is_paid);
        assert!(app.has_rating);
        assert!(!app.is_popular);
    }

    #[test]
    fn test_clean_apps_drops_rows_missing_name_or_category() {
        let rows = vec![
            raw_row(&[("App", ""), ("Category", "GAME")]),
            raw_row(&[("App", "Chess"), ("Category", "")]),
            raw_row(&[("Category", "GAME")]),
            app_row("Chess", "GAME", "10"),
        ];
        let apps = clean_apps(&rows);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "Chess");
    }

    #[test]
    fn test_clean_apps_malformed_fields_recover_locally() {
        let rows = vec![raw_row(&[
            ("App", "Weird"),
            ("Category", "TOOLS"),
            ("Rating", "NaN"),
            ("Reviews", "not a number"),
            ("Size", "Varies with device"),
            ("Installs", "Free"),
            ("Price", "Everyone"),
        ])];
        let apps = clean_apps(&rows);

        assert_eq!(apps.len(), 1);
        let app = &apps[0];
        assert_eq!(app.rating, None);
        assert_eq!(app.review_count, 0);
        assert_eq!(app.size_bytes, None);
        assert_eq!(app.installs, 0);
        assert_eq!(app.price, 0.0);
        assert!(!app.has_rating);
    }

    #[test]
    fn test_clean_apps_rejects_out_of_range_rating() {
        let mut row = app_row("Broken", "TOOLS", "1");
        row.insert("Rating".to_string(), "19.0".to_string());
        let apps = clean_apps(&[row]);
        assert_eq!(apps[0].rating, None);
    }

    #[test]
    fn test_clean_apps_paid_flags() {
        let mut row = app_row("Pro App", "TOOLS", "5");
        row.insert("Price".to_string(), "$4.99".to_string());
        row.insert("Type".to_string(), "Paid".to_string());
        let apps = clean_apps(&[row]);
        assert_eq!(apps[0].price, 4.99);
        assert!(apps[0].is_paid);
        assert_eq!(apps[0].app_type, "Paid");
    }

    #[test]
    fn test_clean_apps_preserves_input_order() {
        let rows = vec![
            app_row("B", "GAME", "1"),
            app_row("A", "GAME", "2"),
            app_row("C", "GAME", "3"),
        ];
        let names: Vec<String> = clean_apps(&rows).into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    // ==================== deduplicate_apps tests ====================

    #[test]
    fn test_dedup_keeps_highest_review_count() {
        let apps = clean_apps(&[
            app_row("Chess", "GAME", "50"),
            app_row("Chess", "GAME", "100"),
            app_row("Chess", "GAME", "80"),
        ]);
        let deduped = deduplicate_apps(apps);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].review_count, 100);
    }

    #[test]
    fn test_dedup_tie_keeps_first_encountered() {
        let mut first = clean_apps(&[app_row("Chess", "GAME", "50")]).remove(0);
        first.category = "FIRST".to_string();
        let mut second = clean_apps(&[app_row("Chess", "GAME", "50")]).remove(0);
        second.category = "SECOND".to_string();

        let deduped = deduplicate_apps(vec![first, second]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].category, "FIRST");
    }

    #[test]
    fn test_dedup_output_in_first_seen_order() {
        let apps = clean_apps(&[
            app_row("B", "GAME", "1"),
            app_row("A", "GAME", "1"),
            app_row("B", "GAME", "9"),
        ]);
        let names: Vec<String> = deduplicate_apps(apps).into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
