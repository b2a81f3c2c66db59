//! CSV ingestion with header validation.
//!
//! Source exports are messy: ragged rows, quoted commas, stray blank
//! lines. Parsing is therefore lenient at the row level (short rows are
//! padded by zipping against the header) but strict about headers: a
//! missing required column fails the load immediately rather than
//! producing a silently empty dataset.

use crate::error::{AnalyticsError, Result};
use crate::types::RawRow;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Columns the app cleaner consumes. Anything else in the file rides along
/// in the raw rows and is ignored.
pub const REQUIRED_APP_COLUMNS: [&str; 8] = [
    "App", "Category", "Rating", "Reviews", "Size", "Installs", "Type", "Price",
];

/// Columns the review cleaner consumes.
pub const REQUIRED_REVIEW_COLUMNS: [&str; 4] =
    ["App", "Sentiment", "Sentiment_Polarity", "Sentiment_Subjectivity"];

/// Load raw app rows from a CSV export.
pub fn load_app_rows(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    load_rows(path.as_ref(), &REQUIRED_APP_COLUMNS)
}

/// Load raw review rows from a CSV export.
pub fn load_review_rows(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    load_rows(path.as_ref(), &REQUIRED_REVIEW_COLUMNS)
}

fn load_rows(path: &Path, required: &[&str]) -> Result<Vec<RawRow>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    validate_headers(path, &headers, required)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Ragged rows: zip stops at the shorter side, so missing trailing
        // fields simply stay absent from the map.
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    debug!(
        rows = rows.len(),
        file = %path.display(),
        "loaded raw rows"
    );
    Ok(rows)
}

fn validate_headers(path: &Path, headers: &[String], required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(AnalyticsError::MissingColumn {
                file: path.display().to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
