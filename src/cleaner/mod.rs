//! Record cleaning: raw string-keyed rows into canonical records.
//!
//! Rows missing critical fields are silently dropped (acceptable data loss,
//! not a fatal error); malformed cells fall back to the normalizer's safe
//! defaults. Output order follows input order everywhere.

mod apps;
mod reviews;

pub use apps::{clean_apps, deduplicate_apps};
pub use reviews::{clean_reviews, merge_sentiment};

use crate::types::RawRow;

/// Fetch a trimmed, non-empty field from a raw row. Absent and
/// empty-after-trim both count as missing.
pub(crate) fn field<'a>(row: &'a RawRow, key: &str) -> Option<&'a str> {
    row.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::RawRow;

    /// Build a raw row from key/value pairs.
    pub fn raw_row(fields: &[(&str, &str)]) -> RawRow {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
