//! Field normalization for raw app-store strings.
//!
//! Every function here is total: malformed input yields a safe default (0,
//! `None`, or the explicit "unknown" bucket) and never aborts a batch.

use once_cell::sync::Lazy;
use regex::Regex;

/// Size string meaning "no fixed download size".
const VARIES_SENTINEL: &str = "varies with device";

/// Currency symbols stripped from the front of price strings.
const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Matches a size token: a number with an optional k/m/g suffix.
static SIZE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*([kKmMgG])?$").expect("valid size regex"));

/// An install-count bucket: a half-open interval `[min, max)`, unbounded
/// above when `max` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallBucket {
    pub min: u64,
    pub max: Option<u64>,
    pub label: &'static str,
}

/// The fixed, ordered install-count bucket table. Exhaustive and
/// non-overlapping; the last bucket is unbounded.
pub const INSTALL_BUCKETS: [InstallBucket; 7] = [
    InstallBucket { min: 0, max: Some(1_000), label: "0-1K" },
    InstallBucket { min: 1_000, max: Some(10_000), label: "1K-10K" },
    InstallBucket { min: 10_000, max: Some(100_000), label: "10K-100K" },
    InstallBucket { min: 100_000, max: Some(1_000_000), label: "100K-1M" },
    InstallBucket { min: 1_000_000, max: Some(10_000_000), label: "1M-10M" },
    InstallBucket { min: 10_000_000, max: Some(100_000_000), label: "10M-100M" },
    InstallBucket { min: 100_000_000, max: None, label: "100M+" },
];

/// Fallback label for values matching no bucket. Unreachable given the
/// table ends at infinity, but kept explicit rather than panicking.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Parse a size display string ("23M", "850k", "1.2G") into bytes.
///
/// Returns `None` for empty input, the "Varies with device" sentinel, or
/// anything unparseable. A bare number is taken as bytes.
pub fn size_to_bytes(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(VARIES_SENTINEL) {
        return None;
    }

    let caps = SIZE_TOKEN.captures(trimmed)?;
    let value: f64 = caps[1].parse().ok()?;
    let multiplier = match caps
        .get(2)
        .map(|m| m.as_str().to_ascii_lowercase())
        .as_deref()
    {
        Some("k") => 1024.0,
        Some("m") => 1024.0 * 1024.0,
        Some("g") => 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    };

    Some(value * multiplier)
}

/// Parse an install display string ("10,000+") into a count.
///
/// Strips thousands separators and the trailing `+`; returns 0 for empty or
/// invalid input.
pub fn installs_to_number(input: &str) -> u64 {
    let cleaned = input.trim().trim_end_matches('+').replace(',', "");
    cleaned.parse().unwrap_or(0)
}

/// Parse a price display string ("$4.99", "Free", "0") into a float.
///
/// Returns 0 for free/empty input and on any parse failure; the result is
/// always finite and non-negative.
pub fn price_to_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "0" || trimmed.eq_ignore_ascii_case("free") {
        return 0.0;
    }

    let stripped = trimmed
        .strip_prefix(CURRENCY_SYMBOLS)
        .unwrap_or(trimmed)
        .trim();
    match stripped.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Map an install count to exactly one bucket label from
/// [`INSTALL_BUCKETS`].
pub fn categorize_installs(installs: u64) -> &'static str {
    INSTALL_BUCKETS
        .iter()
        .find(|bucket| installs >= bucket.min && bucket.max.map_or(true, |max| installs < max))
        .map(|bucket| bucket.label)
        .unwrap_or(UNKNOWN_BUCKET)
}
