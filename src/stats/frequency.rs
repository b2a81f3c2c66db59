//! Frequency analysis over categorical values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One distinct value with its occurrence count and share of the cleaned
/// total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count occurrences per distinct value and return the top-N by count.
///
/// Empty entries are dropped. Percentages are over the full cleaned set,
/// not just the returned slice. Ties in count keep the first-encountered
/// insertion order (stable sort by count only).
pub fn frequency_analysis<S: AsRef<str>>(values: &[S], top_n: usize) -> Vec<FrequencyEntry> {
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for value in values {
        let value = value.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        total += 1;
        match index.get(value) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(value.to_string(), entries.len());
                entries.push((value.to_string(), 1));
            }
        }
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(top_n);
    entries
        .into_iter()
        .map(|(value, count)| FrequencyEntry {
            value,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect()
}
