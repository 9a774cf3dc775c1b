// File: crates/chart-core/src/sources.rs
// Summary: Unique reference links cited by the dataset.

use std::collections::HashSet;

use crate::record::NormalizedRecord;

/// Non-empty URLs in dataset order; the first occurrence of each wins.
pub fn unique_sources(records: &[NormalizedRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.url.as_str())
        .filter(|url| !url.is_empty() && seen.insert(*url))
        .collect()
}
