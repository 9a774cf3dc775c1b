// File: crates/chart-core/tests/sources.rs
// Purpose: Validate source-link deduplication.

use chart_core::record::anchor;
use chart_core::{unique_sources, NormalizedRecord};

fn with_url(url: &str) -> NormalizedRecord {
    NormalizedRecord {
        place: 1,
        time: anchor(),
        raw_time: "0:00".into(),
        year: 2000,
        name: "N".into(),
        nationality: "FRA".into(),
        doping: String::new(),
        url: url.into(),
    }
}

#[test]
fn first_occurrence_wins_and_blanks_are_skipped() {
    let records: Vec<_> = ["a", "", "a", "b"].into_iter().map(with_url).collect();
    assert_eq!(unique_sources(&records), vec!["a", "b"]);
}

#[test]
fn first_seen_order_is_kept() {
    let records: Vec<_> = ["c", "a", "c", "b", "a"].into_iter().map(with_url).collect();
    assert_eq!(unique_sources(&records), vec!["c", "a", "b"]);
}

#[test]
fn no_links_yields_empty_list() {
    let records: Vec<_> = ["", ""].into_iter().map(with_url).collect();
    assert!(unique_sources(&records).is_empty());
}
