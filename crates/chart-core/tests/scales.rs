// File: crates/chart-core/tests/scales.rs
// Purpose: Validate scale domains, direction, degenerate domains and tick sets.

use chart_core::record::parse_race_time;
use chart_core::scale::linear_ticks;
use chart_core::{ChartError, ChartScales, Layout, LinearScale, NormalizedRecord, Scale, TimeScale};

fn record(year: i32, time: &str) -> NormalizedRecord {
    NormalizedRecord {
        place: 1,
        time: parse_race_time(0, time).expect("time"),
        raw_time: time.to_string(),
        year,
        name: "Rider".into(),
        nationality: "NED".into(),
        doping: String::new(),
        url: String::new(),
    }
}

#[test]
fn year_domain_is_padded_by_one() {
    let records = vec![record(2004, "37:00"), record(2000, "38:00"), record(2010, "36:00")];
    let scales = ChartScales::from_records(&records, &Layout::default()).expect("scales");
    assert_eq!(scales.x.domain(), (1999.0, 2011.0));
    assert_eq!(scales.x.range(), (0.0, 912.0));
    assert_eq!(scales.y.range(), (0.0, 642.0));
}

#[test]
fn time_domain_is_extent_and_faster_is_higher() {
    let records = vec![record(2000, "37:30"), record(2001, "36:50"), record(2002, "39:50")];
    let scales = ChartScales::from_records(&records, &Layout::default()).expect("scales");
    let (t0, t1) = scales.y.domain();
    assert_eq!(t0, records[1].time);
    assert_eq!(t1, records[2].time);
    assert_eq!(scales.y.map(t0), 0.0);
    assert_eq!(scales.y.map(t1), 642.0);
    assert!(scales.y.map(records[0].time) > 0.0 && scales.y.map(records[0].time) < 642.0);
}

#[test]
fn empty_dataset_cannot_be_scaled() {
    let err = ChartScales::from_records(&[], &Layout::default()).expect_err("empty");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn collapsed_domain_maps_to_midpoint() {
    let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    assert_eq!(s.map(5.0), 50.0);
    let t = parse_race_time(0, "37:00").expect("time");
    let ts = TimeScale::new((t, t), (0.0, 642.0));
    assert_eq!(ts.map(t), 321.0);
}

#[test]
fn linear_mapping_is_affine() {
    let s = LinearScale::new((1999.0, 2011.0), (0.0, 912.0));
    assert_eq!(s.map(1999.0), 0.0);
    assert_eq!(s.map(2011.0), 912.0);
    assert!((s.map(2005.0) - 456.0).abs() < 1e-9);
}

#[test]
fn year_ticks_use_round_steps() {
    assert_eq!(
        linear_ticks(1993.0, 2016.0, 10),
        (1994..=2016).step_by(2).map(f64::from).collect::<Vec<_>>()
    );
    assert_eq!(linear_ticks(1999.0, 2011.0, 10), (1999..=2011).map(f64::from).collect::<Vec<_>>());
    assert_eq!(linear_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(linear_ticks(3.0, 3.0, 10), vec![3.0]);
}

#[test]
fn time_ticks_pick_fifteen_seconds_over_three_minutes() {
    let lo = parse_race_time(0, "36:50").expect("lo");
    let hi = parse_race_time(0, "39:50").expect("hi");
    let ticks = TimeScale::new((lo, hi), (0.0, 642.0)).ticks(10);
    let labels: Vec<String> = ticks.iter().map(|t| t.format("%M:%S").to_string()).collect();
    assert_eq!(labels.first().map(String::as_str), Some("37:00"));
    assert_eq!(labels.get(1).map(String::as_str), Some("37:15"));
    assert_eq!(labels.last().map(String::as_str), Some("39:45"));
    assert_eq!(labels.len(), 12);
}

#[test]
fn time_ticks_pick_minutes_over_a_quarter_hour() {
    let lo = parse_race_time(0, "30:00").expect("lo");
    let hi = parse_race_time(0, "45:00").expect("hi");
    let ticks = TimeScale::new((lo, hi), (0.0, 642.0)).ticks(10);
    // 90s target sits closer to 1m than to 5m
    assert_eq!(ticks.len(), 16);
    assert_eq!(ticks[0], lo);
    assert_eq!(ticks[15], hi);
}

#[test]
fn time_ticks_round_up_when_the_larger_step_is_closer() {
    let lo = parse_race_time(0, "36:00").expect("lo");
    let hi = parse_race_time(0, "40:00").expect("hi");
    let ticks = TimeScale::new((lo, hi), (0.0, 642.0)).ticks(10);
    // 24s target: 30s is 1.25x away, 15s is 1.6x
    assert_eq!(ticks.len(), 9);
    assert_eq!(ticks[1], parse_race_time(0, "36:30").expect("tick"));
    assert_eq!(ticks[8], hi);
}

#[test]
fn extreme_years_are_padded_without_overflow() {
    let records = vec![record(i32::MAX, "37:00"), record(i32::MIN, "38:00")];
    let scales = ChartScales::from_records(&records, &Layout::default()).expect("scales");
    assert_eq!(scales.x.domain(), (f64::from(i32::MIN) - 1.0, f64::from(i32::MAX) + 1.0));
    assert!(scales.x.map(f64::from(i32::MAX)) < 912.0);
    assert!(scales.x.map(f64::from(i32::MIN)) > 0.0);

    let single = vec![record(i32::MAX, "37:00")];
    let scales = ChartScales::from_records(&single, &Layout::default()).expect("scales");
    assert_eq!(scales.x.map(f64::from(i32::MAX)), 456.0);
}
