// File: crates/chart-core/src/scale.rs
// Summary: Year (X, linear) and race-time (Y, temporal) scales with tick generation.

use chrono::{Duration, NaiveDateTime};

use crate::error::{ChartError, Result};
use crate::record::{anchor, NormalizedRecord};
use crate::types::Layout;

/// Number of ticks both axes aim for.
pub const TICK_COUNT: usize = 10;

/// A deterministic mapping from a data domain to a pixel range.
pub trait Scale {
    type Domain: Copy;
    fn map(&self, v: Self::Domain) -> f64;
    fn ticks(&self, count: usize) -> Vec<Self::Domain>;
    /// Pixel extent, in the order given at construction.
    fn range(&self) -> (f64, f64);
}

/// Continuous linear scale mapping `[d0, d1]` onto `[r0, r1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }

    /// Position of `v` within the domain as a 0..1 fraction.
    /// A collapsed domain puts every value at the midpoint.
    #[inline]
    fn normalize(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 { 0.5 } else { (v - self.d0) / span }
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    #[inline]
    fn map(&self, v: f64) -> f64 {
        self.r0 + self.normalize(v) * (self.r1 - self.r0)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.d0, self.d1, count)
    }

    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

/// Temporal scale over times on the anchor date, backed by a linear scale in
/// milliseconds since the anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub t0: NaiveDateTime,
    pub t1: NaiveDateTime,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        let linear = LinearScale::new((millis(domain.0), millis(domain.1)), range);
        Self { t0: domain.0, t1: domain.1, linear }
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) { (self.t0, self.t1) }
}

impl Scale for TimeScale {
    type Domain = NaiveDateTime;

    #[inline]
    fn map(&self, v: NaiveDateTime) -> f64 {
        self.linear.map(millis(v))
    }

    fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        let (lo, hi) = if self.t0 <= self.t1 { (self.t0, self.t1) } else { (self.t1, self.t0) };
        let base = anchor();
        let lo_s = (lo - base).num_milliseconds() as f64 / 1000.0;
        let hi_s = (hi - base).num_milliseconds() as f64 / 1000.0;
        let step = time_tick_step(hi_s - lo_s, count);

        let first = (lo_s / step as f64).ceil() as i64;
        let last = (hi_s / step as f64).floor() as i64;
        (first..=last)
            .map(|i| base + Duration::seconds(i * step))
            .collect()
    }

    fn range(&self) -> (f64, f64) { self.linear.range() }
}

#[inline]
fn millis(t: NaiveDateTime) -> f64 {
    (t - anchor()).num_milliseconds() as f64
}

/// Nice step for `count` ticks over `[start, stop]`: 1, 2 or 5 times a power of ten.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Evenly spaced round values inside `[start, stop]`, ascending.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let inc = tick_increment(lo, hi, count);
    if !inc.is_finite() || inc <= 0.0 {
        return Vec::new();
    }
    let first = (lo / inc).ceil() as i64;
    let last = (hi / inc).floor() as i64;
    if inc >= 1.0 {
        (first..=last).map(|i| i as f64 * inc).collect()
    } else {
        // divide by the inverse so 0.1 steps stay exact decimals
        let inv = (1.0 / inc).round();
        (first..=last).map(|i| i as f64 / inv).collect()
    }
}

/// Candidate tick intervals for the time axis, in seconds.
const TIME_INTERVALS: [i64; 12] = [1, 5, 15, 30, 60, 300, 900, 1800, 3600, 10_800, 21_600, 43_200];

/// Interval (seconds) whose size is closest, in ratio, to `span / count`.
fn time_tick_step(span_secs: f64, count: usize) -> i64 {
    let target = span_secs / count.max(1) as f64;
    let i = TIME_INTERVALS.partition_point(|&s| (s as f64) <= target);
    if i == 0 {
        return TIME_INTERVALS[0];
    }
    if i == TIME_INTERVALS.len() {
        return TIME_INTERVALS[i - 1];
    }
    let (prev, next) = (TIME_INTERVALS[i - 1], TIME_INTERVALS[i]);
    if target / (prev as f64) < (next as f64) / target { prev } else { next }
}

/// The two scales of the chart, built once from the full dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: TimeScale,
}

impl ChartScales {
    /// X: `[min(year) - 1, max(year) + 1]` onto `[0, plot_width]`.
    /// Y: `[min(time), max(time)]` onto `[0, plot_height]`, fastest at the top.
    pub fn from_records(records: &[NormalizedRecord], layout: &Layout) -> Result<Self> {
        let (first, rest) = records.split_first().ok_or(ChartError::EmptyDataset)?;

        let (mut y_min, mut y_max) = (first.year, first.year);
        let (mut t_min, mut t_max) = (first.time, first.time);
        for r in rest {
            y_min = y_min.min(r.year);
            y_max = y_max.max(r.year);
            t_min = t_min.min(r.time);
            t_max = t_max.max(r.time);
        }

        let x = LinearScale::new(
            (f64::from(y_min) - 1.0, f64::from(y_max) + 1.0),
            (0.0, layout.plot_width()),
        );
        let y = TimeScale::new((t_min, t_max), (0.0, layout.plot_height()));
        let x_domain = x.domain();
        tracing::debug!(?x_domain, %t_min, %t_max, "scales built");
        Ok(Self { x, y })
    }
}
