// File: crates/chart-core/src/axis.rs
// Summary: Axis model with placed ticks, formatted labels and domain line.

use chrono::NaiveDateTime;

use crate::geometry::{Num, Point};
use crate::record::CLOCK_FORMAT;
use crate::scale::Scale;

/// Length of inner and outer tick marks.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Half-pixel shift that keeps 1px strokes crisp.
const CRISP: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis, relative to `Axis::origin`.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: Orientation,
    /// Translation of the axis group.
    pub origin: Point,
    /// Pixel extent covered by the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new<S, F>(
        id: &'static str,
        orientation: Orientation,
        origin: Point,
        scale: &S,
        tick_count: usize,
        format: F,
    ) -> Self
    where
        S: Scale,
        F: Fn(S::Domain) -> String,
    {
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|v| Tick { offset: scale.map(v), label: format(v) })
            .collect();
        Self { id, orientation, origin, range: scale.range(), ticks }
    }

    /// Path of the domain line with outer ticks at both ends.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        match self.orientation {
            Orientation::Bottom => format!(
                "M{},{}V{}H{}V{}",
                Num(r0 + CRISP), Num(TICK_SIZE), Num(CRISP), Num(r1 + CRISP), Num(TICK_SIZE)
            ),
            Orientation::Left => format!(
                "M{},{}H{}V{}H{}",
                Num(-TICK_SIZE), Num(r0 + CRISP), Num(CRISP), Num(r1 + CRISP), Num(-TICK_SIZE)
            ),
        }
    }

    /// Translation of one tick group, relative to the axis origin.
    pub fn tick_position(&self, tick: &Tick) -> Point {
        match self.orientation {
            Orientation::Bottom => Point::new(tick.offset + CRISP, 0.0),
            Orientation::Left => Point::new(0.0, tick.offset + CRISP),
        }
    }

    /// End of the tick mark, relative to the tick position.
    pub fn tick_end(&self) -> Point {
        match self.orientation {
            Orientation::Bottom => Point::new(0.0, TICK_SIZE),
            Orientation::Left => Point::new(-TICK_SIZE, 0.0),
        }
    }

    /// Label anchor, relative to the tick position.
    pub fn label_anchor(&self) -> Point {
        let gap = TICK_SIZE + TICK_PADDING;
        match self.orientation {
            Orientation::Bottom => Point::new(0.0, gap),
            Orientation::Left => Point::new(-gap, 0.0),
        }
    }
}

/// Integer label, as used for years.
pub fn format_integer(v: f64) -> String {
    format!("{}", v.round() as i64)
}

/// `MM:SS` label for race times.
pub fn format_clock(t: NaiveDateTime) -> String {
    t.format(CLOCK_FORMAT).to_string()
}
