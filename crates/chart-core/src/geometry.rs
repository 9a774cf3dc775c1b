// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// SVG `transform` value for a translation to `p`.
pub fn translate(p: Point) -> String {
    format!("translate({},{})", Num(p.x), Num(p.y))
}

/// Compact number formatting for SVG attributes: integers print without a
/// fractional part, everything else is rounded to 3 decimals with trailing
/// zeros removed.
#[derive(Clone, Copy, Debug)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if !v.is_finite() {
            return write!(f, "NaN");
        }
        let rounded = (v * 1000.0).round() / 1000.0;
        if rounded.fract() == 0.0 {
            // avoid "-0"
            write!(f, "{}", rounded as i64)
        } else {
            let s = format!("{:.3}", rounded);
            write!(f, "{}", s.trim_end_matches('0').trim_end_matches('.'))
        }
    }
}
