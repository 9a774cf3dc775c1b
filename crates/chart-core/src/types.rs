// File: crates/chart-core/src/types.rs
// Summary: Shared layout types and constants (canvas size, padding, margins, offsets).

/// Canvas width in pixels, before padding.
pub const CANVAS_WIDTH: u32 = 920;
/// Canvas height in pixels, before padding.
pub const CANVAS_HEIGHT: u32 = 650;
/// Horizontal shift applied to both axes so the y tick labels fit.
pub const AXIS_OFFSET: f64 = 80.0;
/// Marker circle radius.
pub const MARKER_RADIUS: f64 = 8.0;
/// Top and bottom page margin around the drawing surface.
pub const MARGIN_Y: u32 = 40;

/// Screen insets, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// CSS shorthand in top/right/bottom/left order, e.g. `4px 4px 4px 4px`.
    pub fn css(&self) -> String {
        format!("{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

/// Fixed drawing-surface geometry.
///
/// The plot area is the canvas minus padding; margins only grow the outer
/// SVG element and never move the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub padding: Insets,
    pub margin: Insets,
}

impl Layout {
    /// Default layout with a custom left/right margin.
    pub fn with_margin_x(margin_x: u32) -> Self {
        Self {
            margin: Insets::new(margin_x, margin_x, MARGIN_Y, MARGIN_Y),
            ..Self::default()
        }
    }

    pub fn plot_width(&self) -> f64 {
        f64::from(self.canvas_width - self.padding.hsum())
    }

    pub fn plot_height(&self) -> f64 {
        f64::from(self.canvas_height - self.padding.vsum())
    }

    /// Width attribute of the outer SVG element.
    pub fn svg_width(&self) -> f64 {
        self.plot_width() + f64::from(self.margin.hsum() + self.padding.hsum())
    }

    /// Height attribute of the outer SVG element.
    pub fn svg_height(&self) -> f64 {
        self.plot_height() + f64::from(self.margin.vsum() + self.padding.vsum())
    }

    /// Inline style carried by the outer SVG element.
    pub fn svg_style(&self) -> String {
        format!("padding: {}; margin: {}", self.padding.css(), self.margin.css())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            padding: Insets::uniform(4),
            margin: Insets::new(40, 40, MARGIN_Y, MARGIN_Y),
        }
    }
}
