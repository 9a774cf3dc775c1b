// File: crates/chart-core/src/tooltip.rs
// Summary: Two-state hover tooltip: content, placement, fade timing and the page script.

use crate::chart::MarkerMeta;
use crate::geometry::{Num, Point};
use crate::svg::escape;

/// Panel offset from the pointer.
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -38.0;
/// Opacity of the panel once faded in.
pub const VISIBLE_OPACITY: f64 = 0.9;
/// Fade duration for both transitions.
pub const TRANSITION_MS: u32 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Visible,
}

/// Everything the host needs to draw the panel.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    pub state: TooltipState,
    pub html: String,
    pub position: Point,
    /// Year of the last hovered marker, mirrored on the panel as `data-year`.
    pub year: Option<i32>,
    /// Opacity the fade ends at.
    pub opacity: f64,
    pub transition_ms: u32,
    /// Whether the panel is displayed once the fade completes.
    pub displayed: bool,
}

/// The single tooltip panel. Hover events arrive one at a time, so the last
/// marker entered decides what is shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    view: TooltipView,
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            view: TooltipView {
                state: TooltipState::Hidden,
                html: String::new(),
                position: Point::default(),
                year: None,
                opacity: 0.0,
                transition_ms: 0,
                displayed: false,
            },
        }
    }

    pub fn state(&self) -> TooltipState {
        self.view.state
    }

    pub fn view(&self) -> &TooltipView {
        &self.view
    }

    /// Pointer entered a marker: fill from its metadata and fade in near the pointer.
    pub fn on_pointer_enter(&mut self, meta: &MarkerMeta, pointer: Point) -> &TooltipView {
        self.view = TooltipView {
            state: TooltipState::Visible,
            html: content(meta),
            position: pointer.offset(OFFSET_X, OFFSET_Y),
            year: Some(meta.year),
            opacity: VISIBLE_OPACITY,
            transition_ms: TRANSITION_MS,
            displayed: true,
        };
        &self.view
    }

    /// Pointer left the marker: fade out, then stop displaying. Content is kept.
    pub fn on_pointer_exit(&mut self) -> &TooltipView {
        self.view.state = TooltipState::Hidden;
        self.view.opacity = 0.0;
        self.view.transition_ms = TRANSITION_MS;
        self.view.displayed = false;
        &self.view
    }

    /// Inline CSS for the panel in its current state.
    pub fn style(&self) -> String {
        let v = &self.view;
        let display = if v.displayed { "block" } else { "none" };
        match v.state {
            TooltipState::Hidden if v.html.is_empty() => {
                format!("opacity: {}; display: {}", Num(v.opacity), display)
            }
            _ => format!(
                "left: {}px; top: {}px; opacity: {}; display: {}",
                Num(v.position.x),
                Num(v.position.y),
                Num(v.opacity),
                display
            ),
        }
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

/// Panel HTML for one marker. The allegation line appears only when the
/// record has one.
pub fn content(meta: &MarkerMeta) -> String {
    let mut html = format!(
        "<h3>{}, {}</h3><b>Year</b>: {}<br><b>Time</b>: {}",
        escape(&meta.name),
        escape(&meta.nationality),
        meta.year,
        escape(&meta.clock),
    );
    if !meta.doping.is_empty() {
        html.push_str("<br/><br/>");
        html.push_str(&escape(&meta.doping));
    }
    html
}

/// Browser-side wiring of the same transitions, reading the content prepared
/// in each marker's `data-tooltip` attribute.
pub fn script() -> String {
    format!(
        r##"(function () {{
  var tooltip = document.getElementById("tooltip");
  var hideTimer = null;
  document.querySelectorAll("#graph circle.dot").forEach(function (dot) {{
    dot.addEventListener("mouseover", function (e) {{
      clearTimeout(hideTimer);
      tooltip.setAttribute("data-year", dot.getAttribute("data-xvalue"));
      tooltip.innerHTML = dot.getAttribute("data-tooltip");
      tooltip.style.left = (e.pageX + {dx}) + "px";
      tooltip.style.top = (e.pageY + {dy}) + "px";
      tooltip.style.display = "block";
      // flush styles so the fade starts from the hidden opacity
      void tooltip.offsetWidth;
      tooltip.style.opacity = "{opacity}";
    }});
    dot.addEventListener("mouseout", function () {{
      tooltip.style.opacity = "0";
      hideTimer = setTimeout(function () {{ tooltip.style.display = "none"; }}, {ms});
    }});
  }});
}})();
"##,
        dx = Num(OFFSET_X),
        dy = Num(OFFSET_Y),
        opacity = Num(VISIBLE_OPACITY),
        ms = TRANSITION_MS,
    )
}
