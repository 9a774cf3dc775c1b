// File: crates/chart-core/src/page.rs
// Summary: Self-contained HTML host page: chart container, tooltip panel, source list.

use crate::chart::Scene;
use crate::svg::{self, escape};
use crate::tooltip::{self, Tooltip, TRANSITION_MS};

pub struct PageOptions {
    pub title: String,
    pub heading: String,
    pub subheading: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Doping in Professional Bicycle Racing".to_string(),
            heading: "Doping in Professional Bicycle Racing".to_string(),
            subheading: "35 Fastest times up Alpe d'Huez".to_string(),
        }
    }
}

/// Render the full page around `scene`. `sources` become the link list
/// under the chart.
pub fn render_page(scene: &Scene, sources: &[&str], opts: &PageOptions) -> String {
    let theme = &scene.theme;
    let tooltip = Tooltip::new();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&opts.title)));
    html.push_str(&format!(
        r#"<style>
body {{ background: {bg}; font-family: sans-serif; }}
#title {{ text-align: center; }}
#graph {{ margin: 0 auto; width: fit-content; }}
#graph hr {{ border-color: {rule}; }}
#graph h1 {{ padding-left: 40px; }}
.axis-label {{ font-size: 14px; }}
.legend-text {{ font-size: 12px; }}
circle.dot {{ stroke: #000; stroke-opacity: 0.4; }}
#tooltip {{
  position: absolute;
  padding: 6px 10px;
  border-radius: 4px;
  pointer-events: none;
  background: {tip_bg};
  color: {tip_fg};
  font-size: 12px;
  transition: opacity {ms}ms;
}}
#tooltip h3 {{ margin: 0 0 4px; font-size: 13px; }}
</style>
"#,
        bg = theme.background,
        rule = theme.rule,
        tip_bg = theme.tooltip_background,
        tip_fg = theme.tooltip_text,
        ms = TRANSITION_MS,
    ));
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<div id=\"title\"><h1>{}</h1><h2>{}</h2></div>\n",
        escape(&opts.heading),
        escape(&opts.subheading),
    ));

    html.push_str("<div id=\"graph\">\n");
    html.push_str(&svg::render(scene));
    html.push_str("<hr>\n<h1>Sources</h1>\n<ul>\n");
    for url in sources {
        let url = escape(url);
        html.push_str(&format!(
            "<li><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{url}</a></li>\n"
        ));
    }
    html.push_str("</ul>\n</div>\n");

    html.push_str(&format!("<div id=\"tooltip\" style=\"{}\"></div>\n", tooltip.style()));
    html.push_str("<script>\n");
    html.push_str(&tooltip::script());
    html.push_str("</script>\n</body>\n</html>\n");
    html
}
