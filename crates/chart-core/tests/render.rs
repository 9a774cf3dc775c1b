// File: crates/chart-core/tests/render.rs
// Purpose: Validate scene layout (markers, colors, legend, axes) and SVG/HTML output.

use chart_core::axis::Orientation;
use chart_core::{normalize, parse_records, Category, Chart, Layout, PageOptions, RenderOptions};

fn chart() -> Chart {
    let json = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cyclists.json"))
        .expect("read fixture");
    let records = normalize(parse_records(&json).expect("parse")).expect("normalize");
    Chart::new(records, RenderOptions::default()).expect("chart")
}

#[test]
fn one_marker_per_record_in_order() {
    let chart = chart();
    let scene = chart.scene();
    assert_eq!(scene.markers.len(), chart.records().len());
    for (m, r) in scene.markers.iter().zip(chart.records()) {
        assert_eq!(m.meta.name, r.name);
        assert_eq!(m.meta.year, r.year);
        assert_eq!(m.meta.raw_time, r.raw_time);
        assert_eq!(m.radius, 8.0);
    }
}

#[test]
fn markers_are_shifted_with_the_axes() {
    use chart_core::Scale;
    let chart = chart();
    let scene = chart.scene();
    let scales = chart.scales();
    for (m, r) in scene.markers.iter().zip(chart.records()) {
        assert_eq!(m.center.x, scales.x.map(f64::from(r.year)) + 80.0);
        assert_eq!(m.center.y, scales.y.map(r.time));
    }
    // fastest time sits on the top edge, slowest on the bottom edge
    assert_eq!(scene.markers[0].center.y, 0.0);
    assert_eq!(scene.markers[5].center.y, 642.0);
}

#[test]
fn allegation_and_clean_never_share_a_color() {
    let scene = chart().scene();
    let doped: Vec<_> = scene.markers.iter().filter(|m| m.category == Category::Doped).collect();
    let clean: Vec<_> = scene.markers.iter().filter(|m| m.category == Category::Clean).collect();
    assert!(!doped.is_empty() && !clean.is_empty());
    for d in &doped {
        for c in &clean {
            assert_ne!(d.fill, c.fill);
        }
    }
    // first-seen key takes the first scheme color
    assert_eq!(doped[0].fill.to_string(), "#4e79a7");
    assert_eq!(clean[0].fill.to_string(), "#f28e2c");
}

#[test]
fn legend_has_one_row_per_category() {
    let scene = chart().scene();
    assert_eq!(scene.legend.len(), 2);
    assert_eq!(scene.legend[0].label, "Doped");
    assert_eq!(scene.legend[1].label, "Not doped");
    assert_eq!(scene.legend[0].origin.y, 321.0);
    assert_eq!(scene.legend[1].origin.y, 301.0);
    assert_eq!(scene.legend[0].swatch.x, 894.0);
    assert_eq!(scene.legend[0].label_origin.x, 917.0);
    assert_eq!(scene.legend[0].label_origin.y, 337.0);
    let doped = scene.markers.iter().find(|m| m.category == Category::Doped).expect("doped marker");
    assert_eq!(scene.legend[0].fill, doped.fill);
}

#[test]
fn axes_are_placed_and_labelled() {
    let scene = chart().scene();
    assert_eq!(scene.x_axis.orientation, Orientation::Bottom);
    assert_eq!((scene.x_axis.origin.x, scene.x_axis.origin.y), (80.0, 642.0));
    assert_eq!((scene.y_axis.origin.x, scene.y_axis.origin.y), (80.0, 0.0));
    // years 1995..2015 padded to 1994..2016
    let years: Vec<&str> = scene.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(years.first(), Some(&"1994"));
    assert_eq!(years.last(), Some(&"2016"));
    assert!(scene.y_axis.ticks.iter().all(|t| t.label.len() == 5 && t.label.as_bytes()[2] == b':'));
    assert_eq!(scene.captions[0].text, "Year");
    assert_eq!(scene.captions[1].text, "Best Time (minutes)");
    assert_eq!(scene.captions[1].rotate, Some(-90.0));
}

#[test]
fn rendering_is_idempotent() {
    let chart = chart();
    assert_eq!(chart.scene(), chart.scene());
    assert_eq!(chart.render_svg(), chart.render_svg());
}

#[test]
fn svg_carries_marker_metadata() {
    let svg = chart().render_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"axis\""));
    assert!(svg.contains("width=\"1000\" height=\"730\""));
    assert!(svg.contains("style=\"padding: 4px 4px 4px 4px; margin: 40px 40px 40px 40px\""));
    assert!(svg.contains("<g id=\"x-axis\" transform=\"translate(80,642)\""));
    assert!(svg.contains("<g id=\"y-axis\" transform=\"translate(80,0)\""));
    assert_eq!(svg.matches("<circle class=\"dot\"").count(), 6);
    assert!(svg.contains("data-name=\"Marco Pantani\""));
    assert!(svg.contains("data-xvalue=\"1995\""));
    assert!(svg.contains("data-yvalue=\"1990-01-01T00:36:50.000Z\""));
    assert!(svg.contains("data-time=\"36:50\""));
    assert!(svg.contains(">Best Time (minutes)</text>"));
}

#[test]
fn margin_only_grows_the_outer_box() {
    let json = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cyclists.json"))
        .expect("read fixture");
    let records = normalize(parse_records(&json).expect("parse")).expect("normalize");
    let wide = RenderOptions { layout: Layout::with_margin_x(100), ..RenderOptions::default() };
    let wide = Chart::new(records, wide).expect("chart");
    assert_eq!(wide.scene().markers, chart().scene().markers);
    assert!(wide.render_svg().contains("width=\"1120\""));
}

#[test]
fn page_lists_unique_sources_and_hidden_tooltip() {
    let html = chart().render_page(&PageOptions::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div id=\"graph\">"));
    assert!(html.contains("<div id=\"tooltip\" style=\"opacity: 0; display: none\"></div>"));
    assert_eq!(html.matches("<li><a href=").count(), 2);
    assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    assert!(html.contains("<h1>Sources</h1>"));
    assert!(html.contains("addEventListener(\"mouseover\""));
}

#[test]
fn output_files_are_written() {
    let dir = std::path::PathBuf::from("target/test_out/render");
    let chart = chart();
    chart.render_to_svg(dir.join("chart.svg")).expect("write svg");
    chart.render_to_html(&PageOptions::default(), dir.join("index.html")).expect("write html");
    let svg = std::fs::read_to_string(dir.join("chart.svg")).expect("svg exists");
    assert_eq!(svg, chart.render_svg());
    assert!(std::fs::metadata(dir.join("index.html")).expect("html exists").len() > 0);
}
