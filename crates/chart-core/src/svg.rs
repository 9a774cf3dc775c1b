// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of a laid-out scene.

use crate::axis::{Axis, Orientation};
use crate::chart::{Caption, LegendEntry, Marker, Scene};
use crate::geometry::{translate, Num};
use crate::tooltip;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize `scene` as a standalone SVG document fragment rooted at `<svg id="axis">`.
pub fn render(scene: &Scene) -> String {
    let layout = &scene.layout;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"axis\" width=\"{}\" height=\"{}\" color=\"{}\" style=\"{}\">\n",
        Num(layout.svg_width()),
        Num(layout.svg_height()),
        scene.theme.axis_line,
        escape(&layout.svg_style()),
    );
    svg.push_str(&format!("<g transform=\"{}\">\n", translate(scene.content_shift)));

    push_axis(&mut svg, &scene.x_axis);
    push_axis(&mut svg, &scene.y_axis);
    for m in &scene.markers {
        push_marker(&mut svg, m);
    }
    push_legend(&mut svg, &scene.legend);
    for c in &scene.captions {
        push_caption(&mut svg, c, scene);
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn push_axis(svg: &mut String, axis: &Axis) {
    let anchor = match axis.orientation {
        Orientation::Bottom => "middle",
        Orientation::Left => "end",
    };
    svg.push_str(&format!(
        "<g id=\"{}\" transform=\"{}\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"{}\">\n",
        axis.id,
        translate(axis.origin),
        anchor,
    ));
    svg.push_str(&format!(
        "<path class=\"domain\" stroke=\"currentColor\" d=\"{}\"/>\n",
        axis.domain_path()
    ));

    let end = axis.tick_end();
    let label = axis.label_anchor();
    let (line_attr, text_attr, dy) = match axis.orientation {
        Orientation::Bottom => (format!("y2=\"{}\"", Num(end.y)), format!("y=\"{}\"", Num(label.y)), "0.71em"),
        Orientation::Left => (format!("x2=\"{}\"", Num(end.x)), format!("x=\"{}\"", Num(label.x)), "0.32em"),
    };
    for tick in &axis.ticks {
        svg.push_str(&format!(
            "<g class=\"tick\" opacity=\"1\" transform=\"{}\"><line stroke=\"currentColor\" {}/><text fill=\"currentColor\" {} dy=\"{}\">{}</text></g>\n",
            translate(axis.tick_position(tick)),
            line_attr,
            text_attr,
            dy,
            escape(&tick.label),
        ));
    }
    svg.push_str("</g>\n");
}

fn push_marker(svg: &mut String, m: &Marker) {
    let meta = &m.meta;
    svg.push_str(&format!(
        "<circle class=\"dot\" data-category=\"{}\" r=\"{}\" cx=\"{}\" cy=\"{}\" data-name=\"{}\" data-nationality=\"{}\" data-xvalue=\"{}\" data-yvalue=\"{}\" data-time=\"{}\" data-doping=\"{}\" data-tooltip=\"{}\" style=\"fill: {}\"/>\n",
        m.category.slug(),
        Num(m.radius),
        Num(m.center.x),
        Num(m.center.y),
        escape(&meta.name),
        escape(&meta.nationality),
        meta.year,
        escape(&meta.iso_time),
        escape(&meta.raw_time),
        escape(&meta.doping),
        escape(&tooltip::content(meta)),
        m.fill,
    ));
}

fn push_legend(svg: &mut String, legend: &[LegendEntry]) {
    svg.push_str("<g id=\"legend\">\n");
    for e in legend {
        svg.push_str(&format!(
            "<g class=\"legend-label\" transform=\"{}\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"fill: {}\"/></g>\n",
            translate(e.origin),
            Num(e.swatch.x),
            Num(e.swatch.y),
            Num(e.swatch_size),
            Num(e.swatch_size),
            e.fill,
        ));
    }
    for e in legend {
        svg.push_str(&format!(
            "<text class=\"legend-text\" transform=\"{}\">{}</text>\n",
            translate(e.label_origin),
            escape(e.label),
        ));
    }
    svg.push_str("</g>\n");
}

fn push_caption(svg: &mut String, c: &Caption, scene: &Scene) {
    let rotate = c
        .rotate
        .map(|deg| format!(" transform=\"rotate({})\"", Num(deg)))
        .unwrap_or_default();
    svg.push_str(&format!(
        "<text class=\"axis-label\"{} x=\"{}\" y=\"{}\" dy=\"{}em\" fill=\"{}\">{}</text>\n",
        rotate,
        Num(c.at.x),
        Num(c.at.y),
        Num(c.dy_em),
        scene.theme.caption,
        escape(c.text),
    ));
}
