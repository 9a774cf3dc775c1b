// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a chart scene using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::Result;
use chart_core::axis::{Axis, Orientation};
use chart_core::chart::{write_output, Caption, Scene};
use chart_core::theme::Rgb;
use skia_safe as skia;

const TICK_FONT_SIZE: f32 = 10.0;
const CAPTION_FONT_SIZE: f32 = 14.0;
const LEGEND_FONT_SIZE: f32 = 12.0;

#[inline]
fn color(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

#[derive(Clone, Copy, PartialEq)]
enum Anchor {
    Start,
    Middle,
    End,
}

pub struct SkiaRenderer {
    tick_font: skia::Font,
    caption_font: skia::Font,
    legend_font: skia::Font,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        let font = |size: f32| {
            let mut f = skia::Font::default();
            f.set_size(size);
            f
        };
        Self {
            tick_font: font(TICK_FONT_SIZE),
            caption_font: font(CAPTION_FONT_SIZE),
            legend_font: font(LEGEND_FONT_SIZE),
        }
    }

    /// Rasterize `scene` at the size of its SVG element and encode it as PNG.
    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let layout = &scene.layout;
        let (w, h) = (layout.svg_width().round() as i32, layout.svg_height().round() as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(color(scene.theme.background));

        // Same origin the browser uses: margin + padding, then the content shift.
        canvas.save();
        canvas.translate((
            (layout.margin.left + layout.padding.left) as f32 + scene.content_shift.x as f32,
            (layout.margin.top + layout.padding.top) as f32 + scene.content_shift.y as f32,
        ));

        self.draw_axis(canvas, &scene.x_axis, scene.theme.axis_line);
        self.draw_axis(canvas, &scene.y_axis, scene.theme.axis_line);
        draw_markers(canvas, scene);
        self.draw_legend(canvas, scene);
        for c in &scene.captions {
            self.draw_caption(canvas, c, scene.theme.caption);
        }
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        tracing::debug!(width = w, height = h, bytes = data.len(), "rasterized chart");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `path`.
    pub fn render_to_png(&self, scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene)?;
        write_output(path.as_ref(), &bytes)?;
        Ok(())
    }

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &Axis, line: Rgb) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(color(line));

        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(color(line));

        canvas.save();
        canvas.translate((axis.origin.x as f32, axis.origin.y as f32));

        let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
        let outer = chart_core::axis::TICK_SIZE as f32;
        match axis.orientation {
            Orientation::Bottom => {
                canvas.draw_line((r0, 0.0), (r1, 0.0), &stroke);
                canvas.draw_line((r0, 0.0), (r0, outer), &stroke);
                canvas.draw_line((r1, 0.0), (r1, outer), &stroke);
            }
            Orientation::Left => {
                canvas.draw_line((0.0, r0), (0.0, r1), &stroke);
                canvas.draw_line((0.0, r0), (-outer, r0), &stroke);
                canvas.draw_line((0.0, r1), (-outer, r1), &stroke);
            }
        }

        let end = axis.tick_end();
        let label = axis.label_anchor();
        for tick in &axis.ticks {
            let p = axis.tick_position(tick);
            let (px, py) = (p.x as f32, p.y as f32);
            canvas.draw_line((px, py), (px + end.x as f32, py + end.y as f32), &stroke);
            match axis.orientation {
                Orientation::Bottom => self.draw_text(
                    canvas,
                    &tick.label,
                    (px, py + label.y as f32 + 0.71 * TICK_FONT_SIZE),
                    Anchor::Middle,
                    &self.tick_font,
                    &text,
                ),
                Orientation::Left => self.draw_text(
                    canvas,
                    &tick.label,
                    (px + label.x as f32, py + 0.32 * TICK_FONT_SIZE),
                    Anchor::End,
                    &self.tick_font,
                    &text,
                ),
            }
        }
        canvas.restore();
    }

    fn draw_legend(&self, canvas: &skia::Canvas, scene: &Scene) {
        let mut fill = skia::Paint::default();
        fill.set_style(skia::paint::Style::Fill);
        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(color(scene.theme.axis_label));

        for e in &scene.legend {
            fill.set_color(color(e.fill));
            let left = (e.origin.x + e.swatch.x) as f32;
            let top = (e.origin.y + e.swatch.y) as f32;
            let size = e.swatch_size as f32;
            canvas.draw_rect(skia::Rect::from_xywh(left, top, size, size), &fill);
            self.draw_text(
                canvas,
                e.label,
                (e.label_origin.x as f32, e.label_origin.y as f32),
                Anchor::Start,
                &self.legend_font,
                &text,
            );
        }
    }

    fn draw_caption(&self, canvas: &skia::Canvas, c: &Caption, fg: Rgb) {
        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(color(fg));
        canvas.save();
        if let Some(deg) = c.rotate {
            canvas.rotate(deg as f32, None);
        }
        let baseline = c.at.y as f32 + c.dy_em as f32 * CAPTION_FONT_SIZE;
        self.draw_text(canvas, c.text, (c.at.x as f32, baseline), Anchor::Start, &self.caption_font, &text);
        canvas.restore();
    }

    fn draw_text(
        &self,
        canvas: &skia::Canvas,
        s: &str,
        at: (f32, f32),
        anchor: Anchor,
        font: &skia::Font,
        paint: &skia::Paint,
    ) {
        let x = match anchor {
            Anchor::Start => at.0,
            Anchor::Middle => at.0 - font.measure_str(s, Some(paint)).0 / 2.0,
            Anchor::End => at.0 - font.measure_str(s, Some(paint)).0,
        };
        canvas.draw_str(s, (x, at.1), font, paint);
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_markers(canvas: &skia::Canvas, scene: &Scene) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    let mut outline = skia::Paint::default();
    outline.set_anti_alias(true);
    outline.set_style(skia::paint::Style::Stroke);
    outline.set_stroke_width(1.0);
    outline.set_color(skia::Color::from_argb(102, 0, 0, 0));

    for m in &scene.markers {
        body.set_color(color(m.fill));
        let center = (m.center.x as f32, m.center.y as f32);
        canvas.draw_circle(center, m.radius as f32, &body);
        canvas.draw_circle(center, m.radius as f32, &outline);
    }
}
