// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the backend-neutral scene (axes, markers, legend, captions).

use std::path::Path;

use crate::axis::{format_clock, format_integer, Axis, Orientation};
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::page::{self, PageOptions};
use crate::record::NormalizedRecord;
use crate::scale::{ChartScales, Scale, TICK_COUNT};
use crate::sources::unique_sources;
use crate::svg;
use crate::theme::{OrdinalPalette, Rgb, Theme, TABLEAU10};
use crate::types::{Layout, AXIS_OFFSET, MARKER_RADIUS};

/// Legend swatch edge length.
const SWATCH: f64 = 18.0;
/// Vertical distance between legend rows.
const LEGEND_ROW: f64 = 20.0;
/// Where the rotated y caption starts along the (rotated) x direction.
const Y_CAPTION_X: f64 = -375.0;
const CAPTION_GAP: f64 = 25.0;

pub struct RenderOptions {
    pub layout: Layout,
    pub theme: Theme,
    /// Shift applied to both axes, and to markers so they line up.
    pub axis_offset: f64,
    pub marker_radius: f64,
    pub tick_count: usize,
    /// Translation of the content group inside the SVG element.
    pub content_shift: Point,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            theme: Theme::default(),
            axis_offset: AXIS_OFFSET,
            marker_radius: MARKER_RADIUS,
            tick_count: TICK_COUNT,
            content_shift: Point::new(-10.0, 10.0),
        }
    }
}

/// Color key of a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Doped,
    Clean,
}

impl Category {
    pub fn of(record: &NormalizedRecord) -> Self {
        if record.has_allegation() { Self::Doped } else { Self::Clean }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Doped => "Doped",
            Self::Clean => "Not doped",
        }
    }

    /// Short name used in markup.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Doped => "doping",
            Self::Clean => "clean",
        }
    }
}

/// Record details carried by a marker for the tooltip and for inspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerMeta {
    pub name: String,
    pub nationality: String,
    pub year: i32,
    /// ISO-8601 UTC form of the time.
    pub iso_time: String,
    /// Time exactly as it appeared in the dataset.
    pub raw_time: String,
    /// `MM:SS` form of the time.
    pub clock: String,
    pub doping: String,
}

impl MarkerMeta {
    pub fn from_record(r: &NormalizedRecord) -> Self {
        Self {
            name: r.name.clone(),
            nationality: r.nationality.clone(),
            year: r.year,
            iso_time: r.iso_time(),
            raw_time: r.raw_time.clone(),
            clock: r.clock_label(),
            doping: r.doping.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    pub fill: Rgb,
    pub category: Category,
    pub meta: MarkerMeta,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Translation of the row group.
    pub origin: Point,
    /// Swatch top-left, relative to `origin`.
    pub swatch: Point,
    pub swatch_size: f64,
    pub fill: Rgb,
    pub label: &'static str,
    /// Label baseline, absolute within the content group.
    pub label_origin: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub text: &'static str,
    pub at: Point,
    /// Rotation in degrees applied before positioning.
    pub rotate: Option<f64>,
    /// Baseline shift in ems.
    pub dy_em: f64,
}

/// Fully laid-out chart, independent of the output format.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub layout: Layout,
    pub theme: Theme,
    pub content_shift: Point,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub markers: Vec<Marker>,
    pub legend: Vec<LegendEntry>,
    pub captions: Vec<Caption>,
}

pub struct Chart {
    records: Vec<NormalizedRecord>,
    scales: ChartScales,
    palette: OrdinalPalette<Category>,
    opts: RenderOptions,
}

impl Chart {
    /// Build scales and palette from the complete dataset. Fails on an empty one.
    pub fn new(records: Vec<NormalizedRecord>, opts: RenderOptions) -> Result<Self> {
        let scales = ChartScales::from_records(&records, &opts.layout)?;
        let palette = OrdinalPalette::from_keys(&TABLEAU10, records.iter().map(Category::of));
        Ok(Self { records, scales, palette, opts })
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn palette(&self) -> &OrdinalPalette<Category> {
        &self.palette
    }

    pub fn sources(&self) -> Vec<&str> {
        unique_sources(&self.records)
    }

    pub fn scene(&self) -> Scene {
        let opts = &self.opts;
        let plot_w = opts.layout.plot_width();
        let plot_h = opts.layout.plot_height();

        let x_axis = Axis::new(
            "x-axis",
            Orientation::Bottom,
            Point::new(opts.axis_offset, plot_h),
            &self.scales.x,
            opts.tick_count,
            format_integer,
        );
        let y_axis = Axis::new(
            "y-axis",
            Orientation::Left,
            Point::new(opts.axis_offset, 0.0),
            &self.scales.y,
            opts.tick_count,
            format_clock,
        );

        Scene {
            layout: opts.layout,
            theme: opts.theme,
            content_shift: opts.content_shift,
            x_axis,
            y_axis,
            markers: layout_markers(&self.records, &self.scales, &self.palette, opts),
            legend: layout_legend(&self.palette, &opts.layout),
            captions: vec![
                Caption {
                    text: "Year",
                    at: Point::new(plot_w / 2.0 + opts.axis_offset, plot_h + CAPTION_GAP),
                    rotate: None,
                    dy_em: 0.8,
                },
                Caption {
                    text: "Best Time (minutes)",
                    at: Point::new(Y_CAPTION_X, CAPTION_GAP),
                    rotate: Some(-90.0),
                    dy_em: 0.8,
                },
            ],
        }
    }

    pub fn render_svg(&self) -> String {
        svg::render(&self.scene())
    }

    /// Complete HTML page: chart, tooltip panel and source list.
    pub fn render_page(&self, page_opts: &PageOptions) -> String {
        page::render_page(&self.scene(), &self.sources(), page_opts)
    }

    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        write_output(path.as_ref(), self.render_svg().as_bytes())
    }

    pub fn render_to_html(&self, page_opts: &PageOptions, path: impl AsRef<Path>) -> Result<()> {
        write_output(path.as_ref(), self.render_page(page_opts).as_bytes())
    }
}

/// One marker per record, in record order.
pub fn layout_markers(
    records: &[NormalizedRecord],
    scales: &ChartScales,
    palette: &OrdinalPalette<Category>,
    opts: &RenderOptions,
) -> Vec<Marker> {
    records
        .iter()
        .map(|r| {
            let category = Category::of(r);
            Marker {
                center: Point::new(scales.x.map(f64::from(r.year)) + opts.axis_offset, scales.y.map(r.time)),
                radius: opts.marker_radius,
                fill: palette.color(category),
                category,
                meta: MarkerMeta::from_record(r),
            }
        })
        .collect()
}

/// Swatch rows stacked upward from mid-height, in palette domain order.
pub fn layout_legend(palette: &OrdinalPalette<Category>, layout: &Layout) -> Vec<LegendEntry> {
    let plot_w = layout.plot_width();
    let mid = layout.plot_height() / 2.0;
    palette
        .domain()
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            let row_y = mid - i as f64 * LEGEND_ROW;
            LegendEntry {
                origin: Point::new(0.0, row_y),
                swatch: Point::new(plot_w - SWATCH, 0.0),
                swatch_size: SWATCH,
                fill: palette.color(category),
                label: category.label(),
                label_origin: Point::new(plot_w + 5.0, row_y + 16.0),
            }
        })
        .collect()
}

/// Write `bytes` to `path`, creating parent directories.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
        }
    }
    std::fs::write(path, bytes).map_err(|e| ChartError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
