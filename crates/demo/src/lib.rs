// File: crates/demo/src/lib.rs
// Summary: Command-line options and the load, render, write pipeline behind the binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::chart::write_output;
use chart_core::{normalize, Chart, Layout, PageOptions, RenderOptions};
use chart_render_skia::SkiaRenderer;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "doping-chart")]
#[command(about = "Render race times vs. year, colored by doping allegation, as an HTML/SVG chart")]
pub struct Args {
    /// Dataset location (JSON array of records)
    #[arg(long, default_value = chart_core::DATASET_URL)]
    pub url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory for index.html, chart.svg and chart.png
    #[arg(short, long, default_value = "target/out")]
    pub out_dir: PathBuf,

    /// Left/right margin around the chart, in pixels
    #[arg(long, default_value_t = 40)]
    pub margin_x: u32,

    /// Also rasterize the chart to chart.png
    #[arg(long)]
    pub png: bool,
}

/// Load the dataset, render every output in memory, then write them.
/// Returns the written paths in write order; on error nothing was written.
pub async fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let raw = match &args.input {
        Some(path) => chart_core::read_records(path)
            .with_context(|| format!("failed to load dataset '{}'", path.display()))?,
        None => chart_core::fetch_records(&args.url)
            .await
            .with_context(|| format!("failed to fetch dataset from {}", args.url))?,
    };

    let records = normalize(raw).context("dataset has malformed records")?;
    info!("Loaded {} records", records.len());

    let opts = RenderOptions { layout: Layout::with_margin_x(args.margin_x), ..RenderOptions::default() };
    let chart = Chart::new(records, opts).context("cannot scale dataset")?;
    info!(
        "{} sources, {} legend entries",
        chart.sources().len(),
        chart.palette().domain().len()
    );

    let scene = chart.scene();
    let mut outputs = vec![
        ("index.html", chart_core::page::render_page(&scene, &chart.sources(), &PageOptions::default()).into_bytes()),
        ("chart.svg", chart_core::svg::render(&scene).into_bytes()),
    ];
    if args.png {
        let png = SkiaRenderer::new().render_png_bytes(&scene).context("PNG rasterization failed")?;
        outputs.push(("chart.png", png));
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (name, bytes) in outputs {
        let path = args.out_dir.join(name);
        write_output(&path, &bytes)?;
        println!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
