// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, scale, scene and output API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod page;
pub mod record;
pub mod scale;
pub mod sources;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use chart::{Category, Chart, Marker, MarkerMeta, RenderOptions, Scene};
pub use error::{ChartError, Result};
pub use loader::{fetch_records, parse_records, read_records, DATASET_URL};
pub use page::PageOptions;
pub use record::{normalize, NormalizedRecord, RawRecord};
pub use scale::{ChartScales, LinearScale, Scale, TimeScale};
pub use sources::unique_sources;
pub use theme::{Rgb, Theme};
pub use tooltip::{Tooltip, TooltipState};
pub use types::Layout;
