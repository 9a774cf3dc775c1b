// File: crates/chart-core/src/loader.rs
// Summary: Single-shot dataset fetch plus offline parsing of the same JSON document.

use std::path::Path;

use tracing::info;

use crate::error::{ChartError, Result};
use crate::record::RawRecord;

/// Public freeCodeCamp copy of the cyclist dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Issue one `GET` against `url` and parse the body as a JSON array of records.
///
/// No retry, timeout or caching: a failure ends the run.
pub async fn fetch_records(url: &str) -> Result<Vec<RawRecord>> {
    info!(%url, "fetching dataset");
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ChartError::Status { url: url.to_string(), status });
    }
    let body = response.bytes().await?;
    let records: Vec<RawRecord> = serde_json::from_slice(&body)?;
    info!(records = records.len(), bytes = body.len(), "dataset received");
    Ok(records)
}

/// Parse a dataset document already in memory.
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a dataset document from disk.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
    let records = parse_records(&text)?;
    info!(path = %path.display(), records = records.len(), "dataset loaded from file");
    Ok(records)
}
