// File: crates/chart-core/src/error.rs
// Summary: Error type shared by loading, normalization, scaling and output.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("GET {url} returned {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("dataset is not a JSON array of records: {0}")]
    Json(#[from] serde_json::Error),

    /// A record field failed strict parsing. `index` is zero-based.
    #[error("record {index}: malformed {field} {value:?}")]
    MalformedRecord { index: usize, field: &'static str, value: String },

    #[error("dataset has no records")]
    EmptyDataset,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
