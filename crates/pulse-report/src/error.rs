use pulse_core::ObservationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query component {0:?} does not decode to UTF-8")]
    BadEncoding(String),
    #[error(transparent)]
    Observation(#[from] ObservationError),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
