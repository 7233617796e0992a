//! Error type for the I/O edges of the report tool.
//!
//! The analytics functions themselves are total and never fail; only
//! loading, configuration and writing outputs can.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed allocation result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode JSON output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid value {value:?} for {key}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("no allocation result loaded")]
    NoData,
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}
