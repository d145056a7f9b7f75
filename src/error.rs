//! Error types for the dashboard.
//!
//! The calendar grid and record filter never fail; these errors come from the
//! edges: configuration, data files and argument parsing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ICS parse error in {path}: {reason}")]
    Ics { path: PathBuf, reason: String },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DashboardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
