//! Error types for trace-scan

use std::path::PathBuf;

/// Result type for trace-scan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading scans and configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scan at {path}: {message}")]
    InvalidScan { path: PathBuf, message: String },

    #[error("Scan at {path} is empty")]
    EmptyScan { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_scan(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidScan {
            path: path.into(),
            message: message.into(),
        }
    }
}
