// src/error.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WikigraphError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { source: csv::Error, path: PathBuf },

    #[error("Malformed row at {path}:{line}: {reason}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("Invalid JSON at {path}:{line}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
        line: u64,
    },

    #[error("Duplicate key {key} in {path}")]
    DuplicateKey { path: PathBuf, key: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, WikigraphError>;

impl WikigraphError {
    pub(crate) fn io(source: std::io::Error, path: &Path) -> Self {
        Self::Io {
            source,
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn csv(source: csv::Error, path: &Path) -> Self {
        Self::Csv {
            source,
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn malformed(path: &Path, line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the input data or configuration rather than
    /// the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedRow { .. }
                | Self::Csv { .. }
                | Self::Json { .. }
                | Self::DuplicateKey { .. }
                | Self::Config(_)
        )
    }
}

// Allow `?` on std::io::Error by converting to WikigraphError::Io with unknown path.
impl From<std::io::Error> for WikigraphError {
    fn from(source: std::io::Error) -> Self {
        WikigraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
