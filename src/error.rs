//! Error taxonomy for a scan run.
//!
//! [`ScanError`] is fatal and carries no partial report. [`FileError`] is
//! per-file and recoverable: the file is skipped and listed in the report.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use crate::syntax::ParseError;

/// Fatal errors that abort the whole scan
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read root directory {}: {source}", .path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("root path {} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// Only returned in strict mode
    #[error("aborting scan: {0}")]
    Parse(#[from] ParseError),

    #[error("scan worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Recoverable, per-file errors
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FileError {
    /// Why the file was skipped, without repeating its path
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            FileError::Read { source, .. } => format!("failed to read file: {source}"),
            FileError::Parse(e) => e.detail(),
        }
    }
}

/// Errors loading `copy-scout.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors loading the content set
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate content id `{0}`")]
    DuplicateId(String),
}

/// Top-level error for the command line tool
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for CLI
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::Content(_) => 2,
            Error::Scan(ScanError::Enumeration { .. } | ScanError::NotADirectory { .. }) => 3,
            Error::Scan(ScanError::Parse(_)) => 4,
            _ => 1,
        }
    }
}
