//! Error types for em-source

use em_core::BoxError;
use thiserror::Error;

/// Migration discovery errors
///
/// Every variant names the directory or file responsible so a single error
/// value is enough to diagnose a failed discovery.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Migration directory missing or unreadable (M001)
    #[error("[M001] Error while listing {dir}: {source}")]
    List {
        dir: String,
        source: std::io::Error,
    },

    /// Script could not be opened (M002)
    #[error("[M002] Error while opening {filename}: {source}")]
    Open {
        filename: String,
        source: std::io::Error,
    },

    /// Script could not be read to the end (M003)
    #[error("[M003] Error while reading {filename}: {source}")]
    Read {
        filename: String,
        source: std::io::Error,
    },

    /// Script content rejected by the parser (M004)
    #[error("[M004] Error while parsing {filename}: {source}")]
    Parse { filename: String, source: BoxError },
}

impl SourceError {
    /// The file the error is about, if it concerns a single script.
    pub fn filename(&self) -> Option<&str> {
        match self {
            SourceError::List { .. } => None,
            SourceError::Open { filename, .. }
            | SourceError::Read { filename, .. }
            | SourceError::Parse { filename, .. } => Some(filename),
        }
    }
}

/// Result type alias for SourceError
pub type SourceResult<T> = Result<T, SourceError>;
