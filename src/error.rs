//! Error types for bytecode n-gram analysis

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dexgram operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while extracting or analysing instruction sequences
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A bytecode listing or manifest could not be opened or read
    #[error("Failed to read {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Window size out of range, malformed manifest, unusable input label
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AnalysisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
