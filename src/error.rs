use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a lint run before a report is produced.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The scan root is missing or is not a directory.
    #[error("Configuration error: {message} ({})", .root.display())]
    Configuration {
        /// Root directory that was requested.
        root: PathBuf,
        /// What is wrong with it.
        message: String,
    },

    /// A directory could not be read while walking the tree.
    #[error("Discovery error: {0}")]
    Discovery(#[from] walkdir::Error),
}

/// A single file that could not be loaded.
///
/// This is recoverable: the analyzer records the file as skipped and moves on.
#[derive(Debug, Error)]
#[error("Failed to load {path}: {source}")]
pub struct LoadError {
    /// Path relative to the scan root.
    pub path: String,
    /// Underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}
