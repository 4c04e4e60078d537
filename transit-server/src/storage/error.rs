//! Storage error types.

use std::path::PathBuf;

/// IO-level failures while reading or writing network data files.
///
/// Malformed records are not errors: loaders skip them with a warning.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read a data file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a data file
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
