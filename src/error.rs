//! Error handling types.

use std::path::PathBuf;

use thiserror::Error;

/// A specialized Result type for guide-search operations.
///
/// This is an alias for `anyhow::Result` with context added via
/// `.context()` where needed.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the guide collection fails.
///
/// All fallibility lives in this loading layer; once a collection is in
/// memory, index construction and querying cannot fail.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Collection file could not be read.
    #[error("failed to read guide collection at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Collection file is not valid collection JSON.
    #[error("failed to parse guide collection at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
