//! Error types for postrun-dispatch.

use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::ResolveError;

/// All errors that can arise from a dispatch run.
///
/// Everything here is a configuration or environment fault that aborts the
/// run before (or outside) the trigger loop — individual trigger failures
/// are data in the run report, never an `Err`.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A name passed on the command line matches no registered trigger.
    #[error("unknown trigger '{name}'")]
    UnknownTrigger { name: String },

    /// A registered trigger declared a malformed glob pattern.
    #[error("trigger '{trigger}': {source}")]
    Pattern {
        trigger: String,
        #[source]
        source: ResolveError,
    },

    /// An I/O error, with annotated path for context (state store).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State store JSON serialization/deserialization error.
    #[error("state store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`DispatchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DispatchError {
    DispatchError::Io {
        path: path.into(),
        source,
    }
}
