//! Domain types for the trigger runner.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. The status protocol is a tagged outcome plus an independent stop
//! bit, not OR-able integer flags.

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Matched paths
// ---------------------------------------------------------------------------

/// What kind of filesystem object a matched path currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
    /// Anything else: sockets, broken symlinks, unreadable entries.
    Other,
}

/// A single path produced by resolving a trigger's interest set, tagged with
/// its kind so triggers can decide applicability without re-statting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    pub path: PathBuf,
    pub kind: PathKind,
}

impl PathMatch {
    /// Stat `path` and classify it. Unreadable paths classify as
    /// [`PathKind::Other`]; symlinks are followed.
    pub fn classify(path: PathBuf) -> Self {
        let kind = match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            Ok(meta) if meta.is_file() => PathKind::File,
            _ => PathKind::Other,
        };
        Self { path, kind }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == PathKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == PathKind::File
    }
}

// ---------------------------------------------------------------------------
// Status protocol
// ---------------------------------------------------------------------------

/// How a trigger's work for one matched path turned out.
///
/// Exactly one variant per invocation. `Fail` carries the diagnostic the
/// dispatcher records against the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applicability {
    /// The work for this path completed.
    Success,
    /// The matched path was not actually applicable. Not an error.
    Skip,
    /// The work failed; downgrades the overall run result.
    Fail { reason: String },
}

/// Return value of a trigger invocation: an applicability tag plus a stop
/// bit that ends the match loop for this trigger only.
///
/// The stop bit combines with any of the three tags; a trigger that only
/// needs to fire once returns `success().and_stop()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerStatus {
    pub applicability: Applicability,
    pub stop: bool,
}

impl TriggerStatus {
    pub fn success() -> Self {
        Self {
            applicability: Applicability::Success,
            stop: false,
        }
    }

    pub fn skip() -> Self {
        Self {
            applicability: Applicability::Skip,
            stop: false,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            applicability: Applicability::Fail {
                reason: reason.into(),
            },
            stop: false,
        }
    }

    /// Stop iterating the remaining matched paths for this trigger.
    pub fn and_stop(mut self) -> Self {
        self.stop = true;
        self
    }

    pub fn is_fail(&self) -> bool {
        matches!(self.applicability, Applicability::Fail { .. })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
