//! Change-set state — mtime fingerprints of each trigger's matched paths.
//!
//! Persists a `StateFile` JSON document at `<root>/var/lib/postrun/state.json`.
//! A trigger whose fingerprint is unchanged since its last fully-successful
//! run is skipped without invoking it; `--force` bypasses the comparison and
//! dry runs never record.
//!
//! Writes use an atomic `.tmp` + rename in the same directory.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postrun_core::PathMatch;

use crate::error::{io_err, DispatchError};

/// Per-trigger fingerprint: matched path → mtime in nanoseconds since epoch.
/// `BTreeMap` keeps the serialized form stable across runs.
pub type Fingerprint = BTreeMap<String, i64>;

/// On-disk state payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateFile {
    pub recorded_at: DateTime<Utc>,
    pub triggers: HashMap<String, Fingerprint>,
}

impl StateFile {
    pub fn empty() -> Self {
        Self {
            recorded_at: Utc::now(),
            triggers: HashMap::new(),
        }
    }

    /// True when the trigger ran successfully before against exactly this
    /// set of paths and mtimes.
    pub fn unchanged(&self, trigger: &str, fingerprint: &Fingerprint) -> bool {
        self.triggers.get(trigger) == Some(fingerprint)
    }

    pub fn record(&mut self, trigger: &str, fingerprint: Fingerprint) {
        self.triggers.insert(trigger.to_string(), fingerprint);
    }
}

/// Fingerprint a resolved match set. Paths that cannot be statted (raced
/// away since resolution) are recorded with mtime 0 so the change is still
/// observed on the next run.
pub fn fingerprint(matches: &[PathMatch]) -> Fingerprint {
    let mut fp = Fingerprint::new();
    for m in matches {
        let mtime = std::fs::symlink_metadata(&m.path)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_nanos() as i64)
            .unwrap_or(0);
        fp.insert(m.path.display().to_string(), mtime);
    }
    fp
}

/// `<root>/var/lib/postrun/state.json`
pub fn state_path_under(root: &Path) -> PathBuf {
    root.join("var/lib/postrun/state.json")
}

/// Load the state file, or an empty store if it does not yet exist.
pub fn load_at(path: &Path) -> Result<StateFile, DispatchError> {
    if !path.exists() {
        return Ok(StateFile::empty());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the state file atomically: write to `<path>.tmp`, then rename.
pub fn save_at(path: &Path, state: &StateFile) -> Result<(), DispatchError> {
    let Some(dir) = path.parent() else {
        return Err(io_err(path, std::io::Error::other("invalid state path")));
    };
    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;

    let json = serde_json::to_string_pretty(state)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    Ok(())
}
