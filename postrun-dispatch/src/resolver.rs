//! Interest-set resolution against the live filesystem.
//!
//! The resolver is a collaborator of the dispatcher, behind a trait so the
//! dispatch algorithm can be verified with canned matches. Zero matches is
//! a normal outcome; only a malformed pattern is an error, and that is
//! caught by `validate` before any trigger executes.

use std::path::{Path, PathBuf};

use thiserror::Error;

use postrun_core::PathMatch;

/// A glob pattern that does not parse.
#[derive(Debug, Error)]
#[error("malformed glob pattern '{pattern}': {source}")]
pub struct ResolveError {
    pub pattern: String,
    #[source]
    pub source: glob::PatternError,
}

/// Resolves a trigger's interest globs to existing filesystem paths.
///
/// Match order within one pattern is filesystem-dependent; callers must not
/// rely on it for correctness, only for which match a stop bit lands on.
pub trait PathResolver {
    /// Syntax-check patterns without touching the filesystem.
    fn validate(&self, patterns: &[String]) -> Result<(), ResolveError>;

    /// Expand patterns to currently-existing paths, each tagged with its
    /// kind. Unreadable directory entries are skipped, not errors.
    fn resolve(&self, patterns: &[String]) -> Vec<PathMatch>;
}

/// Glob-based resolver that rebases every absolute pattern under a root
/// override, so `--root` confines all lookups.
#[derive(Debug, Clone)]
pub struct GlobResolver {
    root: PathBuf,
}

impl GlobResolver {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/"),
        }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `/usr/lib/tmpfiles.d` under root `/sysroot` becomes
    /// `/sysroot/usr/lib/tmpfiles.d`.
    fn rebase(&self, pattern: &str) -> String {
        self.root
            .join(pattern.trim_start_matches('/'))
            .display()
            .to_string()
    }
}

impl Default for GlobResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver for GlobResolver {
    fn validate(&self, patterns: &[String]) -> Result<(), ResolveError> {
        for pattern in patterns {
            glob::Pattern::new(pattern).map_err(|source| ResolveError {
                pattern: pattern.clone(),
                source,
            })?;
        }
        Ok(())
    }

    fn resolve(&self, patterns: &[String]) -> Vec<PathMatch> {
        let mut matches = Vec::new();
        for pattern in patterns {
            let rebased = self.rebase(pattern);
            let entries = match glob::glob(&rebased) {
                Ok(entries) => entries,
                Err(err) => {
                    // validate() is the gate; a pattern failing here was
                    // never registered through it.
                    tracing::warn!("skipping malformed pattern '{rebased}': {err}");
                    continue;
                }
            };
            for entry in entries {
                match entry {
                    Ok(path) => matches.push(PathMatch::classify(path)),
                    Err(err) => {
                        tracing::warn!("skipping unreadable match: {err}");
                    }
                }
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use postrun_core::PathKind;

    #[test]
    fn zero_matches_is_not_an_error() {
        let root = TempDir::new().unwrap();
        let resolver = GlobResolver::with_root(root.path());
        let matches = resolver.resolve(&["/usr/lib/tmpfiles.d".to_string()]);
        assert!(matches.is_empty());
    }

    #[test]
    fn matches_are_rebased_under_the_root() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("usr/lib/tmpfiles.d");
        fs::create_dir_all(&dir).unwrap();

        let resolver = GlobResolver::with_root(root.path());
        let matches = resolver.resolve(&["/usr/lib/tmpfiles.d".to_string()]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].path, dir);
        assert_eq!(matches[0].kind, PathKind::Directory);
    }

    #[test]
    fn wildcard_patterns_expand_and_classify() {
        let root = TempDir::new().unwrap();
        let icons = root.path().join("usr/share/icons");
        fs::create_dir_all(icons.join("hicolor")).unwrap();
        fs::create_dir_all(icons.join("Adwaita")).unwrap();
        fs::write(icons.join("README"), "not a theme").unwrap();

        let resolver = GlobResolver::with_root(root.path());
        let matches = resolver.resolve(&["/usr/share/icons/*".to_string()]);
        assert_eq!(matches.len(), 3);
        assert_eq!(
            matches.iter().filter(|m| m.is_dir()).count(),
            2,
            "two theme directories"
        );
        assert_eq!(matches.iter().filter(|m| m.is_file()).count(), 1);
    }

    #[test]
    fn validate_rejects_malformed_patterns() {
        let resolver = GlobResolver::new();
        let err = resolver
            .validate(&["/usr/lib/[".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("/usr/lib/["));
    }

    #[test]
    fn validate_accepts_interest_sets_without_touching_disk() {
        let resolver = GlobResolver::with_root("/nonexistent-root");
        resolver
            .validate(&[
                "/usr/lib/tmpfiles.d".to_string(),
                "/usr/share/icons/*".to_string(),
            ])
            .expect("patterns are well-formed");
    }
}
