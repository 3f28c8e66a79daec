//! # Revision History
//!
//! Each entry shows when its data file last changed. That date comes from
//! version control, behind the [`RevisionHistory`] trait so builds and tests
//! can run without a repository.

use std::path::{Path, PathBuf};
use std::process::Command;

use nws_core::Timestamp;
use thiserror::Error;

/// Failure looking up revision history. Always fatal to a build.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// The history tool could not be started.
    #[error("cannot run git for '{path}': {source}")]
    Spawn {
        /// File being looked up.
        path: PathBuf,
        /// Spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The history tool exited unsuccessfully.
    #[error("git log failed for '{path}' ({status}): {stderr}")]
    Failed {
        /// File being looked up.
        path: PathBuf,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The history tool printed something that is not a timestamp.
    #[error("unexpected git log output for '{path}': {reason}")]
    Parse {
        /// File being looked up.
        path: PathBuf,
        /// Parse failure.
        reason: String,
    },
}

/// Source of last-modified times for entry files.
pub trait RevisionHistory {
    /// Last-modified time of `path` (relative to the site root).
    ///
    /// `Ok(None)` means the file has no recorded history yet.
    fn last_modified(&self, path: &Path) -> Result<Option<Timestamp>, HistoryError>;
}

/// Reads commit times from `git log` in the site root.
#[derive(Debug, Clone)]
pub struct GitHistory {
    root: PathBuf,
}

impl GitHistory {
    /// History for the repository containing `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RevisionHistory for GitHistory {
    fn last_modified(&self, path: &Path) -> Result<Option<Timestamp>, HistoryError> {
        let output = Command::new("git")
            .arg("log")
            .arg("-1")
            .arg("--format=%cI")
            .arg("--")
            .arg(path)
            .current_dir(&self.root)
            .output()
            .map_err(|source| HistoryError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(HistoryError::Failed {
                path: path.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if stdout.is_empty() {
            tracing::debug!(path = %path.display(), "no commits touch entry file");
            return Ok(None);
        }

        Timestamp::parse_rfc3339(stdout)
            .map(Some)
            .map_err(|e| HistoryError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

/// History that knows nothing. Every lookup returns `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl RevisionHistory for NoHistory {
    fn last_modified(&self, _path: &Path) -> Result<Option<Timestamp>, HistoryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history_returns_none() {
        assert_eq!(NoHistory.last_modified(Path::new("entries/acme.yml")).unwrap(), None);
    }

    #[test]
    fn test_git_in_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let history = GitHistory::new(dir.path().join("missing-subdir"));
        assert!(history.last_modified(Path::new("entries/acme.yml")).is_err());
    }
}
