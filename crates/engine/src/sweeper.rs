// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Age-based cleanup of the log tree.
//!
//! The sweeper is not a background task: it runs to completion when the
//! factory is built and after every rotation. A file that cannot be removed
//! is recorded in the [`SweepReport`] and the scan moves on.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use joblog_core::RetentionPolicy;
use parking_lot::Mutex;

use crate::error::LogError;
use crate::log_paths::{self, LogFileKind};

/// Paths of segments currently being written, shared between the factory,
/// its sinks and the sweeper so a sweep never removes a live file.
#[derive(Clone, Debug, Default)]
pub struct ActiveSegments(Arc<Mutex<HashSet<PathBuf>>>);

impl ActiveSegments {
    pub fn insert(&self, path: &Path) {
        self.0.lock().insert(path.to_path_buf());
    }

    pub fn remove(&self, path: &Path) {
        self.0.lock().remove(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.lock().contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

/// Outcome of one pass over the log tree.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Files examined.
    pub scanned: usize,
    /// Files deleted.
    pub removed: Vec<PathBuf>,
    /// Files that should have been deleted but could not be.
    pub failures: Vec<LogError>,
}

impl SweepReport {
    fn merge(&mut self, other: SweepReport) {
        self.scanned += other.scanned;
        self.removed.extend(other.removed);
        self.failures.extend(other.failures);
    }
}

#[derive(Clone, Debug)]
pub struct RetentionSweeper {
    root: PathBuf,
    policy: RetentionPolicy,
    active: ActiveSegments,
}

impl RetentionSweeper {
    pub fn new(root: PathBuf, policy: RetentionPolicy, active: ActiveSegments) -> Self {
        Self {
            root,
            policy,
            active,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Delete every expired file under the root as of now.
    pub fn sweep(&self) -> SweepReport {
        self.sweep_at(SystemTime::now())
    }

    /// Delete every file under the root whose mtime is older than the policy
    /// allows at `now`, whatever its compression state. Active segments are
    /// skipped.
    pub fn sweep_at(&self, now: SystemTime) -> SweepReport {
        let mut report = SweepReport::default();
        if !self.policy.is_enabled() {
            return report;
        }

        for path in list_files(&self.root) {
            report.scanned += 1;
            if self.active.contains(&path) {
                continue;
            }
            let modified = match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot read file age");
                    continue;
                }
            };
            if !self.policy.is_expired(modified, now) {
                continue;
            }
            match remove_expired(&path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "deleted expired log file");
                    report.removed.push(path);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "retention sweep could not delete file");
                    report.failures.push(e);
                }
            }
        }
        report
    }

    /// Finish compressions a crashed process left half done.
    ///
    /// A rotated segment whose `.gz` exists next to it was fully archived
    /// (the archive only appears through an atomic rename), so the raw copy
    /// is removed.
    pub fn recover_interrupted(&self) -> SweepReport {
        let mut report = SweepReport::default();

        for path in list_files(&self.root) {
            report.scanned += 1;
            if log_paths::classify(&path) != Some(LogFileKind::Compressed) {
                continue;
            }
            let Some(raw) = log_paths::archive_source(&path) else {
                continue;
            };
            if log_paths::classify(&raw) != Some(LogFileKind::Rotated)
                || !raw.is_file()
                || self.active.contains(&raw)
            {
                continue;
            }
            match remove_expired(&raw) {
                Ok(()) => {
                    tracing::info!(path = %raw.display(), "removed raw segment left beside its archive");
                    report.removed.push(raw);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "could not remove archived raw segment");
                    report.failures.push(e);
                }
            }
        }
        report
    }

    /// Recovery followed by an age sweep, as run at startup.
    pub fn startup(&self) -> SweepReport {
        let mut report = self.recover_interrupted();
        report.merge(self.sweep());
        report
    }
}

/// Remove one file, treating "already gone" as success.
pub(crate) fn remove_expired(path: &Path) -> Result<(), LogError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(LogError::Retention {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Every regular file under `root`, depth first. Unreadable directories are
/// logged and skipped.
fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot scan log directory");
                continue;
            }
        };
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }
    }
    files.sort();
    files
}

#[cfg(test)]
#[path = "sweeper_tests.rs"]
mod tests;
