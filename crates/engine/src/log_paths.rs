// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared path builders for job log files.
//!
//! Used by the sink (writer), the sweeper and the CLI (readers) to agree on
//! the layout of the log tree:
//!   `<log_root>/<job>/<job>_<YYYYMMDD_HHMMSS>.log`      active or retained raw log
//!   `<log_root>/<job>/<job>_<YYYYMMDD_HHMMSS>.log.<n>`  n-th rotated segment
//!   `<log_root>/<job>/<job>_<YYYYMMDD_HHMMSS>.log.<n>.gz`  its archive
//!   `<log_root>/<job>/<job>_<YYYYMMDD_HHMMSS>.log.<n>.gz.tmp`  archive being written

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use joblog_core::JobName;

/// Build the directory holding every log file of a job.
///
/// Structure: `{log_root}/{job}`
pub fn job_log_dir(log_root: &Path, job: &JobName) -> PathBuf {
    log_root.join(job.as_str())
}

/// Build the path of a run's active log file.
///
/// Structure: `{log_root}/{job}/{job}_{stamp}.log`, or
/// `{job}_{stamp}_{seq}.log` when `seq > 0` to separate runs started in the
/// same second.
pub fn active_log_path(log_root: &Path, job: &JobName, stamp: &str, seq: u32) -> PathBuf {
    let file_name = if seq == 0 {
        format!("{}_{}.log", job, stamp)
    } else {
        format!("{}_{}_{}.log", job, stamp, seq)
    };
    job_log_dir(log_root, job).join(file_name)
}

/// Build the path of the n-th rotated segment: `{active}.{n}`.
pub fn rotated_path(active: &Path, n: u32) -> PathBuf {
    with_suffix(active, &format!(".{}", n))
}

/// Build the archive path for a rotated segment: `{rotated}.gz`.
pub fn archive_path(rotated: &Path) -> PathBuf {
    with_suffix(rotated, ".gz")
}

/// Build the in-progress path for an archive: `{archive}.tmp`.
pub fn partial_archive_path(archive: &Path) -> PathBuf {
    with_suffix(archive, ".tmp")
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(suffix);
    PathBuf::from(s)
}

/// What a file in the log tree is, judged by its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFileKind {
    /// A bare `.log` file: being written, or retained after a failed run.
    Log,
    /// A raw rotated segment `.log.<n>`.
    Rotated,
    /// A gzip archive `.gz`.
    Compressed,
    /// An archive whose write never completed `.gz.tmp`.
    PartialArchive,
}

impl std::fmt::Display for LogFileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFileKind::Log => write!(f, "log"),
            LogFileKind::Rotated => write!(f, "rotated"),
            LogFileKind::Compressed => write!(f, "compressed"),
            LogFileKind::PartialArchive => write!(f, "partial"),
        }
    }
}

/// Classify a file by name. Returns `None` for files the sink never writes.
pub fn classify(path: &Path) -> Option<LogFileKind> {
    let name = path.file_name()?.to_str()?;
    if name.ends_with(".gz.tmp") {
        return Some(LogFileKind::PartialArchive);
    }
    if name.ends_with(".gz") {
        return Some(LogFileKind::Compressed);
    }
    if name.ends_with(".log") {
        return Some(LogFileKind::Log);
    }
    let (stem, n) = name.rsplit_once('.')?;
    if stem.ends_with(".log") && !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) {
        return Some(LogFileKind::Rotated);
    }
    None
}

/// For an archive `X.gz`, the raw file `X` it was compressed from.
pub fn archive_source(archive: &Path) -> Option<PathBuf> {
    let name = archive.file_name()?.to_str()?;
    let source = name.strip_suffix(".gz")?;
    Some(archive.with_file_name(source))
}

#[cfg(test)]
#[path = "log_paths_tests.rs"]
mod tests;
