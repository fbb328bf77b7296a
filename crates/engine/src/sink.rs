// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single writer of a job run's log files.
//!
//! Lines are appended to the active segment at
//!   `<log_root>/<job>/<job>_<stamp>.log`
//! When a write brings the segment to `max_segment_bytes`, the sink rotates
//! before returning:
//!   1. close the active file
//!   2. rename it to `<active>.<n>`
//!   3. reopen a fresh active file at the original path
//!   4. gzip `<active>.<n>` into `<active>.<n>.gz` (tmp + rename), then delete
//!      the raw file
//!   5. run a retention sweep
//!
//! Finalize is driven by the run's outcome: success rotates and compresses
//! whatever is left, anything else leaves the active file raw for inspection.
//! Maintenance failures never propagate; they are written into the job log
//! when a file is open and always emitted through `tracing`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use joblog_core::{format_line_timestamp, Clock, JobRun, Level, LogConfig, LogSegment, Outcome};
use serde::Serialize;

use crate::compress;
use crate::error::LogError;
use crate::log_paths;
use crate::sweeper::{ActiveSegments, RetentionSweeper};

/// Write-path settings taken from [`LogConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkSettings {
    pub max_segment_bytes: u64,
    pub min_level: Level,
    pub compression_level: u32,
}

impl From<&LogConfig> for SinkSettings {
    fn from(config: &LogConfig) -> Self {
        Self {
            max_segment_bytes: config.max_segment_bytes,
            min_level: config.min_level,
            compression_level: config.compression_level,
        }
    }
}

/// Final state of a closed run.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub run: JobRun,
    /// Every segment the run produced, oldest first.
    pub segments: Vec<LogSegment>,
}

impl RunSummary {
    pub fn outcome(&self) -> Outcome {
        self.run.outcome()
    }

    /// Segments that ended up as `.gz` archives.
    pub fn archives(&self) -> impl Iterator<Item = &LogSegment> {
        self.segments
            .iter()
            .filter(|s| s.state() == joblog_core::SegmentState::Compressed)
    }

    /// Segments left on disk as raw text.
    pub fn raw(&self) -> impl Iterator<Item = &LogSegment> {
        self.segments
            .iter()
            .filter(|s| s.state() == joblog_core::SegmentState::Rotated)
    }
}

pub struct RotatingCompressingSink {
    run: JobRun,
    active_path: PathBuf,
    file: Option<File>,
    active: LogSegment,
    finished: Vec<LogSegment>,
    next_rotation: u32,
    settings: SinkSettings,
    sweeper: RetentionSweeper,
    active_set: ActiveSegments,
    clock: Arc<dyn Clock>,
    summary: Option<RunSummary>,
}

impl RotatingCompressingSink {
    /// Bind a sink to an already-created active file.
    pub(crate) fn new(
        run: JobRun,
        active_path: PathBuf,
        file: File,
        settings: SinkSettings,
        sweeper: RetentionSweeper,
        active_set: ActiveSegments,
        clock: Arc<dyn Clock>,
    ) -> Self {
        active_set.insert(&active_path);
        Self {
            run,
            active: LogSegment::active(active_path.clone()),
            active_path,
            file: Some(file),
            finished: Vec::new(),
            next_rotation: 1,
            settings,
            sweeper,
            active_set,
            clock,
            summary: None,
        }
    }

    pub fn run(&self) -> &JobRun {
        &self.run
    }

    pub fn active_path(&self) -> &Path {
        &self.active_path
    }

    pub fn active_segment(&self) -> &LogSegment {
        &self.active
    }

    pub fn is_closed(&self) -> bool {
        self.summary.is_some()
    }

    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.run.set_outcome(outcome);
    }

    /// Append one formatted line, rotating if the segment is now full.
    pub fn write(&mut self, level: Level, message: &str) {
        if self.is_closed() {
            tracing::warn!(job = %self.run.job_name(), dropped = message, "write to closed job log");
            return;
        }
        if level < self.settings.min_level {
            return;
        }

        let line = self.format_line(level, message);
        if let Err(e) = self.append(&line) {
            tracing::error!(job = %self.run.job_name(), error = %e, "job log write failed");
            return;
        }

        if self.active.size() >= self.settings.max_segment_bytes {
            self.rotate();
        }
    }

    /// Close the run. Idempotent: later calls return the same summary.
    pub fn finalize(&mut self) -> RunSummary {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }

        let outcome = self.run.outcome();
        if let Some(file) = self.file.take() {
            if let Err(e) = file.sync_all() {
                tracing::warn!(path = %self.active_path.display(), error = %e, "failed to sync job log");
            }
        }

        let mut segments = std::mem::take(&mut self.finished);
        if outcome.retains_raw() {
            if outcome == Outcome::Pending {
                tracing::warn!(
                    job = %self.run.job_name(),
                    "job closed without reporting an outcome, keeping raw log"
                );
            }
            self.retain_active();
            segments.push(self.active.clone());
        } else if self.active.size() > 0 {
            match self.rotate_active() {
                Ok(rotated) => {
                    segments.push(self.compress(rotated));
                    self.sweep();
                }
                Err(e) => {
                    self.report(&e);
                    self.file = None;
                    self.retain_active();
                    segments.push(self.active.clone());
                }
            }
        } else {
            // Nothing written since the last rotation.
            match fs::remove_file(&self.active_path) {
                Ok(()) => {
                    if let Err(e) = self.active.mark_deleted() {
                        tracing::warn!(error = %e, "segment state out of sync");
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %self.active_path.display(), error = %e, "failed to remove empty job log");
                    self.retain_active();
                    segments.push(self.active.clone());
                }
            }
        }

        self.active_set.remove(&self.active_path);
        tracing::debug!(
            job = %self.run.job_name(),
            outcome = %outcome,
            segments = segments.len(),
            "job log finalized"
        );

        let summary = RunSummary {
            run: self.run.clone(),
            segments,
        };
        self.summary = Some(summary.clone());
        summary
    }

    fn format_line(&self, level: Level, message: &str) -> String {
        format!(
            "{} | {} | {}\n",
            format_line_timestamp(&self.clock.now()),
            level,
            message
        )
    }

    fn append(&mut self, line: &str) -> Result<(), LogError> {
        let fail = |source| LogError::Write {
            path: self.active_path.clone(),
            source,
        };
        if self.file.is_none() {
            self.file = Some(open_append(&self.active_path).map_err(fail)?);
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(line.as_bytes()).map_err(fail)?;
        }
        self.active.record_write(line.len() as u64);
        Ok(())
    }

    fn rotate(&mut self) {
        let rotated = match self.rotate_active() {
            Ok(rotated) => rotated,
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        match open_append(&self.active_path) {
            Ok(file) => self.file = Some(file),
            Err(e) => {
                // The next write retries the open.
                tracing::warn!(path = %self.active_path.display(), error = %e, "failed to reopen job log");
            }
        }

        let segment = self.compress(rotated);
        self.finished.push(segment);
        self.sweep();
    }

    /// Steps 1 and 2: close and rename the active file. On failure the
    /// original file is reopened so writing continues where it was.
    fn rotate_active(&mut self) -> Result<LogSegment, LogError> {
        drop(self.file.take());

        let n = self.free_rotation_number();
        let rotated_path = log_paths::rotated_path(&self.active_path, n);
        if let Err(source) = fs::rename(&self.active_path, &rotated_path) {
            self.file = open_append(&self.active_path).ok();
            return Err(LogError::Rotation {
                path: self.active_path.clone(),
                source,
            });
        }
        self.next_rotation = n + 1;

        let fresh = LogSegment::active(self.active_path.clone());
        let mut segment = std::mem::replace(&mut self.active, fresh);
        segment.mark_rotated(rotated_path)?;
        tracing::info!(
            path = %segment.path().display(),
            bytes = segment.size(),
            "rotated job log"
        );
        Ok(segment)
    }

    /// Step 4. Returns the segment in its resulting state: compressed, or
    /// still rotated when the raw file had to be kept.
    fn compress(&mut self, mut segment: LogSegment) -> LogSegment {
        let raw = segment.path().to_path_buf();
        let archive = log_paths::archive_path(&raw);

        let size = match compress::gzip_atomic(&raw, &archive, self.settings.compression_level) {
            Ok(size) => size,
            Err(source) => {
                self.report(&LogError::Compression { path: raw, source });
                return segment;
            }
        };

        if let Err(source) = remove_if_present(&raw) {
            // Never leave both copies: keep the raw file, drop the archive.
            if let Err(e) = fs::remove_file(&archive) {
                tracing::warn!(path = %archive.display(), error = %e, "failed to discard archive");
            }
            self.report(&LogError::Compression { path: raw, source });
            return segment;
        }

        match segment.mark_compressed(archive, size) {
            Ok(()) => tracing::info!(path = %segment.path().display(), "compressed job log"),
            Err(e) => tracing::warn!(error = %e, "segment state out of sync"),
        }
        segment
    }

    fn sweep(&mut self) {
        let report = self.sweeper.sweep();
        for failure in &report.failures {
            self.report(failure);
        }
    }

    fn retain_active(&mut self) {
        if let Err(e) = self.active.mark_retained() {
            tracing::warn!(error = %e, "segment state out of sync");
        }
    }

    fn free_rotation_number(&self) -> u32 {
        let mut n = self.next_rotation;
        loop {
            let rotated = log_paths::rotated_path(&self.active_path, n);
            if !rotated.exists() && !log_paths::archive_path(&rotated).exists() {
                return n;
            }
            n += 1;
        }
    }

    /// Report a non-fatal error into the job's own log if a file is open,
    /// and always to `tracing`.
    fn report(&mut self, error: &LogError) {
        tracing::warn!(job = %self.run.job_name(), error = %error, "job log maintenance failed");
        if self.file.is_none() {
            return;
        }
        let level = match error {
            LogError::Retention { .. } => Level::Warning,
            _ => Level::Error,
        };
        let line = self.format_line(level, &error.to_string());
        if let Err(e) = self.append(&line) {
            tracing::error!(job = %self.run.job_name(), error = %e, "job log write failed");
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
