// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Construction of per-run loggers.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use joblog_core::{format_file_stamp, Clock, JobName, JobRun, LogConfig, SystemClock};
use parking_lot::Mutex;

use crate::directory;
use crate::error::LogError;
use crate::log_paths;
use crate::logger::{Control, Logger};
use crate::sink::{RotatingCompressingSink, SinkSettings};
use crate::sweeper::{ActiveSegments, RetentionSweeper, SweepReport};

/// Runs started in the same second get `_1`, `_2`, ... up to this many.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Hands out a [`Logger`]/[`Control`] pair per job run.
///
/// Building a factory runs one recovery-and-retention pass over the log
/// root. Every sink the factory creates shares its active-segment set, so
/// sweeps triggered by one run never delete another run's live file.
pub struct JobLoggerFactory {
    config: LogConfig,
    clock: Arc<dyn Clock>,
    active: ActiveSegments,
    sweeper: RetentionSweeper,
}

impl JobLoggerFactory {
    pub fn new(config: LogConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: LogConfig, clock: Arc<dyn Clock>) -> Self {
        let active = ActiveSegments::default();
        let sweeper = RetentionSweeper::new(
            config.log_root.clone(),
            config.retention(),
            active.clone(),
        );

        let report = sweeper.startup();
        log_startup_sweep(&config.log_root, &report);

        Self {
            config,
            clock,
            active,
            sweeper,
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn sweeper(&self) -> &RetentionSweeper {
        &self.sweeper
    }

    /// Number of runs created by this factory that are not yet closed.
    pub fn open_runs(&self) -> usize {
        self.active.len()
    }

    /// Create the log destination for a new run of `job_name`.
    ///
    /// Fails with [`LogError::Directory`] if the job's directory cannot be
    /// created and proven writable, or no log file can be created in it.
    pub fn create(&self, job_name: &str) -> Result<(Logger, Control), LogError> {
        let name = JobName::sanitize(job_name);
        let started_at = self.clock.now();
        let dir = log_paths::job_log_dir(&self.config.log_root, &name);

        directory::ensure_writable(&dir)?;
        let stamp = format_file_stamp(&started_at);
        let (path, file) = open_unique(&self.config.log_root, &name, &stamp)?;

        tracing::debug!(job = %name, path = %path.display(), "created job log");

        let run = JobRun::new(name.clone(), started_at, dir);
        let sink = RotatingCompressingSink::new(
            run,
            path,
            file,
            SinkSettings::from(&self.config),
            self.sweeper.clone(),
            self.active.clone(),
            Arc::clone(&self.clock),
        );
        let sink = Arc::new(Mutex::new(sink));

        Ok((Logger::new(name, Arc::clone(&sink)), Control::new(sink)))
    }
}

/// Create the run's file with create-new semantics, adding a counter when a
/// run of the same job already claimed this second's name.
fn open_unique(log_root: &Path, name: &JobName, stamp: &str) -> Result<(PathBuf, File), LogError> {
    for seq in 0..MAX_NAME_ATTEMPTS {
        let path = log_paths::active_log_path(log_root, name, stamp, seq);
        match OpenOptions::new().append(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(source) => return Err(LogError::Directory { path, source }),
        }
    }
    Err(LogError::Directory {
        path: log_paths::job_log_dir(log_root, name),
        source: io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free log file name for {name} at {stamp}"),
        ),
    })
}

fn log_startup_sweep(root: &Path, report: &SweepReport) {
    if report.removed.is_empty() && report.failures.is_empty() {
        return;
    }
    tracing::info!(
        root = %root.display(),
        removed = report.removed.len(),
        failed = report.failures.len(),
        "startup log sweep"
    );
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
