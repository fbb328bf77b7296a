// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-facing handles for one job run.
//!
//! [`Logger`] is cheap to clone and can be handed to any thread; every write
//! goes through the sink's mutex, so a rotation never interleaves with
//! another thread's line. [`Control`] is the single owner of the run's end:
//! it records the outcome and finalizes the sink on `close()` or on drop.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use joblog_core::{JobName, Level, Outcome};
use parking_lot::Mutex;

use crate::sink::{RotatingCompressingSink, RunSummary};

pub(crate) type SharedSink = Arc<Mutex<RotatingCompressingSink>>;

#[derive(Clone)]
pub struct Logger {
    job_name: JobName,
    sink: SharedSink,
}

impl Logger {
    pub(crate) fn new(job_name: JobName, sink: SharedSink) -> Self {
        Self { job_name, sink }
    }

    /// Append one line at `level`; may rotate the active segment.
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        self.sink.lock().write(level, message.as_ref());
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(Level::Critical, message);
    }

    pub fn job_name(&self) -> &JobName {
        &self.job_name
    }

    /// Path of the file currently being written.
    pub fn path(&self) -> PathBuf {
        self.sink.lock().active_path().to_path_buf()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("job_name", &self.job_name)
            .finish_non_exhaustive()
    }
}

/// End-of-run control for a job's log.
///
/// Dropping a `Control` without calling [`Control::close`] finalizes the run
/// anyway, so the log is settled on every exit path.
pub struct Control {
    sink: SharedSink,
    closed: bool,
}

impl Control {
    pub(crate) fn new(sink: SharedSink) -> Self {
        Self {
            sink,
            closed: false,
        }
    }

    /// Record the run's outcome. The last call wins.
    pub fn set_outcome(&self, success: bool) {
        self.sink.lock().set_outcome(Outcome::from_success(success));
    }

    pub fn outcome(&self) -> Outcome {
        self.sink.lock().run().outcome()
    }

    /// Finalize the log: compress on success, keep raw otherwise.
    pub fn close(mut self) -> RunSummary {
        self.closed = true;
        self.sink.lock().finalize()
    }
}

impl Drop for Control {
    fn drop(&mut self) {
        if !self.closed {
            self.sink.lock().finalize();
        }
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
