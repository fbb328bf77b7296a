// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single execution of a job and its reported outcome.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::clock::Timestamp;
use crate::job_name::JobName;

/// Terminal outcome of a job run as reported by its caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No outcome reported yet.
    #[default]
    Pending,
    Success,
    Failure,
}

impl Outcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    /// Whether the final segment must be kept uncompressed.
    ///
    /// Only a reported success releases the raw log; an unreported outcome
    /// is treated like a failure.
    pub fn retains_raw(&self) -> bool {
        !matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pending => write!(f, "pending"),
            Outcome::Success => write!(f, "success"),
            Outcome::Failure => write!(f, "failure"),
        }
    }
}

/// One execution of a named job.
#[derive(Clone, Debug, Serialize)]
pub struct JobRun {
    job_name: JobName,
    started_at: Timestamp,
    log_dir: PathBuf,
    outcome: Outcome,
}

impl JobRun {
    pub fn new(job_name: JobName, started_at: Timestamp, log_dir: PathBuf) -> Self {
        Self {
            job_name,
            started_at,
            log_dir,
            outcome: Outcome::Pending,
        }
    }

    pub fn job_name(&self) -> &JobName {
        &self.job_name
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Record the terminal outcome. The last call wins.
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

#[cfg(test)]
#[path = "job_run_tests.rs"]
mod tests;
