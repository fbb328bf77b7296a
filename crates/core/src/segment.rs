// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Physical log files and their lifecycle state.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Lifecycle state of one log file.
///
/// ```text
/// active ──> rotated ──> compressed ──> deleted
///    │          └─────────────────────────^
///    └────────────────────────────────────^
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentState {
    /// Currently being written.
    Active,
    /// Closed and kept as raw text, either awaiting compression or retained.
    Rotated,
    /// Replaced by a `.gz` archive.
    Compressed,
    /// Removed from disk.
    Deleted,
}

impl fmt::Display for SegmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentState::Active => write!(f, "active"),
            SegmentState::Rotated => write!(f, "rotated"),
            SegmentState::Compressed => write!(f, "compressed"),
            SegmentState::Deleted => write!(f, "deleted"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid segment transition for {path}: {from} -> {to}")]
pub struct SegmentError {
    pub path: PathBuf,
    pub from: SegmentState,
    pub to: SegmentState,
}

/// One physical log file belonging to a job run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogSegment {
    path: PathBuf,
    size: u64,
    state: SegmentState,
}

impl LogSegment {
    /// A freshly opened, empty active segment.
    pub fn active(path: PathBuf) -> Self {
        Self {
            path,
            size: 0,
            state: SegmentState::Active,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn state(&self) -> SegmentState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SegmentState::Active
    }

    /// Account for bytes appended to the active file.
    pub fn record_write(&mut self, bytes: u64) {
        self.size += bytes;
    }

    /// The active file was renamed to `rotated_path`.
    pub fn mark_rotated(&mut self, rotated_path: PathBuf) -> Result<(), SegmentError> {
        self.transition(SegmentState::Active, SegmentState::Rotated)?;
        self.path = rotated_path;
        Ok(())
    }

    /// The active file was closed in place and kept raw.
    pub fn mark_retained(&mut self) -> Result<(), SegmentError> {
        self.transition(SegmentState::Active, SegmentState::Rotated)
    }

    /// The rotated file was replaced by the archive at `archive_path`.
    pub fn mark_compressed(&mut self, archive_path: PathBuf, archive_size: u64) -> Result<(), SegmentError> {
        self.transition(SegmentState::Rotated, SegmentState::Compressed)?;
        self.path = archive_path;
        self.size = archive_size;
        Ok(())
    }

    /// The file at the current path was removed.
    pub fn mark_deleted(&mut self) -> Result<(), SegmentError> {
        if self.state == SegmentState::Deleted {
            return Err(self.invalid(SegmentState::Deleted));
        }
        self.state = SegmentState::Deleted;
        Ok(())
    }

    fn transition(&mut self, from: SegmentState, to: SegmentState) -> Result<(), SegmentError> {
        if self.state != from {
            return Err(self.invalid(to));
        }
        self.state = to;
        Ok(())
    }

    fn invalid(&self, to: SegmentState) -> SegmentError {
        SegmentError {
            path: self.path.clone(),
            from: self.state,
            to,
        }
    }
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
