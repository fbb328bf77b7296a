// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the log lifecycle

use std::io;
use std::path::PathBuf;

use joblog_core::SegmentError;
use thiserror::Error;

/// Errors raised while creating, rotating, compressing or sweeping job logs.
///
/// Only [`LogError::Directory`] is fatal: it is returned from logger creation
/// so a job never starts believing it is logging when it is not. Every other
/// variant is reported into the job log (or `tracing`) and the job continues.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("log directory {path} is not usable: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to rotate {path}: {source}")]
    Rotation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to compress {path}: {source}")]
    Compression {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to remove expired {path}: {source}")]
    Retention {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Segment(#[from] SegmentError),
}

impl LogError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, LogError::Directory { .. })
    }
}
