// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log directory preparation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::LogError;

/// Create `dir` (and its parents) and prove it is writable.
///
/// Writability is checked by actually creating, writing and deleting a probe
/// file; permission bits alone say nothing about read-only mounts, ACLs or a
/// full disk. Every call gets its own probe, so concurrent checks of the same
/// directory never see each other's file.
pub fn ensure_writable(dir: &Path) -> Result<(), LogError> {
    let fail = |source| LogError::Directory {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(fail)?;

    let probe = probe_path(dir);
    let written = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&probe)
        .and_then(|mut file| file.write_all(b"probe"));
    let removed = fs::remove_file(&probe);
    written.map_err(fail)?;
    removed.map_err(fail)?;
    Ok(())
}

fn probe_path(dir: &Path) -> PathBuf {
    static NEXT_PROBE: AtomicU64 = AtomicU64::new(0);
    let seq = NEXT_PROBE.fetch_add(1, Ordering::Relaxed);
    dir.join(format!(".joblog-probe-{}-{seq}", std::process::id()))
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
