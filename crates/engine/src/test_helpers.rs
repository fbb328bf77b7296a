// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use joblog_core::{FakeClock, LogConfig};

use crate::JobLoggerFactory;

/// Bytes in `"2026-01-30 08:14:09 | INFO | line N\n"` for a single-digit N.
pub(crate) const LINE: u64 = 36;

pub(crate) fn config(root: &Path, max_segment_bytes: u64) -> LogConfig {
    LogConfig {
        log_root: root.to_path_buf(),
        max_segment_bytes,
        ..LogConfig::default()
    }
}

/// A factory over `root` whose clock is pinned at 2026-01-30 08:14:09.
pub(crate) fn factory(root: &Path, max_segment_bytes: u64) -> (JobLoggerFactory, FakeClock) {
    let clock = FakeClock::at(2026, 1, 30, 8, 14, 9);
    let factory =
        JobLoggerFactory::with_clock(config(root, max_segment_bytes), Arc::new(clock.clone()));
    (factory, clock)
}

/// Sorted file names in `dir`.
pub(crate) fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub(crate) fn gunzip(path: &Path) -> String {
    let mut decoder = flate2::read::GzDecoder::new(File::open(path).unwrap());
    let mut out = String::new();
    decoder.read_to_string(&mut out).unwrap();
    out
}

/// No `X` exists next to an `X.gz`.
pub(crate) fn assert_no_raw_archive_pairs(dir: &Path) {
    let names = files_in(dir);
    for name in &names {
        if let Some(raw) = name.strip_suffix(".gz") {
            assert!(
                !names.iter().any(|n| n == raw),
                "{raw} and {name} both present in {names:?}"
            );
        }
    }
}
