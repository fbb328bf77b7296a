// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared timestamp and duration formatting.

use std::time::Duration;

use crate::clock::Timestamp;

/// Format a timestamp for the head of a log line: `2026-01-30 08:14:09`.
pub fn format_line_timestamp(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a timestamp for a log file name: `20260130_081409`.
pub fn format_file_stamp(ts: &Timestamp) -> String {
    ts.format("%Y%m%d_%H%M%S").to_string()
}

/// Format a run duration as seconds with two decimals: `"1.25"`.
pub fn format_elapsed_secs(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

/// Format seconds as a short human-readable age: `"5s"`, `"2m"`, `"1h30m"`, `"3d"`.
///
/// For the hours range, minutes are included when non-zero (e.g. `"1h"` vs `"1h5m"`).
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        if m > 0 {
            format!("{}h{}m", h, m)
        } else {
            format!("{}h", h)
        }
    } else {
        format!("{}d", secs / 86400)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
