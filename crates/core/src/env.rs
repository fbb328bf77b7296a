// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

pub const LOG_ROOT_VAR: &str = "JOBLOG_ROOT";
pub const MAX_SEGMENT_BYTES_VAR: &str = "JOBLOG_MAX_SEGMENT_BYTES";
pub const RETENTION_DAYS_VAR: &str = "JOBLOG_RETENTION_DAYS";
pub const MIN_LEVEL_VAR: &str = "JOBLOG_MIN_LEVEL";

/// Read a variable, treating unset and empty the same.
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Log root override
pub fn log_root() -> Option<String> {
    var(LOG_ROOT_VAR)
}

/// Rotation threshold override, unparsed
pub fn max_segment_bytes() -> Option<String> {
    var(MAX_SEGMENT_BYTES_VAR)
}

/// Retention age override, unparsed
pub fn retention_days() -> Option<String> {
    var(RETENTION_DAYS_VAR)
}

/// Minimum level override, unparsed
pub fn min_level() -> Option<String> {
    var(MIN_LEVEL_VAR)
}
