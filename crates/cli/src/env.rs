// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.
//!
//! Log configuration variables live in `joblog_core::env`.

pub const LOG_FILTER_VAR: &str = "JOBLOG_LOG";

/// Diagnostic filter directive for the process's own tracing output.
pub fn log_filter() -> Option<String> {
    std::env::var(LOG_FILTER_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
}
