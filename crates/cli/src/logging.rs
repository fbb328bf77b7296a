// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-level diagnostics on stderr.
//!
//! Job output goes to the job's own log file. This subscriber carries the
//! subsystem's events (rotations, sweeps, maintenance failures) and is
//! filtered by `JOBLOG_LOG`, defaulting to warnings and above.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter = match crate::env::log_filter() {
        Some(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|e| {
            eprintln!("warning: ignoring invalid JOBLOG_LOG '{directive}': {e}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::new(DEFAULT_FILTER),
    };

    // A subscriber may already be installed (tests).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
