// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Job log lifecycle: per-run files, rotation, compression, retention

pub mod compress;
pub mod directory;
mod error;
mod factory;
pub mod log_paths;
mod logger;
mod sink;
pub mod sweeper;
#[cfg(test)]
mod test_helpers;
mod wrapper;

pub use error::LogError;
pub use factory::JobLoggerFactory;
pub use log_paths::LogFileKind;
pub use logger::{Control, Logger};
pub use sink::{RotatingCompressingSink, RunSummary, SinkSettings};
pub use sweeper::{ActiveSegments, RetentionSweeper, SweepReport};
pub use wrapper::run_job;
