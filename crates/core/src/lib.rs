// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! joblog-core: data and policy types for per-run job logs

pub mod clock;
pub mod config;
pub mod env;
pub mod job_name;
pub mod job_run;
pub mod level;
pub mod retention;
pub mod segment;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use clock::{Clock, SystemClock, Timestamp};
pub use config::{ConfigError, LogConfig};
pub use job_name::{JobName, DEFAULT_JOB_NAME};
pub use job_run::{JobRun, Outcome};
pub use level::{Level, ParseLevelError};
pub use retention::RetentionPolicy;
pub use segment::{LogSegment, SegmentError, SegmentState};
pub use time_fmt::{format_elapsed, format_elapsed_secs, format_file_stamp, format_line_timestamp};
