// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so file stamps and line stamps are testable.

use chrono::{DateTime, Local};

/// Local wall-clock time, as written into file names and log lines.
pub type Timestamp = DateTime<Local>;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Timestamp;
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now()
    }
}

/// A clock that only moves when told to.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Debug)]
pub struct FakeClock {
    now: std::sync::Arc<parking_lot::Mutex<Timestamp>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeClock {
    /// Start the clock at the given local wall time.
    ///
    /// Falls back to the current time if the wall time is ambiguous or
    /// skipped by a DST transition.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        use chrono::TimeZone;
        let start = Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .earliest()
            .unwrap_or_else(Local::now);
        Self {
            now: std::sync::Arc::new(parking_lot::Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: std::time::Duration) {
        let mut now = self.now.lock();
        *now += chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for FakeClock {
    fn now(&self) -> Timestamp {
        *self.now.lock()
    }
}
