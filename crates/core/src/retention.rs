// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Age-based retention for the log tree.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

const SECS_PER_DAY: u64 = 86_400;

/// Delete log files whose modification time is older than `max_age_days`.
///
/// `max_age_days == 0` disables age-based deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    pub max_age_days: u64,
}

impl RetentionPolicy {
    pub fn days(max_age_days: u64) -> Self {
        Self { max_age_days }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_age_days > 0
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_days.saturating_mul(SECS_PER_DAY))
    }

    /// Whether a file last modified at `modified` has expired as of `now`.
    ///
    /// Expired means strictly older than `max_age`. Files stamped in the
    /// future never expire.
    pub fn is_expired(&self, modified: SystemTime, now: SystemTime) -> bool {
        if !self.is_enabled() {
            return false;
        }
        match now.duration_since(modified) {
            Ok(age) => age > self.max_age(),
            Err(_) => false,
        }
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::days(30)
    }
}

#[cfg(test)]
#[path = "retention_tests.rs"]
mod tests;
