// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem-safe job names.

use std::fmt;

/// Name used when a job name sanitizes to nothing.
pub const DEFAULT_JOB_NAME: &str = "default";

/// A job name reduced to `[A-Za-z0-9_-]`.
///
/// The name becomes both a directory and a file-name prefix under the log
/// root, so it can never contain separators, dots, or whitespace. Construct
/// with [`JobName::sanitize`]; there is no unchecked constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct JobName(String);

impl JobName {
    /// Strip every character outside `[A-Za-z0-9_-]`.
    ///
    /// An input with no allowed characters yields [`DEFAULT_JOB_NAME`].
    pub fn sanitize(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        if cleaned.is_empty() {
            Self(DEFAULT_JOB_NAME.to_string())
        } else {
            Self(cleaned)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_JOB_NAME
    }
}

impl std::ops::Deref for JobName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JobName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "job_name_tests.rs"]
mod tests;
