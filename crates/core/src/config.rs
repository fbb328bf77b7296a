// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log lifecycle configuration.
//!
//! Resolved from defaults, then an optional TOML file, then `JOBLOG_*`
//! environment variables. Callers may override fields afterwards (the CLI
//! does so for its flags).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::env;
use crate::level::Level;
use crate::retention::RetentionPolicy;

/// Default rotation threshold (10 MiB).
pub const DEFAULT_MAX_SEGMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Default retention age in days.
pub const DEFAULT_RETENTION_DAYS: u64 = 30;

/// Default gzip level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Root of the log tree; each job gets a subdirectory.
    pub log_root: PathBuf,
    /// Rotate once the active segment reaches this many bytes.
    pub max_segment_bytes: u64,
    /// Delete files older than this many days (0 disables).
    pub retention_days: u64,
    /// Lines below this level are discarded.
    pub min_level: Level,
    /// gzip level, 0-9.
    pub compression_level: u32,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_root: PathBuf::from("logs"),
            max_segment_bytes: DEFAULT_MAX_SEGMENT_BYTES,
            retention_days: DEFAULT_RETENTION_DAYS,
            min_level: Level::Info,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl LogConfig {
    /// Load defaults, overlay `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.with_env()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `JOBLOG_*` overrides.
    pub fn with_env(mut self) -> Result<Self, ConfigError> {
        if let Some(root) = env::log_root() {
            self.log_root = PathBuf::from(root);
        }
        if let Some(raw) = env::max_segment_bytes() {
            self.max_segment_bytes = parse_env(env::MAX_SEGMENT_BYTES_VAR, &raw)?;
        }
        if let Some(raw) = env::retention_days() {
            self.retention_days = parse_env(env::RETENTION_DAYS_VAR, &raw)?;
        }
        if let Some(raw) = env::min_level() {
            self.min_level = parse_env(env::MIN_LEVEL_VAR, &raw)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn retention(&self) -> RetentionPolicy {
        RetentionPolicy::days(self.retention_days)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_segment_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_segment_bytes must be greater than zero".to_string(),
            ));
        }
        if self.compression_level > 9 {
            return Err(ConfigError::Invalid(format!(
                "compression_level must be 0-9, got {}",
                self.compression_level
            )));
        }
        if self.log_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("log_root must not be empty".to_string()));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: raw.to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
