// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `joblog sweep` - Recover interrupted compressions and apply retention

use std::path::PathBuf;

use anyhow::Result;
use joblog_core::LogConfig;
use joblog_engine::{ActiveSegments, RetentionSweeper, SweepReport};
use serde::Serialize;

use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize)]
struct SweepOutput {
    root: PathBuf,
    retention_days: u64,
    removed: Vec<PathBuf>,
    failures: Vec<String>,
}

impl SweepOutput {
    fn new(config: &LogConfig, report: SweepReport) -> Self {
        Self {
            root: config.log_root.clone(),
            retention_days: config.retention_days,
            removed: report.removed,
            failures: report.failures.iter().map(|e| e.to_string()).collect(),
        }
    }
}

pub fn handle(config: &LogConfig, format: OutputFormat) -> Result<()> {
    let sweeper = RetentionSweeper::new(
        config.log_root.clone(),
        config.retention(),
        ActiveSegments::default(),
    );
    let output = SweepOutput::new(config, sweeper.startup());

    match format {
        OutputFormat::Text => {
            for path in &output.removed {
                println!("Removed {}", path.display());
            }
            for failure in &output.failures {
                eprintln!("Failed: {}", failure);
            }
            println!("{} file(s) removed", output.removed.len());
        }
        OutputFormat::Json => print_json(&output)?,
    }

    if output.failures.is_empty() {
        Ok(())
    } else {
        Err(ExitError::new(
            1,
            format!("{} file(s) could not be removed", output.failures.len()),
        )
        .into())
    }
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;
