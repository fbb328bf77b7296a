// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `joblog list [job]` - List files in the log tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use clap::Args;
use joblog_core::{JobName, LogConfig};
use joblog_engine::log_paths::{self, LogFileKind};
use serde::Serialize;

use crate::output::{age_secs, format_bytes, format_time_ago, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct ListArgs {
    /// Only list this job's files
    pub job: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogEntry {
    pub job: String,
    pub file: String,
    pub path: PathBuf,
    pub state: LogFileKind,
    pub size: u64,
    pub age_secs: u64,
    #[serde(skip)]
    pub modified: SystemTime,
}

pub fn handle(args: ListArgs, config: &LogConfig, format: OutputFormat) -> Result<()> {
    let job = args.job.as_deref().map(JobName::sanitize);
    let now = SystemTime::now();
    let entries = collect(&config.log_root, job.as_ref(), now)?;

    match format {
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No job logs found");
                return Ok(());
            }
            let mut table = Table::new(vec![
                Column::left("JOB").with_max(24),
                Column::left("STATE"),
                Column::right("SIZE"),
                Column::right("AGE"),
                Column::left("FILE"),
            ]);
            for entry in &entries {
                table.row(vec![
                    entry.job.clone(),
                    entry.state.to_string(),
                    format_bytes(entry.size),
                    format_time_ago(entry.modified, now),
                    entry.file.clone(),
                ]);
            }
            table.render(&mut io::stdout());
        }
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}

/// Every recognised log file under `root`, sorted by job then file name.
/// A missing root or job directory yields no entries.
pub(crate) fn collect(
    root: &Path,
    job: Option<&JobName>,
    now: SystemTime,
) -> Result<Vec<LogEntry>> {
    let job_dirs = match job {
        Some(job) => vec![log_paths::job_log_dir(root, job)],
        None => match read_dir_sorted(root)? {
            Some(paths) => paths.into_iter().filter(|p| p.is_dir()).collect(),
            None => Vec::new(),
        },
    };

    let mut entries = Vec::new();
    for dir in job_dirs {
        let Some(job) = dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        for path in read_dir_sorted(&dir)?.unwrap_or_default() {
            let Some(state) = log_paths::classify(&path) else {
                continue;
            };
            let metadata = match fs::metadata(&path) {
                Ok(m) if m.is_file() => m,
                Ok(_) => continue,
                // Rotated or swept since the directory was read.
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to stat {}", path.display()))
                }
            };
            let modified = metadata.modified().unwrap_or(now);
            entries.push(LogEntry {
                job: job.clone(),
                file: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                state,
                size: metadata.len(),
                age_secs: age_secs(modified, now),
                modified,
                path,
            });
        }
    }
    Ok(entries)
}

fn read_dir_sorted(dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", dir.display())),
    };
    let mut paths = entries
        .map(|e| e.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read {}", dir.display()))?;
    paths.sort();
    Ok(Some(paths))
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
