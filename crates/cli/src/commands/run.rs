// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `joblog run <job> -- <command> [args]` - Run a command as a logged job

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};

use anyhow::Result;
use clap::Args;
use joblog_core::{Level, LogConfig, Outcome};
use joblog_engine::{run_job, JobLoggerFactory, Logger, RunSummary};
use thiserror::Error;

use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

/// Exit code when the command could not be started, as shells use.
const SPAWN_FAILED_CODE: i32 = 127;

#[derive(Args)]
pub struct RunArgs {
    /// Job name; becomes the log directory name
    pub job: String,

    /// Command and arguments, after `--`
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no command given")]
    Empty,
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed waiting for command: {0}")]
    Wait(#[source] std::io::Error),
    #[error("command exited with status {0}")]
    Exit(i32),
    #[error("command terminated by signal")]
    Killed,
}

impl CommandError {
    fn exit_code(&self) -> i32 {
        match self {
            CommandError::Spawn { .. } => SPAWN_FAILED_CODE,
            CommandError::Exit(code) => *code,
            CommandError::Empty | CommandError::Wait(_) | CommandError::Killed => 1,
        }
    }
}

pub fn handle(args: RunArgs, config: LogConfig, format: OutputFormat) -> Result<()> {
    let factory = JobLoggerFactory::new(config);
    let (logger, control) = factory.create(&args.job)?;

    let result = run_job(logger.job_name(), &logger, &control, |log| {
        run_command(&args.command, log)
    });
    let summary = control.close();
    print_summary(&summary, format)?;

    match result {
        Ok(()) => Ok(()),
        Err(e @ CommandError::Exit(_)) => Err(ExitError::silent(e.exit_code()).into()),
        Err(e) => Err(ExitError::new(e.exit_code(), e.to_string()).into()),
    }
}

/// Run `command`, logging each stdout line at INFO and each stderr line at
/// ERROR. Succeeds only on exit status 0.
pub(crate) fn run_command(command: &[String], logger: &Logger) -> Result<(), CommandError> {
    let (program, args) = command.split_first().ok_or(CommandError::Empty)?;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| CommandError::Spawn {
            program: program.clone(),
            source,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    std::thread::scope(|s| {
        if let Some(stderr) = stderr {
            s.spawn(move || forward_lines(stderr, logger, Level::Error));
        }
        if let Some(stdout) = stdout {
            forward_lines(stdout, logger, Level::Info);
        }
    });

    let status = child.wait().map_err(CommandError::Wait)?;
    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(CommandError::Exit(code)),
        None => Err(CommandError::Killed),
    }
}

/// Copy `reader` into the job log line by line. Invalid UTF-8 is replaced.
pub(crate) fn forward_lines(reader: impl Read, logger: &Logger, level: Level) {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                logger.log(level, line.trim_end_matches(['\n', '\r']));
            }
            Err(e) => {
                tracing::warn!(job = %logger.job_name(), error = %e, "failed to read command output");
                break;
            }
        }
    }
}

fn print_summary(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let verb = match summary.outcome() {
                Outcome::Success => "succeeded",
                Outcome::Failure => "failed",
                Outcome::Pending => "ended",
            };
            println!("{} {}", summary.run.job_name(), verb);
            for segment in &summary.segments {
                println!("  {}", segment.path().display());
            }
        }
        OutputFormat::Json => print_json(summary)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
