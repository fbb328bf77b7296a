// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! joblog - run commands as logged jobs

mod commands;
mod env;
mod exit_error;
mod logging;
mod output;
mod table;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{list, run, sweep};
use joblog_core::LogConfig;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "joblog",
    version,
    about = "Per-run job logs with rotation, compression and retention"
)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Root of the log tree (overrides config and JOBLOG_ROOT)
    #[arg(long, value_name = "DIR", global = true)]
    log_root: Option<PathBuf>,

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command as a logged job
    Run(run::RunArgs),
    /// Finish interrupted compressions and delete expired log files
    ///
    /// Files are judged by age alone. A `joblog run` in another process that
    /// has written nothing for longer than the retention period can lose its
    /// active log file to this sweep.
    Sweep,
    /// List log files
    List(list::ListArgs),
}

fn main() {
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();
    let format = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let config = resolve_config(cli.config.as_deref(), cli.log_root)?;

    match command {
        Commands::Run(args) => run::handle(args, config, format)?,
        Commands::Sweep => sweep::handle(&config, format)?,
        Commands::List(args) => list::handle(args, &config, format)?,
    }

    Ok(())
}

/// Defaults, then the config file, then `JOBLOG_*`, then `--log-root`.
fn resolve_config(path: Option<&Path>, log_root: Option<PathBuf>) -> Result<LogConfig> {
    let mut config = LogConfig::load(path)?;
    if let Some(root) = log_root {
        config.log_root = root;
        config.validate()?;
    }
    Ok(config)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
