//! CLI error handling specs
//!
//! Verify error messages for bad configuration and arguments.

use crate::prelude::*;

#[test]
fn run_without_command_is_a_usage_error() {
    let tree = LogTree::new();
    tree.joblog()
        .args(&["run", "Job1"])
        .fails()
        .code(2)
        .stderr_has("Usage:");
}

#[test]
fn invalid_env_override_is_reported() {
    let tree = LogTree::new();
    tree.joblog()
        .env("JOBLOG_MAX_SEGMENT_BYTES", "lots")
        .args(&["list"])
        .fails()
        .code(1)
        .stderr_has("JOBLOG_MAX_SEGMENT_BYTES");
}

#[test]
fn unknown_config_key_is_reported() {
    let tree = LogTree::new();
    let config = tree.path().join("joblog.toml");
    std::fs::write(&config, "max_size = 5\n").unwrap();

    tree.joblog()
        .args(&["--config", config.to_str().unwrap(), "list"])
        .fails()
        .stderr_has("max_size");
}

#[test]
fn unusable_log_root_fails_before_running_the_job() {
    let tree = LogTree::new();
    std::fs::write(tree.root(), "not a directory").unwrap();
    let marker = tree.path().join("ran");

    tree.joblog()
        .args(&["run", "Job1", "--", "touch", marker.to_str().unwrap()])
        .fails()
        .code(1)
        .stderr_has("not usable");
    assert!(!marker.exists());
}

#[test]
fn missing_program_exits_127() {
    let tree = LogTree::new();
    tree.joblog()
        .args(&["run", "Job1", "--", "/nonexistent/joblog-spec-binary"])
        .fails()
        .code(127)
        .stderr_has("failed to start");

    let files = tree.files("Job1");
    assert_eq!(files.len(), 1, "{files:?}");
    assert!(files[0].ends_with(".log"));
}
