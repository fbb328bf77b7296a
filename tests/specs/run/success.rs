//! `joblog run` specs for commands that succeed

use crate::prelude::*;

#[test]
fn successful_job_leaves_one_archive_and_no_raw_log() {
    let tree = LogTree::new();

    tree.joblog()
        .args(&["run", "Job1", "--", "sh", "-c", "echo one; echo two; echo three"])
        .passes()
        .stdout_has("Job1 succeeded");

    let files = tree.files("Job1");
    assert_eq!(files.len(), 1, "{files:?}");
    assert!(files[0].starts_with("Job1_"));
    assert!(files[0].ends_with(".log.1.gz"));

    let content = tree.gunzip("Job1", &files[0]);
    assert!(content.contains("| INFO | Starting Job1...\n"));
    assert!(content.contains("| INFO | one\n"));
    assert!(content.contains("| INFO | two\n"));
    assert!(content.contains("| INFO | three\n"));
    assert!(content.contains("| INFO | Finished Job1 in "));
}

#[test]
fn stderr_lines_are_logged_at_error() {
    let tree = LogTree::new();

    tree.joblog()
        .args(&["run", "Job1", "--", "sh", "-c", "echo warning-ish >&2"])
        .passes();

    let files = tree.files("Job1");
    let content = tree.gunzip("Job1", &files[0]);
    assert!(content.contains("| ERROR | warning-ish\n"), "{content}");
}

#[test]
fn job_name_is_sanitized_into_directory() {
    let tree = LogTree::new();

    tree.joblog()
        .args(&["run", "../nightly backup", "--", "true"])
        .passes();

    assert_eq!(tree.files("nightlybackup").len(), 1);
    assert!(!tree.path().join("nightly backup").exists());
}

#[test]
fn json_output_reports_run_summary() {
    let tree = LogTree::new();

    let run = tree
        .joblog()
        .args(&["-o", "json", "run", "Job1", "--", "true"])
        .passes();
    let json = run.json();

    assert_eq!(json["run"]["job_name"], "Job1");
    assert_eq!(json["run"]["outcome"], "success");
    assert_eq!(json["segments"][0]["state"], "compressed");
}

#[test]
fn log_root_flag_overrides_environment() {
    let tree = LogTree::new();
    let other = tree.path().join("elsewhere");

    tree.joblog()
        .args(&["--log-root", other.to_str().unwrap(), "run", "Job1", "--", "true"])
        .passes();

    assert!(tree.files("Job1").is_empty());
    assert_eq!(std::fs::read_dir(other.join("Job1")).unwrap().count(), 1);
}
