//! `joblog sweep` specs

use crate::prelude::*;

#[test]
fn sweep_removes_files_past_retention() {
    let tree = LogTree::new();
    let expired = tree.aged_file("Job1/Job1_20250101_000000.log.1.gz", 31);
    let kept = tree.aged_file("Job1/Job1_20250201_000000.log", 29);

    tree.joblog()
        .args(&["sweep"])
        .passes()
        .stdout_has("Removed ")
        .stdout_has("1 file(s) removed");

    assert!(!expired.exists());
    assert!(kept.exists());
}

#[test]
fn retention_days_env_override_applies() {
    let tree = LogTree::new();
    let path = tree.aged_file("Job1/Job1_20250101_000000.log", 3);

    tree.joblog()
        .env("JOBLOG_RETENTION_DAYS", "2")
        .args(&["sweep"])
        .passes();

    assert!(!path.exists());
}

#[test]
fn sweep_finishes_interrupted_compression() {
    let tree = LogTree::new();
    let raw = tree.aged_file("Job1/Job1_20260130_081409.log.1", 0);
    let archive = tree.aged_file("Job1/Job1_20260130_081409.log.1.gz", 0);

    let run = tree.joblog().args(&["-o", "json", "sweep"]).passes();
    let json = run.json();

    assert!(!raw.exists());
    assert!(archive.exists());
    assert_eq!(json["removed"].as_array().unwrap().len(), 1);
}

#[test]
fn sweep_of_missing_root_is_a_no_op() {
    let tree = LogTree::new();

    tree.joblog()
        .args(&["sweep"])
        .passes()
        .stdout_eq("0 file(s) removed\n");
}
