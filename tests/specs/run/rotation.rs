//! `joblog run` specs for size rotation

use crate::prelude::*;

#[test]
fn crossing_threshold_twice_leaves_independent_archives() {
    let tree = LogTree::new();

    tree.joblog()
        .env("JOBLOG_MAX_SEGMENT_BYTES", "150")
        .args(&["run", "Job3", "--", "sh", "-c", "for i in 1 2 3 4 5 6 7 8 9; do echo line $i; done"])
        .passes();

    let files = tree.files("Job3");
    assert!(files.len() >= 3, "{files:?}");
    assert!(files.iter().all(|f| f.ends_with(".gz")), "{files:?}");
    for file in &files {
        let raw = file.trim_end_matches(".gz");
        assert!(!files.iter().any(|f| f == raw), "{raw} kept beside its archive");
    }

    let all: String = files.iter().map(|f| tree.gunzip("Job3", f)).collect();
    for i in 1..=9 {
        assert!(all.contains(&format!("| INFO | line {i}\n")), "line {i} missing");
    }
}

#[test]
fn failed_rotating_job_keeps_only_final_segment_raw() {
    let tree = LogTree::new();

    tree.joblog()
        .env("JOBLOG_MAX_SEGMENT_BYTES", "150")
        .args(&["run", "Job3", "--", "sh", "-c", "for i in 1 2 3 4 5 6 7 8 9; do echo line $i; done; exit 1"])
        .fails()
        .code(1);

    let files = tree.files("Job3");
    let raw: Vec<_> = files.iter().filter(|f| !f.ends_with(".gz")).collect();
    assert_eq!(raw.len(), 1, "{files:?}");
    assert!(raw[0].ends_with(".log"));
    assert!(files.len() >= 2, "{files:?}");
}
