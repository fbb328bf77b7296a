//! `joblog run` specs for commands that fail

use crate::prelude::*;

#[test]
fn failed_job_keeps_raw_log_with_error_annotation() {
    let tree = LogTree::new();

    tree.joblog()
        .args(&["run", "Job2", "--", "sh", "-c", "echo step1; echo step2; exit 3"])
        .fails()
        .code(3)
        .stdout_has("Job2 failed");

    let files = tree.files("Job2");
    assert_eq!(files.len(), 1, "{files:?}");
    assert!(files[0].ends_with(".log"), "{files:?}");

    let content = tree.read("Job2", &files[0]);
    assert!(content.contains("| INFO | step1\n"));
    assert!(content.contains("| INFO | step2\n"));
    assert!(content.contains("| ERROR | Error in Job2: command exited with status 3\n"));
}

#[test]
fn failed_job_does_not_print_an_error_line() {
    let tree = LogTree::new();

    let run = tree
        .joblog()
        .args(&["run", "Job2", "--", "false"])
        .fails()
        .code(1);

    assert!(!run.stderr().contains("Error:"), "{}", run.stderr());
}

#[test]
fn later_success_does_not_touch_earlier_failure() {
    let tree = LogTree::new();

    tree.joblog()
        .args(&["run", "Job2", "--", "false"])
        .fails();
    // Wait out the second so the next run gets its own stamp.
    std::thread::sleep(std::time::Duration::from_millis(1100));
    tree.joblog()
        .args(&["run", "Job2", "--", "true"])
        .passes();

    let files = tree.files("Job2");
    assert_eq!(files.len(), 2, "{files:?}");
    assert_eq!(files.iter().filter(|f| f.ends_with(".log")).count(), 1);
    assert_eq!(files.iter().filter(|f| f.ends_with(".log.1.gz")).count(), 1);
}
