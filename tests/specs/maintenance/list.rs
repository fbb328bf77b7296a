//! `joblog list` specs

use crate::prelude::*;

#[test]
fn list_of_empty_tree_says_so() {
    let tree = LogTree::new();
    tree.joblog()
        .args(&["list"])
        .passes()
        .stdout_eq("No job logs found\n");
}

#[test]
fn list_shows_runs_with_their_states() {
    let tree = LogTree::new();
    tree.joblog().args(&["run", "Good", "--", "true"]).passes();
    tree.joblog().args(&["run", "Bad", "--", "false"]).fails();

    tree.joblog()
        .args(&["list"])
        .passes()
        .stdout_has("JOB")
        .stdout_has("STATE")
        .stdout_has("compressed")
        .stdout_has("log");
}

#[test]
fn list_json_filters_by_job() {
    let tree = LogTree::new();
    tree.joblog().args(&["run", "Good", "--", "true"]).passes();
    tree.joblog().args(&["run", "Bad", "--", "false"]).fails();

    let run = tree.joblog().args(&["list", "Bad", "-o", "json"]).passes();
    let json = run.json();
    let entries = json.as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["job"], "Bad");
    assert_eq!(entries[0]["state"], "log");
    assert!(entries[0]["size"].as_u64().unwrap() > 0);
}
