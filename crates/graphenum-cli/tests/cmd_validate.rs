//! Integration tests for `graphenum validate`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `graphenum` binary.
fn graphenum_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("graphenum");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(graphenum_bin())
        .args(args)
        .output()
        .expect("run graphenum")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn validate_triangle_exits_0() {
    let out = run(&["validate", fixture("triangle.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "valid: 3 vertices, 3 edges\n");
}

#[test]
fn validate_json_summary() {
    let out = run(&[
        "validate",
        "--format",
        "json",
        fixture("diamond.json").to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&out)).expect("json");
    assert_eq!(value["valid"], true);
    assert_eq!(value["vertices"], 4);
    assert_eq!(value["edges"], 4);
}

#[test]
fn length_count_mismatch_exits_2() {
    let out = run(&["validate", fixture("mismatch.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = stderr_of(&out);
    assert!(stderr.contains("invalid graph"), "stderr: {stderr}");
    assert!(stderr.contains("count mismatch"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn conflicting_lengths_exit_2() {
    let out = run(&["validate", fixture("conflict.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("conflicting lengths for edge A-B"));
}

#[test]
fn self_loop_exits_2() {
    let out = run(&["validate", fixture("self-loop.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("self-loop"));
}

#[test]
fn malformed_json_exits_2() {
    let out = run(&["validate", fixture("malformed.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = stderr_of(&out);
    assert!(stderr.contains("invalid graph document"), "stderr: {stderr}");
    assert!(stderr.contains("line"), "stderr: {stderr}");
}

#[test]
fn missing_file_exits_2() {
    let out = run(&["validate", "/no/such/graph.json"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("file not found"));
}

#[test]
fn file_over_size_limit_exits_2() {
    let out = run(&[
        "validate",
        "--max-file-size",
        "8",
        fixture("triangle.json").to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("too large"));
}

#[test]
fn unknown_field_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("extra.json");
    std::fs::write(&path, r#"{"edges": ["AB"], "lengths": [1], "weights": [1]}"#)
        .expect("write");
    let out = run(&["validate", path.to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
}
