//! Integration tests for `graphenum inspect`.
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
fn inspect_human_lists_canonical_edges() {
    let out = run(&["inspect", fixture("detour.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert_eq!(
        stdout_of(&out),
        "vertices: 3 (A, B, C)\nedges:    3\n  A-B  1\n  A-C  5\n  B-C  2\ngroups:   1\n  A-B, A-C, B-C\n"
    );
}

#[test]
fn inspect_json_has_counts_and_edges() {
    let out = run(&[
        "inspect",
        "-f",
        "json",
        fixture("diamond.json").to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&out)).expect("json");
    assert_eq!(value["vertex_count"], 4);
    assert_eq!(value["edge_count"], 4);
    assert_eq!(value["vertices"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(value["edges"][0]["edge"], "AB");
    assert_eq!(value["edges"][0]["endpoints"], serde_json::json!(["A", "B"]));
    assert_eq!(value["edges"][0]["length"], 2.0);
    assert_eq!(value["edge_groups"], serde_json::json!([["AB", "AC", "BD", "CD"]]));
}

#[test]
fn inspect_groups_edges_by_shared_vertices() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("split.json");
    std::fs::write(
        &path,
        r#"{"edges": ["AB", "CD", "BE"], "lengths": [1, 1, 1]}"#,
    )
    .expect("write");
    let out = run(&["inspect", path.to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert!(
        stdout_of(&out).ends_with("groups:   2\n  A-B, B-E\n  C-D\n"),
        "stdout: {}",
        stdout_of(&out)
    );
}

#[test]
fn inspect_upper_cases_labels() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("lower.json");
    std::fs::write(&path, r#"{"edges": [["x", "y"]], "lengths": [0.5]}"#).expect("write");
    let out = run(&["inspect", path.to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout_of(&out).contains("  X-Y  0.5"));
}
