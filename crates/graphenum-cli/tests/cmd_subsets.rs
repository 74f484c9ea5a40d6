//! Integration tests for `graphenum subsets`.
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
fn subsets_counts_for_triangle() {
    let out = run(&["subsets", fixture("triangle.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert_eq!(
        stdout_of(&out),
        "size 0: 1\nsize 1: 3\nsize 2: 3\nsize 3: 1\ntotal: 8\n"
    );
}

#[test]
fn subsets_list_uses_most_significant_first_vertex() {
    let out = run(&[
        "subsets",
        "--list",
        "--format",
        "json",
        fixture("triangle.json").to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&out)).expect("json");
    assert_eq!(value["total"], 8);
    assert_eq!(value["subsets"]["0"], serde_json::json!([[]]));
    assert_eq!(value["subsets"]["1"], serde_json::json!([["C"], ["B"], ["A"]]));
    assert_eq!(
        value["subsets"]["2"],
        serde_json::json!([["B", "C"], ["A", "C"], ["A", "B"]])
    );
}

#[test]
fn subsets_json_omits_list_by_default() {
    let out = run(&[
        "subsets",
        "-f",
        "json",
        fixture("k4.json").to_str().expect("path"),
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&out)).expect("json");
    assert_eq!(value["counts"]["2"], 6);
    assert!(value.get("subsets").is_none());
}

#[test]
fn subsets_list_respects_vertex_limit() {
    let out = run(&[
        "subsets",
        "--list",
        "--max-vertices",
        "3",
        fixture("k4.json").to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("4 vertices"));
}
