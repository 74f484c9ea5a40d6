//! Integration tests for `graphenum path`.
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

fn path_args<'a>(file: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["path", file];
    args.extend_from_slice(rest);
    args
}

#[test]
fn detour_beats_direct_edge() {
    let file = fixture("detour.json");
    let out = run(&path_args(file.to_str().expect("path"), &["A", "C"]));
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "A --> B --> C\nlength: 3\n");
}

#[test]
fn anchors_are_sorted_and_case_folded() {
    let file = fixture("detour.json");
    let out = run(&path_args(file.to_str().expect("path"), &["c", "a"]));
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_of(&out), "A --> B --> C\nlength: 3\n");
}

#[test]
fn tied_routes_are_all_reported() {
    let file = fixture("diamond.json");
    let out = run(&path_args(file.to_str().expect("path"), &["A", "D"]));
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_of(&out),
        "A --> B --> D\nA --> C --> D\nlength: 5\n"
    );
}

#[test]
fn json_output_shape() {
    let file = fixture("diamond.json");
    let out = run(&path_args(
        file.to_str().expect("path"),
        &["A", "D", "--format", "json"],
    ));
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&out)).expect("json");
    assert_eq!(
        value["paths"],
        serde_json::json!([["A", "B", "D"], ["A", "C", "D"]])
    );
    assert_eq!(value["length"], 5.0);
    assert_eq!(value["count"], 2);
    assert_eq!(value["start"], "A");
    assert_eq!(value["end"], "D");
    assert_eq!(value["excluded"], serde_json::json!([]));
}

#[test]
fn route_through_free_vertex() {
    let file = fixture("fork.json");
    let out = run(&path_args(file.to_str().expect("path"), &["B", "C"]));
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_of(&out), "B --> A --> C\nlength: 2\n");
}

#[test]
fn middle_anchor_is_excluded() {
    let file = fixture("tree.json");
    let out = run(&path_args(file.to_str().expect("path"), &["C", "B", "A"]));
    assert_eq!(out.status.code(), Some(1));
    let stderr = stderr_of(&out);
    assert!(stderr.contains("no path from A to C"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn excluded_anchor_is_noted() {
    let file = fixture("diamond.json");
    let out = run(&path_args(file.to_str().expect("path"), &["A", "B", "D"]));
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_of(&out), "A --> C --> D\nlength: 5\n");
    assert!(stderr_of(&out).contains("excluded anchors: B"));
}

#[test]
fn unknown_anchor_exits_1() {
    let file = fixture("triangle.json");
    let out = run(&path_args(file.to_str().expect("path"), &["A", "Q"]));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("\"Q\" is not in the graph"));
}

#[test]
fn single_anchor_is_a_zero_length_route() {
    let file = fixture("triangle.json");
    let out = run(&path_args(file.to_str().expect("path"), &["B"]));
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_of(&out), "B\nlength: 0\n");
}

#[test]
fn strategies_agree() {
    let file = fixture("k4.json");
    let ex = run(&path_args(
        file.to_str().expect("path"),
        &["A", "D", "--strategy", "exhaustive"],
    ));
    let bt = run(&path_args(
        file.to_str().expect("path"),
        &["A", "D", "--strategy", "backtracking"],
    ));
    assert_eq!(ex.status.code(), Some(0));
    assert_eq!(stdout_of(&ex), stdout_of(&bt));
}
