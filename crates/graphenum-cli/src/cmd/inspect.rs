//! Implementation of `graphenum inspect <file>`.
//!
//! Prints the sorted vertex list, every canonical edge with its length, and
//! the groups of edges linked by shared vertices.
//!
//! Human output:
//!
//! ```text
//! vertices: 3 (A, B, C)
//! edges:    3
//!   A-B  1
//!   A-C  5
//!   B-C  2
//! groups:   1
//!   A-B, A-C, B-C
//! ```
//!
//! JSON output is a single object with `vertices`, `edges` (each with `edge`,
//! `endpoints`, and `length`), `edge_groups` (lists of edge keys),
//! `vertex_count`, and `edge_count`.
//!
//! Exit codes: 0 = success, 2 = parse or validation failure.
use std::io::Write;

use graphenum_core::{CanonicalEdge, Vertex, WeightedGraph};

use crate::OutputFormat;
use crate::cmd::{load_graph, write_error};
use crate::error::CliError;
use crate::format::{format_length, length_value, write_json};

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the document does not parse or
/// fails validation.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = load_graph(content)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &graph),
        OutputFormat::Json => print_json(&mut out, &graph),
    }
    .map_err(write_error("stdout"))
}

fn print_human<W: Write>(w: &mut W, graph: &WeightedGraph) -> std::io::Result<()> {
    let labels: Vec<&str> = graph.vertices().iter().map(Vertex::as_str).collect();
    writeln!(
        w,
        "vertices: {} ({})",
        graph.vertex_count(),
        labels.join(", ")
    )?;
    writeln!(w, "edges:    {}", graph.edge_count())?;
    for (edge, length) in graph.edges() {
        writeln!(w, "  {edge}  {}", format_length(length))?;
    }
    let groups = graph.edge_groups();
    writeln!(w, "groups:   {}", groups.len())?;
    for group in &groups {
        let edges: Vec<String> = group.iter().map(ToString::to_string).collect();
        writeln!(w, "  {}", edges.join(", "))?;
    }
    Ok(())
}

fn print_json<W: Write>(w: &mut W, graph: &WeightedGraph) -> std::io::Result<()> {
    let vertices: Vec<serde_json::Value> = graph
        .vertices()
        .iter()
        .map(|v| serde_json::Value::String(v.to_string()))
        .collect();
    let edges: Vec<serde_json::Value> = graph
        .edges()
        .iter()
        .map(|(edge, length)| edge_value(edge, *length))
        .collect();
    let groups: Vec<serde_json::Value> = graph
        .edge_groups()
        .iter()
        .map(|group| {
            serde_json::Value::Array(
                group
                    .iter()
                    .map(|e| serde_json::Value::String(e.key()))
                    .collect(),
            )
        })
        .collect();

    let mut obj = serde_json::Map::new();
    obj.insert("vertex_count".to_owned(), graph.vertex_count().into());
    obj.insert("edge_count".to_owned(), graph.edge_count().into());
    obj.insert("vertices".to_owned(), serde_json::Value::Array(vertices));
    obj.insert("edges".to_owned(), serde_json::Value::Array(edges));
    obj.insert("edge_groups".to_owned(), serde_json::Value::Array(groups));
    write_json(w, &serde_json::Value::Object(obj))
}

fn edge_value(edge: &CanonicalEdge, length: f64) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("edge".to_owned(), serde_json::Value::String(edge.key()));
    obj.insert(
        "endpoints".to_owned(),
        serde_json::Value::Array(vec![
            serde_json::Value::String(edge.low().to_string()),
            serde_json::Value::String(edge.high().to_string()),
        ]),
    );
    obj.insert("length".to_owned(), length_value(length));
    serde_json::Value::Object(obj)
}
