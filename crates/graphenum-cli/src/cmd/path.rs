//! Implementation of `graphenum path <file> <anchor>...`.
//!
//! The anchors are sorted by label; the first and last are the route
//! endpoints and every anchor in between is excluded from routing. Prints
//! every route that ties for the minimum total length, fewest hops first.
//!
//! Output (human mode): one path per line with vertices separated by
//! ` --> `, then a `length: L` line.
//! Output (JSON mode): a JSON object
//! `{"paths": [[...], ...], "length": L, "count": N, "start": S, "end": E, "excluded": [...]}`.
//!
//! Exit codes: 0 = at least one path found, 1 = unknown anchor / no path /
//! limit hit, 2 = invalid input.
use std::io::Write;
use std::time::Instant;

use graphenum_core::{EnumerationConfig, ShortestPaths, Vertex, render_path, shortest_paths};

use crate::OutputFormat;
use crate::cmd::{load_graph, write_error};
use crate::error::CliError;
use crate::format::{
    FormatterConfig, format_length, length_value, write_json, write_note_human,
    write_timing_human,
};

/// Runs the `path` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the input is invalid.
/// - [`CliError::InvalidVertex`] if an anchor is not a vertex of the graph.
/// - [`CliError::PathNotFound`] if no route avoids the excluded anchors.
/// - [`CliError::Enumeration`] if the vertex limit or candidate budget is hit.
pub fn run(
    content: &str,
    anchors: &[String],
    enumeration: &EnumerationConfig,
    format: &OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let graph = load_graph(content)?;
    let anchors = parse_anchors(anchors)?;

    let start = Instant::now();
    let found = shortest_paths(&graph, &anchors, enumeration)?;
    let mut err = std::io::stderr().lock();
    write_timing_human(&mut err, "searched routes", start.elapsed(), config)
        .map_err(write_error("stderr"))?;

    let Some(found) = found else {
        let (from, to) = endpoints(&anchors);
        return Err(CliError::PathNotFound { from, to });
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            if !found.excluded.is_empty() {
                let labels: Vec<&str> = found.excluded.iter().map(Vertex::as_str).collect();
                write_note_human(
                    &mut err,
                    &format!("excluded anchors: {}", labels.join(", ")),
                    config,
                )
                .map_err(write_error("stderr"))?;
            }
            print_human(&mut out, &found)
        }
        OutputFormat::Json => print_json(&mut out, &found),
    }
    .map_err(write_error("stdout"))
}

/// Converts command-line labels to vertices.
///
/// A label that cannot name a vertex is reported the same way as one that
/// is absent from the graph.
fn parse_anchors(raw: &[String]) -> Result<Vec<Vertex>, CliError> {
    raw.iter()
        .map(|s| {
            Vertex::try_from(s.as_str()).map_err(|_| CliError::InvalidVertex { vertex: s.clone() })
        })
        .collect()
}

/// First and last anchor in label order.
fn endpoints(anchors: &[Vertex]) -> (String, String) {
    let first = anchors.iter().min().map(Vertex::to_string).unwrap_or_default();
    let last = anchors.iter().max().map(Vertex::to_string).unwrap_or_default();
    (first, last)
}

fn print_human<W: Write>(w: &mut W, found: &ShortestPaths) -> std::io::Result<()> {
    for path in &found.paths {
        writeln!(w, "{}", render_path(path.vertices()))?;
    }
    writeln!(w, "length: {}", format_length(found.length))
}

fn print_json<W: Write>(w: &mut W, found: &ShortestPaths) -> std::io::Result<()> {
    let labels = |vs: &[Vertex]| -> serde_json::Value {
        serde_json::Value::Array(
            vs.iter()
                .map(|v| serde_json::Value::String(v.to_string()))
                .collect(),
        )
    };

    let paths: Vec<serde_json::Value> = found.paths.iter().map(|p| labels(p.vertices())).collect();

    let mut obj = serde_json::Map::new();
    obj.insert("paths".to_owned(), serde_json::Value::Array(paths));
    obj.insert("length".to_owned(), length_value(found.length));
    obj.insert("count".to_owned(), found.paths.len().into());
    obj.insert(
        "start".to_owned(),
        serde_json::Value::String(found.start.to_string()),
    );
    obj.insert(
        "end".to_owned(),
        serde_json::Value::String(found.end.to_string()),
    );
    obj.insert("excluded".to_owned(), labels(&found.excluded));
    write_json(w, &serde_json::Value::Object(obj))
}
