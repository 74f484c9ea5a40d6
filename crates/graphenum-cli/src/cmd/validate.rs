//! Implementation of `graphenum validate <file>`.
//!
//! Parses the document and validates its edge and length lists. On success
//! prints `valid: N vertices, M edges` (human) or
//! `{"valid": true, "vertices": N, "edges": M}` (JSON) to stdout.
//!
//! Exit codes: 0 = valid, 2 = unreadable, unparsable, or invalid input.
use std::io::Write as _;
use std::time::Instant;

use crate::OutputFormat;
use crate::cmd::{load_edges, write_error};
use crate::error::CliError;
use crate::format::{FormatterConfig, write_json, write_timing_human};

/// Runs the `validate` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the document does not parse or
/// fails validation.
pub fn run(content: &str, format: &OutputFormat, config: &FormatterConfig) -> Result<(), CliError> {
    let start = Instant::now();
    let edges = load_edges(content)?;
    let vertex_count = edges.vertex_set().len();

    write_timing_human(
        &mut std::io::stderr().lock(),
        "validated",
        start.elapsed(),
        config,
    )
    .map_err(write_error("stderr"))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => writeln!(
            out,
            "valid: {vertex_count} vertices, {} edges",
            edges.len()
        ),
        OutputFormat::Json => {
            let mut obj = serde_json::Map::new();
            obj.insert("valid".to_owned(), serde_json::Value::Bool(true));
            obj.insert("vertices".to_owned(), vertex_count.into());
            obj.insert("edges".to_owned(), edges.len().into());
            write_json(&mut out, &serde_json::Value::Object(obj))
        }
    }
    .map_err(write_error("stdout"))
}
