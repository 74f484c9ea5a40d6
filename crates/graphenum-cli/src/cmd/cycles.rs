//! Implementation of `graphenum cycles <file> [--size K] [--require]`.
//!
//! Enumerates every simple cycle of the graph and prints them grouped by
//! size (number of edges), smallest first.
//!
//! Human output, one cycle per line:
//!
//! ```text
//! size 3: A --> B --> C --> A (length 3)
//! ```
//!
//! JSON output:
//! `{"cycles": {"3": [{"edges": [...], "vertices": [...], "length": L}]}, "count": N}`.
//!
//! Exit codes: 0 = success, 1 = budget or vertex limit hit, or no cycles
//! under `--require`; 2 = invalid input.
use std::io::Write;
use std::time::Instant;

use graphenum_core::{Cycle, CycleTable, EnumerationConfig, cycle_count, find_cycles, render_cycle};

use crate::OutputFormat;
use crate::cmd::{load_graph, write_error};
use crate::error::CliError;
use crate::format::{
    FormatterConfig, format_length, length_value, write_json, write_note_human,
    write_timing_human,
};

/// Runs the `cycles` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the input is invalid.
/// - [`CliError::Enumeration`] if the vertex limit or candidate budget is hit.
/// - [`CliError::NoCycles`] if `require` is set and nothing was found.
pub fn run(
    content: &str,
    size: Option<u32>,
    require: bool,
    enumeration: &EnumerationConfig,
    format: &OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let graph = load_graph(content)?;

    let start = Instant::now();
    let mut table = find_cycles(&graph, enumeration)?;
    let mut err = std::io::stderr().lock();
    write_timing_human(&mut err, "enumerated cycles", start.elapsed(), config)
        .map_err(write_error("stderr"))?;

    if let Some(size) = size {
        table.retain(|k, _| u32::try_from(*k).is_ok_and(|k| k == size));
    }
    let count = cycle_count(&table);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &table),
        OutputFormat::Json => print_json(&mut out, &table, count),
    }
    .map_err(write_error("stdout"))?;

    if count == 0 {
        if require {
            return Err(CliError::NoCycles);
        }
        if matches!(format, OutputFormat::Human) {
            write_note_human(&mut err, "no cycles found", config)
                .map_err(write_error("stderr"))?;
        }
    }
    Ok(())
}

fn print_human<W: Write>(w: &mut W, table: &CycleTable) -> std::io::Result<()> {
    for (size, cycles) in table {
        for cycle in cycles {
            writeln!(
                w,
                "size {size}: {} (length {})",
                render_cycle(cycle),
                format_length(cycle.length())
            )?;
        }
    }
    Ok(())
}

fn print_json<W: Write>(w: &mut W, table: &CycleTable, count: usize) -> std::io::Result<()> {
    let mut by_size = serde_json::Map::new();
    for (size, cycles) in table {
        let entries: Vec<serde_json::Value> = cycles.iter().map(cycle_value).collect();
        by_size.insert(size.to_string(), serde_json::Value::Array(entries));
    }

    let mut obj = serde_json::Map::new();
    obj.insert("cycles".to_owned(), serde_json::Value::Object(by_size));
    obj.insert("count".to_owned(), count.into());
    write_json(w, &serde_json::Value::Object(obj))
}

fn cycle_value(cycle: &Cycle) -> serde_json::Value {
    let edges: Vec<serde_json::Value> = cycle
        .edges()
        .iter()
        .map(|e| serde_json::Value::String(e.key()))
        .collect();
    let vertices: Vec<serde_json::Value> = cycle
        .vertices()
        .iter()
        .map(|v| serde_json::Value::String(v.to_string()))
        .collect();

    let mut obj = serde_json::Map::new();
    obj.insert("edges".to_owned(), serde_json::Value::Array(edges));
    obj.insert("vertices".to_owned(), serde_json::Value::Array(vertices));
    obj.insert("length".to_owned(), length_value(cycle.length()));
    serde_json::Value::Object(obj)
}
