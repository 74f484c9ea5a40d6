//! Implementation of `graphenum subsets <file> [--list]`.
//!
//! Reports how many vertex subsets of each size the graph has. Counts are
//! computed as binomial coefficients; `--list` also enumerates the subsets
//! themselves (in increasing-mask order, first vertex as the most
//! significant bit), which is bounded by `--max-vertices`.
//!
//! Exit codes: 0 = success, 1 = too many vertices to list, 2 = invalid input.
use std::collections::BTreeMap;
use std::io::Write;

use graphenum_core::budget::check_vertex_count;
use graphenum_core::{
    EnumerationConfig, MAX_SUBSET_VERTICES, Subset, SubsetTable, Vertex, binomial,
    subsets_by_size,
};

use crate::OutputFormat;
use crate::cmd::{load_graph, write_error};
use crate::error::CliError;
use crate::format::write_json;

/// Runs the `subsets` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the input is invalid.
/// - [`CliError::Enumeration`] if the graph has more than 63 vertices, or
///   more than `config.max_vertices` when `list` is set.
pub fn run(
    content: &str,
    list: bool,
    config: &EnumerationConfig,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = load_graph(content)?;
    let n = graph.vertex_count();
    check_vertex_count(n, MAX_SUBSET_VERTICES)?;

    let counts: BTreeMap<usize, u64> = (0..=n)
        .map(|k| (k, binomial(n as u64, k as u64)))
        .collect();

    let table = if list {
        check_vertex_count(n, config.max_vertices)?;
        Some(subsets_by_size(graph.vertices())?)
    } else {
        None
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &counts, table.as_ref()),
        OutputFormat::Json => print_json(&mut out, &counts, table.as_ref()),
    }
    .map_err(write_error("stdout"))
}

fn total(counts: &BTreeMap<usize, u64>) -> u64 {
    counts.values().fold(0u64, |acc, c| acc.saturating_add(*c))
}

fn members(subset: &Subset) -> Vec<&str> {
    subset.vertices.iter().map(Vertex::as_str).collect()
}

fn print_human<W: Write>(
    w: &mut W,
    counts: &BTreeMap<usize, u64>,
    table: Option<&SubsetTable>,
) -> std::io::Result<()> {
    for (size, count) in counts {
        writeln!(w, "size {size}: {count}")?;
        let Some(listed) = table.and_then(|t| t.get(size)) else {
            continue;
        };
        for subset in listed {
            writeln!(w, "  {{{}}}", members(subset).join(", "))?;
        }
    }
    writeln!(w, "total: {}", total(counts))
}

fn print_json<W: Write>(
    w: &mut W,
    counts: &BTreeMap<usize, u64>,
    table: Option<&SubsetTable>,
) -> std::io::Result<()> {
    let mut counts_obj = serde_json::Map::new();
    for (size, count) in counts {
        counts_obj.insert(size.to_string(), (*count).into());
    }

    let mut obj = serde_json::Map::new();
    obj.insert("counts".to_owned(), serde_json::Value::Object(counts_obj));
    obj.insert("total".to_owned(), total(counts).into());

    if let Some(table) = table {
        let mut subsets_obj = serde_json::Map::new();
        for (size, listed) in table {
            let rows: Vec<serde_json::Value> = listed
                .iter()
                .map(|s| {
                    serde_json::Value::Array(
                        members(s)
                            .into_iter()
                            .map(|v| serde_json::Value::String(v.to_owned()))
                            .collect(),
                    )
                })
                .collect();
            subsets_obj.insert(size.to_string(), serde_json::Value::Array(rows));
        }
        obj.insert("subsets".to_owned(), serde_json::Value::Object(subsets_obj));
    }

    write_json(w, &serde_json::Value::Object(obj))
}
