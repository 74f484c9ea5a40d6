/// Command module for the `graphenum` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the already-read input and the parsed arguments and returns
/// `Ok(())` on success or a [`CliError`] on failure.
pub mod cycles;
pub mod inspect;
pub mod path;
pub mod subsets;
pub mod validate;

use graphenum_core::{GraphInput, ValidatedEdges, WeightedGraph, build_graph};

use crate::error::CliError;

/// Parses and validates a graph document.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] if `content` is not a graph JSON document.
/// - [`CliError::InvalidGraph`] if its edge or length lists are invalid.
pub fn load_edges(content: &str) -> Result<ValidatedEdges, CliError> {
    let input = GraphInput::from_json(content).map_err(|e| CliError::ParseFailed {
        detail: format!("line {}, column {}: {e}", e.line(), e.column()),
    })?;
    let edges = input.validate()?;
    tracing::debug!(edges = edges.len(), "validated edge list");
    Ok(edges)
}

/// [`load_edges`] followed by [`build_graph`].
///
/// # Errors
///
/// Same as [`load_edges`].
pub fn load_graph(content: &str) -> Result<WeightedGraph, CliError> {
    load_edges(content).map(|edges| build_graph(&edges))
}

/// Maps a failed stdout or stderr write to a [`CliError`].
pub fn write_error(stream: &'static str) -> impl FnOnce(std::io::Error) -> CliError {
    move |e| CliError::IoError {
        source: stream.to_owned(),
        detail: e.to_string(),
    }
}
