#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod budget;
pub mod config;
pub mod cycles;
pub mod display;
pub mod edge;
pub mod graph;
pub mod input;
pub mod newtypes;
pub mod paths;
pub mod permutations;
pub mod subsets;

pub use budget::{Budget, EnumerationError};
pub use config::{DEFAULT_MAX_VERTICES, EnumerationConfig, Strategy};
pub use cycles::{Cycle, CycleTable, closed_walk_edges, cycle_count, find_cycles};
pub use display::{render_cycle, render_path};
pub use edge::{CanonicalEdge, canonicalize};
pub use graph::{WeightedGraph, build_graph};
pub use input::{GraphInput, InputError, RawEdge, ValidatedEdges, validate_edges};
pub use newtypes::{NewtypeError, Vertex};
pub use paths::{Path, PathAccumulator, PathError, ShortestPaths, shortest_paths};
pub use permutations::{Permutations, factorial};
pub use subsets::{
    MAX_SUBSET_VERTICES, Subset, SubsetTable, Subsets, SubsetsOfSize, binomial, subsets_by_size,
};

/// Returns the current version of the graphenum-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
