//! Random graph generator and benchmark utilities for graphenum.
//!
//! This crate provides deterministic generation of small weighted graphs
//! for benchmarking and property-based testing of `graphenum-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_graph, generate_input};
