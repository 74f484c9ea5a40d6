//! Weighted graph generator.
//!
//! Produces valid [`GraphInput`] documents: a ring over every vertex (so
//! the graph is connected and has at least one cycle) plus random chords.

pub mod topology;

use graphenum_core::{GraphInput, WeightedGraph, build_graph};
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_ring_with_chords;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices.
    pub num_vertices: usize,
    /// Probability that each non-ring vertex pair gets a chord (0.0-1.0).
    pub chord_probability: f64,
    /// Smallest edge length.
    pub min_length: u32,
    /// Largest edge length. Narrow ranges produce many tied routes.
    pub max_length: u32,
}

/// Predefined size tiers for benchmarking.
///
/// Exhaustive enumeration is factorial in the vertex count, so the tiers
/// stay well inside the default vertex limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 5 vertices, sparse
    Tiny,
    /// 6 vertices
    Small,
    /// 7 vertices
    Medium,
    /// 8 vertices, dense
    Large,
}

impl SizeTier {
    /// All tiers, smallest first.
    pub const ALL: [SizeTier; 4] = [
        SizeTier::Tiny,
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
    ];

    /// Short label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Tiny => "T",
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }

    /// Returns the default [`GeneratorConfig`] for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Tiny => GeneratorConfig {
                seed,
                num_vertices: 5,
                chord_probability: 0.3,
                min_length: 1,
                max_length: 4,
            },
            SizeTier::Small => GeneratorConfig {
                seed,
                num_vertices: 6,
                chord_probability: 0.4,
                min_length: 1,
                max_length: 4,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_vertices: 7,
                chord_probability: 0.4,
                min_length: 1,
                max_length: 9,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_vertices: 8,
                chord_probability: 0.5,
                min_length: 1,
                max_length: 9,
            },
        }
    }
}

/// Generates a graph document from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_input(config: &GeneratorConfig) -> GraphInput {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_ring_with_chords(config, &mut rng)
}

/// [`generate_input`] followed by validation and graph construction.
///
/// Returns `None` only if the generator produced an invalid document, which
/// the validity tests guard against.
pub fn generate_graph(config: &GeneratorConfig) -> Option<WeightedGraph> {
    let edges = generate_input(config).validate().ok()?;
    Some(build_graph(&edges))
}
