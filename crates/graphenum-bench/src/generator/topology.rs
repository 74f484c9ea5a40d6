//! Ring-plus-chords topology and vertex labelling.

use graphenum_core::{GraphInput, RawEdge};
use rand::Rng;
use rand::rngs::StdRng;

use super::GeneratorConfig;

/// Label for the vertex at `index`: `A`..`Z`, then `V26`, `V27`, ...
pub fn vertex_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        Ok(_) | Err(_) => format!("V{index}"),
    }
}

/// Builds a ring `0-1-...-(n-1)-0` and adds each remaining pair as a chord
/// with probability `config.chord_probability`.
///
/// Fewer than three vertices yield a simple path (no ring closure).
pub fn build_ring_with_chords(config: &GeneratorConfig, rng: &mut StdRng) -> GraphInput {
    let n = config.num_vertices;
    let labels: Vec<String> = (0..n).map(vertex_label).collect();
    let lo = config.min_length.min(config.max_length);
    let hi = config.max_length.max(config.min_length);

    let mut edges = Vec::new();
    let mut lengths = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let on_ring = j == i + 1 || (i == 0 && j == n - 1 && n >= 3);
            if on_ring || rng.gen_bool(config.chord_probability.clamp(0.0, 1.0)) {
                edges.push(RawEdge::pair(&labels[i], &labels[j]));
                lengths.push(f64::from(rng.gen_range(lo..=hi)));
            }
        }
    }

    GraphInput { edges, lengths }
}
