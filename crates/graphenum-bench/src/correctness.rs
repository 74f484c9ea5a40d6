//! Post-enumeration invariant checkers for correctness validation.

use std::collections::{BTreeSet, HashMap};

use graphenum_core::{CycleTable, ShortestPaths, Vertex, WeightedGraph};

/// Verifies that every cycle in `table` is a simple cycle of `graph`:
/// - keyed by its edge count, which is at least 3
/// - every edge exists in the graph
/// - every touched vertex has degree exactly 2
/// - the recorded length is the sum of its edge lengths
/// - no edge set appears twice
pub fn check_cycle_table(graph: &WeightedGraph, table: &CycleTable) -> Result<(), String> {
    let mut seen = BTreeSet::new();
    for (size, cycles) in table {
        if *size < 3 {
            return Err(format!("cycle table has size key {size} below 3"));
        }
        for cycle in cycles {
            if cycle.edges().len() != *size {
                return Err(format!(
                    "cycle with {} edges filed under size {size}",
                    cycle.edges().len()
                ));
            }
            let mut degree: HashMap<&Vertex, usize> = HashMap::new();
            let mut total = 0.0;
            for edge in cycle.edges() {
                let length = graph
                    .edge_length(edge)
                    .ok_or_else(|| format!("cycle uses missing edge {edge}"))?;
                total += length;
                *degree.entry(edge.low()).or_default() += 1;
                *degree.entry(edge.high()).or_default() += 1;
            }
            if let Some((v, d)) = degree.iter().find(|&(_, d)| *d != 2) {
                return Err(format!("vertex {v} has degree {d} in a cycle"));
            }
            if degree.len() != *size {
                return Err(format!(
                    "cycle of size {size} touches {} vertices",
                    degree.len()
                ));
            }
            if total != cycle.length() {
                return Err(format!(
                    "cycle length {} differs from edge sum {total}",
                    cycle.length()
                ));
            }
            if !seen.insert(cycle.edges().clone()) {
                return Err("duplicate cycle edge set".to_owned());
            }
        }
    }
    Ok(())
}

/// Verifies a shortest-path result:
/// - every path starts at `start`, ends at `end`, and repeats no vertex
/// - every hop is a real edge and no path visits an excluded anchor
/// - every path's length equals its edge sum and the reported minimum
pub fn check_shortest_paths(graph: &WeightedGraph, found: &ShortestPaths) -> Result<(), String> {
    if found.paths.is_empty() {
        return Err("shortest-path result holds no paths".to_owned());
    }
    for path in &found.paths {
        let verts = path.vertices();
        if verts.first() != Some(&found.start) || verts.last() != Some(&found.end) {
            return Err(format!("path {verts:?} does not join the endpoints"));
        }
        let distinct: BTreeSet<&Vertex> = verts.iter().collect();
        if distinct.len() != verts.len() {
            return Err(format!("path {verts:?} repeats a vertex"));
        }
        if let Some(bad) = verts.iter().find(|v| found.excluded.contains(v)) {
            return Err(format!("path passes through excluded anchor {bad}"));
        }
        let mut total = 0.0;
        for pair in verts.windows(2) {
            total += graph
                .length_between(&pair[0], &pair[1])
                .ok_or_else(|| format!("no edge between {} and {}", pair[0], pair[1]))?;
        }
        if total != path.length() || total != found.length {
            return Err(format!(
                "path length {total} differs from reported {}",
                found.length
            ));
        }
    }
    Ok(())
}
