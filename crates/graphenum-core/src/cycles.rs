/// Simple-cycle enumeration for small undirected graphs.
///
/// A cycle is identified by its set of canonical edges. Walking the same
/// cycle from a different start vertex, or in the other direction, yields the
/// same edge set, so each cycle is reported exactly once.
///
/// # Strategies
///
/// - [`Strategy::Exhaustive`]: for every vertex subset of size `k >= 3`
///   (from [`SubsetsOfSize`], in size order) and every ordering of its
///   members, close the ordering into a walk, canonicalize its edges, drop
///   edge sets already seen for that subset, and keep the ones entirely
///   present in the graph.
/// - [`Strategy::Backtracking`]: DFS rooted at each vertex in label order,
///   extending only through vertices that sort after the root, and closing a
///   cycle whenever the current vertex is adjacent to the root. Each cycle is
///   found once per direction; the shared edge-set dedup collapses the pair.
///
/// Both strategies return the same [`CycleTable`]: per-size lists are sorted
/// by canonical edge set before returning.
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::budget::{Budget, EnumerationError, check_vertex_count};
use crate::config::{EnumerationConfig, Strategy};
use crate::edge::{CanonicalEdge, canonicalize};
use crate::graph::WeightedGraph;
use crate::newtypes::Vertex;
use crate::permutations::Permutations;
use crate::subsets::SubsetsOfSize;

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

/// One simple cycle of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    edges: BTreeSet<CanonicalEdge>,
    vertices: Vec<Vertex>,
    length: f64,
}

impl Cycle {
    /// Builds a cycle from a closed walk given as an ordering of its vertices.
    ///
    /// The stored walk starts at the smallest vertex and heads towards the
    /// smaller of its two neighbours on the cycle.
    fn from_walk(walk: &[&Vertex], edges: BTreeSet<CanonicalEdge>, graph: &WeightedGraph) -> Self {
        let length = edges
            .iter()
            .filter_map(|e| graph.edge_length(e))
            .sum();
        Self {
            edges,
            vertices: canonical_walk(walk),
            length,
        }
    }

    /// The cycle's canonical edges.
    pub fn edges(&self) -> &BTreeSet<CanonicalEdge> {
        &self.edges
    }

    /// The cycle's vertices in walk order, smallest vertex first. The closing
    /// edge back to the first vertex is implied.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices (equal to the number of edges).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a cycle has at least three vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sum of the cycle's edge lengths.
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Cycles keyed by size. Sizes without cycles are absent.
pub type CycleTable = BTreeMap<usize, Vec<Cycle>>;

/// Total number of cycles in `table`.
pub fn cycle_count(table: &CycleTable) -> usize {
    table.values().map(Vec::len).sum()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Enumerates every simple cycle of `graph`, grouped by size.
///
/// Returns an empty table when the graph has fewer than three vertices or no
/// cycles.
///
/// # Errors
///
/// - [`EnumerationError::TooManyVertices`]: the graph exceeds
///   `config.max_vertices`.
/// - [`EnumerationError::BudgetExhausted`]: more than
///   `config.max_candidates` candidates were needed.
pub fn find_cycles(
    graph: &WeightedGraph,
    config: &EnumerationConfig,
) -> Result<CycleTable, EnumerationError> {
    check_vertex_count(graph.vertex_count(), config.max_vertices)?;
    let mut budget = Budget::from_config(config);

    let mut table = match config.strategy {
        Strategy::Exhaustive => exhaustive(graph, &mut budget)?,
        Strategy::Backtracking => backtracking(graph, &mut budget)?,
    };

    for cycles in table.values_mut() {
        cycles.sort_by(|a, b| a.edges.cmp(&b.edges));
    }

    tracing::debug!(
        strategy = config.strategy.as_str(),
        candidates = budget.spent(),
        cycles = cycle_count(&table),
        "cycle enumeration finished"
    );
    Ok(table)
}

/// Canonical edge set of the closed walk through `order`.
///
/// Connects consecutive vertices and the last back to the first.
pub fn closed_walk_edges(order: &[&Vertex]) -> BTreeSet<CanonicalEdge> {
    let n = order.len();
    (0..n)
        .map(|i| canonicalize(order[i], order[(i + 1) % n]))
        .collect()
}

// ---------------------------------------------------------------------------
// Exhaustive strategy
// ---------------------------------------------------------------------------

fn exhaustive(
    graph: &WeightedGraph,
    budget: &mut Budget,
) -> Result<CycleTable, EnumerationError> {
    let vertices = graph.vertices();
    let mut table = CycleTable::new();

    // Subsets are produced lazily so the budget bounds the whole walk.
    for k in 3..=vertices.len() {
        for subset in SubsetsOfSize::new(vertices, k)? {
            // Dedup is per subset: two subsets never share a cycle.
            let mut seen: HashSet<BTreeSet<CanonicalEdge>> = HashSet::new();

            for order in Permutations::new(&subset.vertices) {
                budget.spend()?;
                let edges = closed_walk_edges(&order);
                if !seen.insert(edges.clone()) {
                    continue;
                }
                if edges.iter().all(|e| graph.contains_edge(e)) {
                    tracing::trace!(size = k, mask = subset.mask, "cycle found");
                    table
                        .entry(k)
                        .or_default()
                        .push(Cycle::from_walk(&order, edges, graph));
                }
            }
        }
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// Backtracking strategy
// ---------------------------------------------------------------------------

fn backtracking(
    graph: &WeightedGraph,
    budget: &mut Budget,
) -> Result<CycleTable, EnumerationError> {
    let vertices = graph.vertices();
    let rank: HashMap<&Vertex, usize> = vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();

    let mut table = CycleTable::new();
    let mut seen: HashSet<BTreeSet<CanonicalEdge>> = HashSet::new();

    for (root_rank, root) in vertices.iter().enumerate() {
        // Only vertices after the root may appear on its cycles, so each
        // cycle is discovered from its smallest vertex alone.
        let later = |v: &Vertex| rank.get(v).is_some_and(|&r| r > root_rank);

        let mut path: Vec<&Vertex> = vec![root];
        let mut on_path: HashSet<&Vertex> = HashSet::from([root]);
        // Stack entry: (allowed successors, next child index).
        let mut stack: Vec<(Vec<&Vertex>, usize)> = vec![(
            graph.neighbors(root).into_iter().filter(|v| later(*v)).collect(),
            0,
        )];

        while let Some((children, child_idx)) = stack.last_mut() {
            let Some(&child) = children.get(*child_idx) else {
                stack.pop();
                if let Some(v) = path.pop() {
                    on_path.remove(v);
                }
                continue;
            };
            *child_idx += 1;

            if on_path.contains(child) {
                continue;
            }
            budget.spend()?;

            path.push(child);
            on_path.insert(child);

            if path.len() >= 3 && graph.length_between(child, root).is_some() {
                let edges = closed_walk_edges(&path);
                if seen.insert(edges.clone()) {
                    tracing::trace!(size = path.len(), "cycle found");
                    table
                        .entry(path.len())
                        .or_default()
                        .push(Cycle::from_walk(&path, edges, graph));
                }
            }

            let next: Vec<&Vertex> = graph
                .neighbors(child)
                .into_iter()
                .filter(|v| later(*v) && !on_path.contains(*v))
                .collect();
            stack.push((next, 0));
        }
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Rotates `walk` to start at its smallest vertex and orients it towards the
/// smaller neighbour.
fn canonical_walk(walk: &[&Vertex]) -> Vec<Vertex> {
    let n = walk.len();
    let Some(start) = (0..n).min_by_key(|&i| walk[i]) else {
        return Vec::new();
    };
    let forward: Vec<Vertex> = (0..n).map(|i| walk[(start + i) % n].clone()).collect();
    if n < 3 {
        return forward;
    }
    let backward: Vec<Vertex> = (0..n)
        .map(|i| walk[(start + n - i) % n].clone())
        .collect();
    if backward[1] < forward[1] {
        backward
    } else {
        forward
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::graph::build_graph;
    use crate::input::{RawEdge, validate_edges};

    fn v(s: &str) -> Vertex {
        Vertex::try_from(s).expect("valid vertex")
    }

    fn graph(list: &[(&str, &str, f64)]) -> WeightedGraph {
        let raw: Vec<RawEdge> = list.iter().map(|(a, b, _)| RawEdge::pair(a, b)).collect();
        let lens: Vec<f64> = list.iter().map(|(_, _, l)| *l).collect();
        build_graph(&validate_edges(&raw, &lens).expect("valid"))
    }

    fn keys(cycle: &Cycle) -> Vec<String> {
        cycle.edges().iter().map(CanonicalEdge::key).collect()
    }

    fn walk(cycle: &Cycle) -> Vec<&str> {
        cycle.vertices().iter().map(Vertex::as_str).collect()
    }

    fn both(g: &WeightedGraph) -> CycleTable {
        let ex = find_cycles(g, &EnumerationConfig::default()).expect("exhaustive");
        let bt = find_cycles(
            g,
            &EnumerationConfig::default().with_strategy(Strategy::Backtracking),
        )
        .expect("backtracking");
        assert_eq!(ex, bt, "strategies disagree");
        ex
    }

    #[test]
    fn triangle_has_one_cycle() {
        let g = graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]);
        let table = both(&g);
        assert_eq!(table.len(), 1);
        let cycles = &table[&3];
        assert_eq!(cycles.len(), 1);
        assert_eq!(keys(&cycles[0]), vec!["AB", "AC", "BC"]);
        assert_eq!(walk(&cycles[0]), vec!["A", "B", "C"]);
        assert_eq!(cycles[0].length(), 3.0);
    }

    #[test]
    fn rotations_and_reflections_collapse() {
        let orders = [["A", "B", "C"], ["B", "C", "A"], ["C", "B", "A"]];
        let sets: HashSet<BTreeSet<CanonicalEdge>> = orders
            .iter()
            .map(|o| {
                let vs: Vec<Vertex> = o.iter().map(|s| v(s)).collect();
                let refs: Vec<&Vertex> = vs.iter().collect();
                closed_walk_edges(&refs)
            })
            .collect();
        assert_eq!(sets.len(), 1);
    }

    #[test]
    fn fewer_than_three_vertices_is_empty() {
        let g = graph(&[("A", "B", 1.0)]);
        assert!(both(&g).is_empty());
        let g = build_graph(&crate::input::ValidatedEdges::default());
        assert!(both(&g).is_empty());
    }

    #[test]
    fn path_graph_has_no_cycles() {
        let g = graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)]);
        assert!(both(&g).is_empty());
    }

    #[test]
    fn square_with_diagonal() {
        // A-B-C-D-A plus diagonal A-C: two triangles and the 4-cycle.
        let g = graph(&[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
            ("D", "A", 1.0),
            ("A", "C", 1.0),
        ]);
        let table = both(&g);
        assert_eq!(table[&3].len(), 2);
        assert_eq!(table[&4].len(), 1);
        assert_eq!(keys(&table[&3][0]), vec!["AB", "AC", "BC"]);
        assert_eq!(keys(&table[&3][1]), vec!["AC", "AD", "CD"]);
        assert_eq!(walk(&table[&4][0]), vec!["A", "B", "C", "D"]);
        assert_eq!(cycle_count(&table), 3);
    }

    #[test]
    fn complete_graph_k4() {
        let g = graph(&[
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("A", "D", 1.0),
            ("B", "C", 1.0),
            ("B", "D", 1.0),
            ("C", "D", 1.0),
        ]);
        let table = both(&g);
        // C(4,3) triangles and (4-1)!/2 Hamiltonian cycles.
        assert_eq!(table[&3].len(), 4);
        assert_eq!(table[&4].len(), 3);
    }

    #[test]
    fn every_cycle_vertex_has_degree_two() {
        let g = graph(&[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
            ("D", "A", 1.0),
            ("A", "C", 1.0),
            ("B", "D", 1.0),
            ("D", "E", 1.0),
            ("E", "A", 1.0),
        ]);
        for (k, cycles) in both(&g) {
            for cycle in cycles {
                assert_eq!(cycle.len(), k);
                assert_eq!(cycle.edges().len(), k);
                let mut degree: HashMap<&Vertex, usize> = HashMap::new();
                for e in cycle.edges() {
                    assert!(g.contains_edge(e));
                    *degree.entry(e.low()).or_default() += 1;
                    *degree.entry(e.high()).or_default() += 1;
                }
                assert_eq!(degree.len(), k);
                assert!(degree.values().all(|&d| d == 2));
            }
        }
    }

    #[test]
    fn disjoint_triangles() {
        let g = graph(&[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "A", 1.0),
            ("X", "Y", 2.0),
            ("Y", "Z", 2.0),
            ("Z", "X", 2.0),
        ]);
        let table = both(&g);
        assert_eq!(table.len(), 1);
        let lengths: Vec<f64> = table[&3].iter().map(Cycle::length).collect();
        assert_eq!(lengths, vec![3.0, 6.0]);
    }

    #[test]
    fn budget_is_enforced() {
        let g = graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]);
        let cfg = EnumerationConfig::default().with_max_candidates(2);
        assert_eq!(
            find_cycles(&g, &cfg),
            Err(EnumerationError::BudgetExhausted { limit: 2 })
        );
    }

    #[test]
    fn budget_stops_wide_ring_immediately() {
        let labels: Vec<String> = (0..40).map(|i| format!("V{i:02}")).collect();
        let ring: Vec<(&str, &str, f64)> = (0..labels.len())
            .map(|i| (labels[i].as_str(), labels[(i + 1) % labels.len()].as_str(), 1.0))
            .collect();
        let g = graph(&ring);
        for strategy in [Strategy::Exhaustive, Strategy::Backtracking] {
            let cfg = EnumerationConfig::default()
                .with_strategy(strategy)
                .with_max_vertices(40)
                .with_max_candidates(1);
            assert_eq!(
                find_cycles(&g, &cfg),
                Err(EnumerationError::BudgetExhausted { limit: 1 }),
                "{strategy:?}"
            );
        }
    }

    #[test]
    fn vertex_limit_is_enforced() {
        let g = graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]);
        let cfg = EnumerationConfig::default().with_max_vertices(2);
        assert_eq!(
            find_cycles(&g, &cfg),
            Err(EnumerationError::TooManyVertices { count: 3, max: 2 })
        );
    }

    #[test]
    fn canonical_walk_orients_towards_smaller_neighbour() {
        let vs: Vec<Vertex> = ["C", "A", "D", "B"].iter().map(|s| v(s)).collect();
        let refs: Vec<&Vertex> = vs.iter().collect();
        let labels: Vec<String> = canonical_walk(&refs).iter().map(ToString::to_string).collect();
        // A's neighbours on the walk are C and D; C is smaller.
        assert_eq!(labels, vec!["A", "C", "B", "D"]);
    }
}
