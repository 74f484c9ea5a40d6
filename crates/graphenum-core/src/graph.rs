/// Weighted undirected graph construction from [`ValidatedEdges`] using `petgraph`.
///
/// Wraps a `StableUnGraph` with [`Vertex`] node weights and `f64` edge
/// lengths, and keeps a `HashMap<Vertex, NodeIndex>` for O(1) lookup of
/// vertices by label. The enumerators only ever ask three questions of the
/// graph: which vertices exist (in label order), whether a canonical edge is
/// present, and how long it is. The edge-adjacency helpers
/// ([`WeightedGraph::incident_edges`], [`WeightedGraph::edge_groups`]) serve
/// `inspect`.
use std::collections::{BTreeMap, HashMap};

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};

use crate::edge::{CanonicalEdge, canonicalize};
use crate::input::ValidatedEdges;
use crate::newtypes::Vertex;

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// An undirected, simple, edge-weighted graph.
///
/// Vertices are exactly those that appear in some edge. Construct with
/// [`build_graph`].
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    graph: StableUnGraph<Vertex, f64>,
    vertex_to_index: HashMap<Vertex, NodeIndex>,
    /// Vertices in label order; the fixed linear order every enumeration uses.
    sorted: Vec<Vertex>,
}

impl WeightedGraph {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every vertex, sorted by label.
    pub fn vertices(&self) -> &[Vertex] {
        &self.sorted
    }

    /// Returns `true` if `v` is a vertex of the graph.
    pub fn contains_vertex(&self, v: &Vertex) -> bool {
        self.vertex_to_index.contains_key(v)
    }

    /// Returns `true` if `edge` is present in the graph.
    pub fn contains_edge(&self, edge: &CanonicalEdge) -> bool {
        self.edge_length(edge).is_some()
    }

    /// Returns the length of `edge`, or `None` if it is not present.
    pub fn edge_length(&self, edge: &CanonicalEdge) -> Option<f64> {
        let a = *self.vertex_to_index.get(edge.low())?;
        let b = *self.vertex_to_index.get(edge.high())?;
        let idx = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(idx).copied()
    }

    /// Length of the edge between `a` and `b`, in either order.
    pub fn length_between(&self, a: &Vertex, b: &Vertex) -> Option<f64> {
        self.edge_length(&canonicalize(a, b))
    }

    /// Neighbours of `v`, sorted by label. Empty if `v` is not in the graph.
    pub fn neighbors(&self, v: &Vertex) -> Vec<&Vertex> {
        let Some(&idx) = self.vertex_to_index.get(v) else {
            return Vec::new();
        };
        let mut out: Vec<&Vertex> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n))
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Every edge with its length, sorted by canonical edge.
    pub fn edges(&self) -> Vec<(CanonicalEdge, f64)> {
        let mut out: Vec<(CanonicalEdge, f64)> = self
            .graph
            .edge_references()
            .filter_map(|e| {
                let a = self.graph.node_weight(e.source())?;
                let b = self.graph.node_weight(e.target())?;
                Some((canonicalize(a, b), *e.weight()))
            })
            .collect();
        out.sort_by(|x, y| x.0.cmp(&y.0));
        out
    }

    /// Canonical edges touching `v`, sorted. Empty if `v` is not in the graph.
    pub fn incident_edges(&self, v: &Vertex) -> Vec<CanonicalEdge> {
        self.neighbors(v)
            .into_iter()
            .map(|n| canonicalize(v, n))
            .collect()
    }

    /// Partitions the edges into groups linked by shared vertices.
    ///
    /// Two edges land in the same group when a chain of edges, each sharing
    /// a vertex with the next, joins them. Each group is sorted, and groups
    /// are ordered by their first edge.
    pub fn edge_groups(&self) -> Vec<Vec<CanonicalEdge>> {
        let mut sets: UnionFind<usize> = UnionFind::new(self.graph.node_bound());
        for e in self.graph.edge_references() {
            sets.union(e.source().index(), e.target().index());
        }

        let mut groups: BTreeMap<usize, Vec<CanonicalEdge>> = BTreeMap::new();
        for (edge, _) in self.edges() {
            let Some(idx) = self.vertex_to_index.get(edge.low()) else {
                continue;
            };
            groups.entry(sets.find(idx.index())).or_default().push(edge);
        }

        let mut out: Vec<Vec<CanonicalEdge>> = groups.into_values().collect();
        out.sort();
        out
    }

    /// Returns a reference to the underlying `petgraph` graph.
    pub fn graph(&self) -> &StableUnGraph<Vertex, f64> {
        &self.graph
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Constructs a [`WeightedGraph`] from validated edges.
///
/// Construction is O(V + E). It cannot fail: duplicate and conflicting edges
/// were already rejected or merged by [`crate::validate_edges`].
pub fn build_graph(edges: &ValidatedEdges) -> WeightedGraph {
    let sorted = edges.vertex_set();

    let mut graph: StableUnGraph<Vertex, f64> =
        StableUnGraph::with_capacity(sorted.len(), edges.len());
    let mut vertex_to_index: HashMap<Vertex, NodeIndex> = HashMap::with_capacity(sorted.len());

    for v in &sorted {
        let idx = graph.add_node(v.clone());
        vertex_to_index.insert(v.clone(), idx);
    }

    for (edge, length) in edges.iter() {
        if let (Some(&a), Some(&b)) = (
            vertex_to_index.get(edge.low()),
            vertex_to_index.get(edge.high()),
        ) {
            graph.add_edge(a, b, length);
        }
    }

    WeightedGraph {
        graph,
        vertex_to_index,
        sorted,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
