/// Shortest-route search between two anchor vertices, reporting every tie.
///
/// # Anchors
///
/// The caller supplies a set of anchor vertices. They are deduplicated and
/// sorted by label: the first is the start, the last is the end, and any
/// anchors strictly between them are excluded from the search entirely. They
/// are never intermediates and never waypoints. A single anchor is the
/// degenerate case `start == end`, answered by a one-vertex path of length 0.
///
/// # Strategies
///
/// - [`Strategy::Exhaustive`]: for every subset of the non-anchor vertices
///   and every ordering of that subset, route `start → ordering → end`, keep
///   the route when all of its edges exist, and sum its length.
/// - [`Strategy::Backtracking`]: DFS from `start` over non-anchor vertices
///   (plus `end`), dropping a partial route once its length strictly exceeds
///   the best complete route found so far, so routes that tie survive.
///
/// Both strategies feed a [`PathAccumulator`]. The minimum is only decided
/// when accumulators are merged at the end, never per candidate group.
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::budget::{Budget, EnumerationError, check_vertex_count};
use crate::config::{EnumerationConfig, Strategy};
use crate::edge::{CanonicalEdge, canonicalize};
use crate::graph::WeightedGraph;
use crate::newtypes::Vertex;
use crate::permutations::Permutations;
use crate::subsets::SubsetsOfSize;

// ---------------------------------------------------------------------------
// PathError
// ---------------------------------------------------------------------------

/// Errors that prevent a shortest-path search from running to completion.
///
/// "No route exists" is not an error; it is the `Ok(None)` outcome of
/// [`shortest_paths`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// No anchor vertices were supplied.
    NoAnchors,
    /// An anchor is not a vertex of the graph.
    InvalidVertex(Vertex),
    /// The enumeration itself was rejected or ran out of budget.
    Enumeration(EnumerationError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnchors => f.write_str("at least one anchor vertex is required"),
            Self::InvalidVertex(v) => write!(f, "vertex {v} is not in the graph"),
            Self::Enumeration(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Enumeration(e) => Some(e),
            Self::NoAnchors | Self::InvalidVertex(_) => None,
        }
    }
}

impl From<EnumerationError> for PathError {
    fn from(e: EnumerationError) -> Self {
        Self::Enumeration(e)
    }
}

// ---------------------------------------------------------------------------
// Path / ShortestPaths
// ---------------------------------------------------------------------------

/// A route through the graph, visiting each vertex at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    vertices: Vec<Vertex>,
    edges: Vec<CanonicalEdge>,
    length: f64,
}

impl Path {
    /// Vertices from start to end inclusive.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Canonical edges in travel order.
    pub fn edges(&self) -> &[CanonicalEdge] {
        &self.edges
    }

    /// Sum of the edge lengths, accumulated in travel order.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}

/// Every minimum-length route between the start and end anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    /// Tied shortest routes, ordered by hop count then vertex labels.
    pub paths: Vec<Path>,
    /// The shared minimum length.
    pub length: f64,
    /// The start anchor (smallest label).
    pub start: Vertex,
    /// The end anchor (largest label).
    pub end: Vertex,
    /// Anchors strictly between start and end, kept out of the search.
    pub excluded: Vec<Vertex>,
}

// ---------------------------------------------------------------------------
// PathAccumulator
// ---------------------------------------------------------------------------

/// Collects candidate routes and keeps every one tied for the minimum length.
///
/// Accumulators over disjoint slices of the search space can be combined with
/// [`PathAccumulator::merge`]; the result is the same as offering every
/// candidate to a single accumulator.
#[derive(Debug, Clone, Default)]
pub struct PathAccumulator {
    best: Option<f64>,
    paths: Vec<Path>,
}

impl PathAccumulator {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The best length seen so far, if any route was offered.
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    /// Offers one complete route.
    pub fn offer(&mut self, path: Path) {
        match self.best {
            Some(best) if path.length > best => {}
            Some(best) if path.length == best => self.paths.push(path),
            Some(_) | None => {
                self.best = Some(path.length);
                self.paths.clear();
                self.paths.push(path);
            }
        }
    }

    /// Folds `other` into `self`.
    pub fn merge(&mut self, other: PathAccumulator) {
        for path in other.paths {
            self.offer(path);
        }
    }

    /// Returns the tied minimum routes in canonical order with their length,
    /// or `None` if no route was ever offered.
    pub fn finish(mut self) -> Option<(Vec<Path>, f64)> {
        let best = self.best?;
        self.paths.sort_by(|a, b| {
            a.hops()
                .cmp(&b.hops())
                .then_with(|| a.vertices.cmp(&b.vertices))
        });
        Some((self.paths, best))
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Finds every shortest route between the smallest and largest anchor.
///
/// Returns `Ok(None)` when no route exists using only edges present in the
/// graph and avoiding the excluded anchors.
///
/// Every non-anchor vertex is a legal intermediate, so a missing direct edge
/// between the endpoints does not mean "no route": with edges `AB` and `AC`
/// and anchors `B`, `C`, the answer is `B --> A --> C`.
///
/// # Errors
///
/// - [`PathError::NoAnchors`]: `anchors` is empty.
/// - [`PathError::InvalidVertex`]: an anchor is not a vertex of `graph`.
/// - [`PathError::Enumeration`]: the graph exceeds `config.max_vertices`, or
///   the candidate budget ran out.
pub fn shortest_paths(
    graph: &WeightedGraph,
    anchors: &[Vertex],
    config: &EnumerationConfig,
) -> Result<Option<ShortestPaths>, PathError> {
    if let Some(missing) = anchors.iter().find(|a| !graph.contains_vertex(a)) {
        return Err(PathError::InvalidVertex(missing.clone()));
    }

    let sorted: Vec<Vertex> = anchors
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect();
    let (Some(start), Some(end)) = (sorted.first(), sorted.last()) else {
        return Err(PathError::NoAnchors);
    };
    let excluded: Vec<Vertex> = sorted
        .get(1..sorted.len().saturating_sub(1))
        .unwrap_or_default()
        .to_vec();

    check_vertex_count(graph.vertex_count(), config.max_vertices)?;

    if start == end {
        let trivial = Path {
            vertices: vec![start.clone()],
            edges: Vec::new(),
            length: 0.0,
        };
        return Ok(Some(ShortestPaths {
            paths: vec![trivial],
            length: 0.0,
            start: start.clone(),
            end: end.clone(),
            excluded,
        }));
    }

    let anchor_set: HashSet<&Vertex> = sorted.iter().collect();
    let remaining: Vec<Vertex> = graph
        .vertices()
        .iter()
        .filter(|v| !anchor_set.contains(v))
        .cloned()
        .collect();

    let mut budget = Budget::from_config(config);
    let acc = match config.strategy {
        Strategy::Exhaustive => exhaustive(graph, start, end, &remaining, &mut budget)?,
        Strategy::Backtracking => backtracking(graph, start, end, &remaining, &mut budget)?,
    };

    tracing::debug!(
        strategy = config.strategy.as_str(),
        start = %start,
        end = %end,
        excluded = excluded.len(),
        candidates = budget.spent(),
        "shortest-path search finished"
    );

    Ok(acc.finish().map(|(paths, length)| ShortestPaths {
        paths,
        length,
        start: start.clone(),
        end: end.clone(),
        excluded,
    }))
}

/// Builds the route `start → via… → end` if every hop is an edge of `graph`.
fn route(graph: &WeightedGraph, start: &Vertex, via: &[&Vertex], end: &Vertex) -> Option<Path> {
    let mut vertices: Vec<Vertex> = Vec::with_capacity(via.len() + 2);
    vertices.push(start.clone());
    vertices.extend(via.iter().map(|&v| v.clone()));
    vertices.push(end.clone());

    let mut edges = Vec::with_capacity(vertices.len() - 1);
    let mut length = 0.0;
    for pair in vertices.windows(2) {
        let edge = canonicalize(&pair[0], &pair[1]);
        length += graph.edge_length(&edge)?;
        edges.push(edge);
    }

    Some(Path {
        vertices,
        edges,
        length,
    })
}

// ---------------------------------------------------------------------------
// Exhaustive strategy
// ---------------------------------------------------------------------------

fn exhaustive(
    graph: &WeightedGraph,
    start: &Vertex,
    end: &Vertex,
    remaining: &[Vertex],
    budget: &mut Budget,
) -> Result<PathAccumulator, EnumerationError> {
    let mut overall = PathAccumulator::new();

    for k in 0..=remaining.len() {
        // One partial result per subset size, merged afterwards.
        let mut partial = PathAccumulator::new();
        for subset in SubsetsOfSize::new(remaining, k)? {
            for order in Permutations::new(&subset.vertices) {
                budget.spend()?;
                if let Some(path) = route(graph, start, &order, end) {
                    tracing::trace!(hops = path.hops(), length = path.length, "route found");
                    partial.offer(path);
                }
            }
        }
        overall.merge(partial);
    }

    Ok(overall)
}

// ---------------------------------------------------------------------------
// Backtracking strategy
// ---------------------------------------------------------------------------

fn backtracking(
    graph: &WeightedGraph,
    start: &Vertex,
    end: &Vertex,
    remaining: &[Vertex],
    budget: &mut Budget,
) -> Result<PathAccumulator, EnumerationError> {
    let allowed: HashSet<&Vertex> = remaining.iter().chain(std::iter::once(end)).collect();
    let mut acc = PathAccumulator::new();

    // Stack entry: (candidate successors, next child index, length so far).
    let mut path: Vec<&Vertex> = vec![start];
    let mut on_path: HashSet<&Vertex> = HashSet::from([start]);
    let mut stack: Vec<(Vec<&Vertex>, usize, f64)> = vec![(successors(graph, start, &allowed), 0, 0.0)];

    while let Some((children, child_idx, so_far)) = stack.last_mut() {
        let Some(&child) = children.get(*child_idx) else {
            stack.pop();
            if let Some(v) = path.pop() {
                on_path.remove(v);
            }
            continue;
        };
        *child_idx += 1;
        let so_far = *so_far;

        if on_path.contains(child) {
            continue;
        }
        let Some(step) = path.last().and_then(|&last| graph.length_between(last, child)) else {
            continue;
        };
        budget.spend()?;

        let length = so_far + step;
        if acc.best().is_some_and(|best| length > best) {
            continue;
        }

        if child == end {
            let via: Vec<&Vertex> = path.get(1..).unwrap_or_default().to_vec();
            if let Some(found) = route(graph, start, &via, end) {
                acc.offer(found);
            }
            continue;
        }

        path.push(child);
        on_path.insert(child);
        stack.push((successors(graph, child, &allowed), 0, length));
    }

    Ok(acc)
}

/// Neighbours of `v` that the search may step onto, in label order.
fn successors<'g>(
    graph: &'g WeightedGraph,
    v: &Vertex,
    allowed: &HashSet<&Vertex>,
) -> Vec<&'g Vertex> {
    graph
        .neighbors(v)
        .into_iter()
        .filter(|n| allowed.contains(*n))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
