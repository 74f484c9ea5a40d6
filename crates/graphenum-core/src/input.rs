/// Input validation and canonicalization of raw edge and length lists.
///
/// Callers describe a graph as two parallel lists: vertex pairs and edge
/// lengths. [`validate_edges`] checks the lists against each other, turns
/// every pair into a [`CanonicalEdge`], and merges duplicates. No enumeration
/// may start before this succeeds.
///
/// # JSON document
///
/// The CLI reads a [`GraphInput`] document:
///
/// ```json
/// { "edges": [["A", "B"], "bc", ["c", "a"]], "lengths": [1, 2, 5] }
/// ```
///
/// Each edge is either a two-element array of labels or a compact string of
/// exactly two single-character labels.
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edge::{CanonicalEdge, canonicalize};
use crate::newtypes::{NewtypeError, Vertex};

// ---------------------------------------------------------------------------
// Raw input types
// ---------------------------------------------------------------------------

/// A vertex pair as supplied by the caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEdge {
    /// Two labels, e.g. `["A", "b"]`.
    Pair([String; 2]),
    /// Two single-character labels written together, e.g. `"AB"`.
    Compact(String),
}

impl RawEdge {
    /// Convenience constructor for the [`RawEdge::Pair`] form.
    pub fn pair(a: &str, b: &str) -> Self {
        RawEdge::Pair([a.to_owned(), b.to_owned()])
    }

    /// Splits the raw edge into its two endpoint labels.
    ///
    /// Returns `None` for a compact string that is not exactly two characters.
    fn labels(&self) -> Option<(String, String)> {
        match self {
            RawEdge::Pair([a, b]) => Some((a.clone(), b.clone())),
            RawEdge::Compact(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(a), Some(b), None) => Some((a.to_string(), b.to_string())),
                    _ => None,
                }
            }
        }
    }
}

/// The JSON document describing one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphInput {
    /// Vertex pairs, one per edge.
    pub edges: Vec<RawEdge>,
    /// Edge lengths, parallel to `edges`.
    pub lengths: Vec<f64>,
}

impl GraphInput {
    /// Parses a [`GraphInput`] from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the text is not a
    /// well-formed graph document.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Runs [`validate_edges`] over this document's lists.
    ///
    /// # Errors
    ///
    /// See [`validate_edges`].
    pub fn validate(&self) -> Result<ValidatedEdges, InputError> {
        validate_edges(&self.edges, &self.lengths)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Data errors detected while validating raw edge and length lists.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// The edge list and the length list differ in size.
    LengthCountMismatch {
        /// Number of edges supplied.
        edges: usize,
        /// Number of lengths supplied.
        lengths: usize,
    },
    /// A compact edge string is not exactly two characters long.
    MalformedEdge {
        /// Position of the edge in the input list.
        index: usize,
        /// The rejected string.
        got: String,
    },
    /// An endpoint label is not a valid [`Vertex`].
    InvalidVertex {
        /// Position of the edge in the input list.
        index: usize,
        /// The label validation failure.
        source: NewtypeError,
    },
    /// Both endpoints of an edge are the same vertex.
    SelfLoop {
        /// Position of the edge in the input list.
        index: usize,
        /// The repeated vertex.
        vertex: Vertex,
    },
    /// A length is negative, NaN or infinite.
    InvalidLength {
        /// Position of the length in the input list.
        index: usize,
        /// The rejected value.
        length: f64,
    },
    /// The same canonical edge was given two different lengths.
    ConflictingEdgeLength {
        /// The edge in question.
        edge: CanonicalEdge,
        /// The length seen first.
        first: f64,
        /// The conflicting length.
        second: f64,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthCountMismatch { edges, lengths } => write!(
                f,
                "edge/length count mismatch: {edges} edge(s) but {lengths} length(s)"
            ),
            Self::MalformedEdge { index, got } => write!(
                f,
                "edge #{index}: compact edge {got:?} must be exactly two characters"
            ),
            Self::InvalidVertex { index, source } => write!(f, "edge #{index}: {source}"),
            Self::SelfLoop { index, vertex } => {
                write!(f, "edge #{index}: self-loop on vertex {vertex}")
            }
            Self::InvalidLength { index, length } => write!(
                f,
                "length #{index}: {length} is not a finite non-negative number"
            ),
            Self::ConflictingEdgeLength {
                edge,
                first,
                second,
            } => write!(
                f,
                "conflicting lengths for edge {edge}: {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidVertex { source, .. } => Some(source),
            Self::LengthCountMismatch { .. }
            | Self::MalformedEdge { .. }
            | Self::SelfLoop { .. }
            | Self::InvalidLength { .. }
            | Self::ConflictingEdgeLength { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ValidatedEdges
// ---------------------------------------------------------------------------

/// Canonical edges and their lengths as parallel vectors, in first-seen order.
///
/// Each distinct canonical edge appears exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidatedEdges {
    edges: Vec<CanonicalEdge>,
    lengths: Vec<f64>,
}

impl ValidatedEdges {
    /// The canonical edges.
    pub fn edges(&self) -> &[CanonicalEdge] {
        &self.edges
    }

    /// The edge lengths, parallel to [`ValidatedEdges::edges`].
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Number of distinct canonical edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates `(edge, length)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalEdge, f64)> {
        self.edges.iter().zip(self.lengths.iter().copied())
    }

    /// Looks up the length of `edge`.
    pub fn length_of(&self, edge: &CanonicalEdge) -> Option<f64> {
        self.iter().find(|(e, _)| *e == edge).map(|(_, len)| len)
    }

    /// Every vertex that appears in some edge, sorted by label.
    pub fn vertex_set(&self) -> Vec<Vertex> {
        let set: BTreeSet<&Vertex> = self
            .edges
            .iter()
            .flat_map(|e| [e.low(), e.high()])
            .collect();
        set.into_iter().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// validate_edges
// ---------------------------------------------------------------------------

/// Validates and canonicalizes parallel edge and length lists.
///
/// Identical duplicate entries (same canonical edge, same length) are merged
/// silently; the first occurrence fixes the edge's position.
///
/// # Errors
///
/// - [`InputError::LengthCountMismatch`]: the lists differ in size. Checked
///   before any edge is examined.
/// - [`InputError::MalformedEdge`]: a compact edge is not two characters.
/// - [`InputError::InvalidVertex`]: an endpoint label fails validation.
/// - [`InputError::SelfLoop`]: an edge joins a vertex to itself.
/// - [`InputError::InvalidLength`]: a length is negative or not finite.
/// - [`InputError::ConflictingEdgeLength`]: one canonical edge, two lengths.
pub fn validate_edges(edges: &[RawEdge], lengths: &[f64]) -> Result<ValidatedEdges, InputError> {
    if edges.len() != lengths.len() {
        return Err(InputError::LengthCountMismatch {
            edges: edges.len(),
            lengths: lengths.len(),
        });
    }

    let mut out = ValidatedEdges {
        edges: Vec::with_capacity(edges.len()),
        lengths: Vec::with_capacity(lengths.len()),
    };
    let mut position: HashMap<CanonicalEdge, usize> = HashMap::with_capacity(edges.len());

    for (index, (raw, &length)) in edges.iter().zip(lengths).enumerate() {
        let (a, b) = raw.labels().ok_or_else(|| InputError::MalformedEdge {
            index,
            got: match raw {
                RawEdge::Compact(s) => s.clone(),
                RawEdge::Pair([a, b]) => format!("{a}{b}"),
            },
        })?;

        let a = Vertex::try_from(a.as_str())
            .map_err(|source| InputError::InvalidVertex { index, source })?;
        let b = Vertex::try_from(b.as_str())
            .map_err(|source| InputError::InvalidVertex { index, source })?;

        let edge = canonicalize(&a, &b);
        if edge.is_loop() {
            return Err(InputError::SelfLoop { index, vertex: a });
        }

        if !length.is_finite() || length < 0.0 {
            return Err(InputError::InvalidLength { index, length });
        }

        match position.get(&edge) {
            Some(&pos) => {
                let first = out.lengths[pos];
                if first != length {
                    return Err(InputError::ConflictingEdgeLength {
                        edge,
                        first,
                        second: length,
                    });
                }
            }
            None => {
                position.insert(edge.clone(), out.edges.len());
                out.edges.push(edge);
                out.lengths.push(length);
            }
        }
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
