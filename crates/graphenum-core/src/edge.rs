//! Canonical undirected edge keys.
//!
//! Every set-membership test in the engine compares [`CanonicalEdge`] values,
//! so an unordered vertex pair must map to exactly one key regardless of the
//! order (or letter case) its endpoints were supplied in.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::newtypes::Vertex;

/// An unordered pair of vertices stored in label order (`low <= high`).
///
/// Build with [`canonicalize`]; the fields are private so the ordering
/// invariant cannot be broken.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalEdge {
    low: Vertex,
    high: Vertex,
}

/// Normalizes an unordered vertex pair into its canonical edge.
///
/// Pure and total: `canonicalize(a, b) == canonicalize(b, a)` for all `a`,
/// `b`. Case-insensitivity is already guaranteed by [`Vertex`].
pub fn canonicalize(a: &Vertex, b: &Vertex) -> CanonicalEdge {
    if a <= b {
        CanonicalEdge {
            low: a.clone(),
            high: b.clone(),
        }
    } else {
        CanonicalEdge {
            low: b.clone(),
            high: a.clone(),
        }
    }
}

impl CanonicalEdge {
    /// The smaller endpoint in label order.
    pub fn low(&self) -> &Vertex {
        &self.low
    }

    /// The larger endpoint in label order.
    pub fn high(&self) -> &Vertex {
        &self.high
    }

    /// Both endpoints, smaller first.
    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.low, &self.high)
    }

    /// Returns `true` if `v` is one of the endpoints.
    pub fn contains(&self, v: &Vertex) -> bool {
        &self.low == v || &self.high == v
    }

    /// Returns the endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn other(&self, v: &Vertex) -> Option<&Vertex> {
        if &self.low == v {
            Some(&self.high)
        } else if &self.high == v {
            Some(&self.low)
        } else {
            None
        }
    }

    /// Returns `true` when both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.low == self.high
    }

    /// Concatenated key form, e.g. `"AB"`.
    pub fn key(&self) -> String {
        format!("{}{}", self.low, self.high)
    }
}

impl fmt::Display for CanonicalEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn v(s: &str) -> Vertex {
        Vertex::try_from(s).expect("valid vertex")
    }

    #[test]
    fn canonicalize_is_order_independent() {
        assert_eq!(canonicalize(&v("A"), &v("B")), canonicalize(&v("B"), &v("A")));
    }

    #[test]
    fn canonicalize_is_case_insensitive() {
        assert_eq!(canonicalize(&v("a"), &v("B")), canonicalize(&v("b"), &v("A")));
    }

    #[test]
    fn low_is_smaller_endpoint() {
        let e = canonicalize(&v("Z"), &v("M"));
        assert_eq!(e.low().as_str(), "M");
        assert_eq!(e.high().as_str(), "Z");
    }

    #[test]
    fn key_and_display() {
        let e = canonicalize(&v("c"), &v("a"));
        assert_eq!(e.key(), "AC");
        assert_eq!(e.to_string(), "A-C");
    }

    #[test]
    fn other_endpoint() {
        let e = canonicalize(&v("A"), &v("B"));
        assert_eq!(e.other(&v("A")), Some(&v("B")));
        assert_eq!(e.other(&v("B")), Some(&v("A")));
        assert_eq!(e.other(&v("C")), None);
        assert!(e.contains(&v("a")));
    }

    #[test]
    fn multi_char_labels_do_not_collide() {
        // "A"+"BC" and "AB"+"C" share a concatenated key but are distinct edges.
        let e1 = canonicalize(&v("A"), &v("BC"));
        let e2 = canonicalize(&v("AB"), &v("C"));
        assert_eq!(e1.key(), e2.key());
        assert_ne!(e1, e2);
    }
}
