/// Validated newtype wrapper for vertex labels.
///
/// A [`Vertex`] enforces a regex-based shape constraint at construction time
/// via [`TryFrom<&str>`] and stores the label in its canonical (upper) case.
/// Once constructed, the inner value is immutable (no `DerefMut`). The serde
/// `Deserialize` impl re-runs validation so invalid labels cannot enter the
/// type system from untrusted JSON.
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewtypeError {
    /// The string did not match the expected format.
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

impl fmt::Display for NewtypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                type_name,
                expected,
                got,
            } => write!(f, "invalid {type_name}: expected {expected}, got {got:?}"),
        }
    }
}

impl std::error::Error for NewtypeError {}

// ---------------------------------------------------------------------------
// Regex statics
//
// Literal patterns; Regex::new cannot fail on them.
// ---------------------------------------------------------------------------

/// Matches one or more ASCII letters, digits or underscores.
static VERTEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| {
            Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken"))
        })
    })
});

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// A vertex label, normalized to upper case.
///
/// Two vertices are equal iff their normalized labels are equal, so `"a"` and
/// `"A"` name the same vertex. The derived [`Ord`] (byte-wise on the upper-case
/// label) is the single total order used for bit positions, permutation
/// order, anchor sorting and tie ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(String);

impl TryFrom<&str> for Vertex {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if VERTEX_RE.is_match(s) {
            Ok(Self(s.to_ascii_uppercase()))
        } else {
            Err(NewtypeError::InvalidFormat {
                type_name: "Vertex",
                expected: "one or more ASCII letters, digits or underscores",
                got: s.to_owned(),
            })
        }
    }
}

impl TryFrom<String> for Vertex {
    type Error = NewtypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl Vertex {
    /// Returns the normalized label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Vertex {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Vertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Vertex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Vertex::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
