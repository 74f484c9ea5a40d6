//! Candidate accounting and the errors shared by both enumerators.
use std::fmt;

use crate::config::EnumerationConfig;

// ---------------------------------------------------------------------------
// EnumerationError
// ---------------------------------------------------------------------------

/// Non-functional failures of an enumeration: the input was too large to
/// attempt, or the caller's candidate budget ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// The vertex set is larger than the enumerator accepts.
    TooManyVertices {
        /// Number of vertices supplied.
        count: usize,
        /// Largest accepted count.
        max: usize,
    },
    /// More than `limit` candidates would have been evaluated.
    BudgetExhausted {
        /// The configured limit.
        limit: u64,
    },
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyVertices { count, max } => write!(
                f,
                "graph has {count} vertices; at most {max} can be enumerated"
            ),
            Self::BudgetExhausted { limit } => {
                write!(f, "candidate budget of {limit} exhausted")
            }
        }
    }
}

impl std::error::Error for EnumerationError {}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

/// Counts evaluated candidates against an optional limit.
#[derive(Debug, Clone)]
pub struct Budget {
    limit: Option<u64>,
    spent: u64,
}

impl Budget {
    /// A budget with the given limit (`None` = unbounded).
    pub fn new(limit: Option<u64>) -> Self {
        Self { limit, spent: 0 }
    }

    /// A budget taken from `config.max_candidates`.
    pub fn from_config(config: &EnumerationConfig) -> Self {
        Self::new(config.max_candidates)
    }

    /// Records one more candidate.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::BudgetExhausted`] once the count would
    /// exceed the limit.
    pub fn spend(&mut self) -> Result<(), EnumerationError> {
        self.spent += 1;
        match self.limit {
            Some(limit) if self.spent > limit => {
                tracing::warn!(limit, "candidate budget exhausted");
                Err(EnumerationError::BudgetExhausted { limit })
            }
            Some(_) | None => Ok(()),
        }
    }

    /// Number of candidates recorded so far.
    pub fn spent(&self) -> u64 {
        self.spent
    }
}

/// Rejects vertex sets larger than `max`.
///
/// # Errors
///
/// Returns [`EnumerationError::TooManyVertices`] when `count > max`.
pub fn check_vertex_count(count: usize, max: usize) -> Result<(), EnumerationError> {
    if count > max {
        Err(EnumerationError::TooManyVertices { count, max })
    } else {
        Ok(())
    }
}
