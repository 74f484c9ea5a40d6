/// Caller-settable knobs for the enumeration engine.
///
/// Nothing here affects *what* the enumerators return; the strategy only
/// changes how the search space is walked, and the limits turn a runaway
/// enumeration into an [`crate::EnumerationError`] instead of an unbounded
/// computation.
use serde::{Deserialize, Serialize};

/// Default upper bound on the vertex count accepted by the enumerators.
///
/// Twelve vertices means 4096 subsets and at most 12! orderings of the
/// largest one, which is still tractable for the exhaustive strategy.
pub const DEFAULT_MAX_VERTICES: usize = 12;

/// How the search space is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every subset, every ordering: the reference algorithm.
    #[default]
    Exhaustive,
    /// Depth-first search over the graph's adjacency, pruning dead branches.
    Backtracking,
}

impl Strategy {
    /// Lower-case name, as used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::Backtracking => "backtracking",
        }
    }
}

/// Configuration shared by [`crate::find_cycles`] and [`crate::shortest_paths`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Search strategy. Defaults to [`Strategy::Exhaustive`].
    pub strategy: Strategy,
    /// Maximum number of candidates (orderings or search extensions) to
    /// evaluate before giving up. `None` means unbounded.
    pub max_candidates: Option<u64>,
    /// Graphs with more vertices than this are rejected up front.
    pub max_vertices: usize,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_candidates: None,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl EnumerationConfig {
    /// Returns a copy using `strategy`.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns a copy with a candidate budget of `limit`.
    pub fn with_max_candidates(mut self, limit: u64) -> Self {
        self.max_candidates = Some(limit);
        self
    }

    /// Returns a copy accepting graphs of up to `max` vertices.
    pub fn with_max_vertices(mut self, max: usize) -> Self {
        self.max_vertices = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_exhaustive_and_unbounded() {
        let c = EnumerationConfig::default();
        assert_eq!(c.strategy, Strategy::Exhaustive);
        assert_eq!(c.max_candidates, None);
        assert_eq!(c.max_vertices, DEFAULT_MAX_VERTICES);
    }

    #[test]
    fn builders_compose() {
        let c = EnumerationConfig::default()
            .with_strategy(Strategy::Backtracking)
            .with_max_candidates(100)
            .with_max_vertices(8);
        assert_eq!(c.strategy, Strategy::Backtracking);
        assert_eq!(c.max_candidates, Some(100));
        assert_eq!(c.max_vertices, 8);
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::Exhaustive.as_str(), "exhaustive");
        assert_eq!(Strategy::Backtracking.as_str(), "backtracking");
    }
}
