//! Lexicographic enumeration of every ordering of a slice.
//!
//! [`Permutations`] walks positions `0..k` with the classic next-permutation
//! step, so the orderings come out in lexicographic order of positions,
//! starting with the identity. For a slice already sorted by label this is
//! also lexicographic order of labels.

/// Iterator over all `k!` orderings of a slice.
///
/// An empty slice yields exactly one (empty) ordering.
#[derive(Debug, Clone)]
pub struct Permutations<'a, T> {
    items: &'a [T],
    positions: Vec<usize>,
    done: bool,
}

impl<'a, T> Permutations<'a, T> {
    /// Starts at the identity ordering of `items`.
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            positions: (0..items.len()).collect(),
            done: false,
        }
    }

    /// Advances `positions` to the next lexicographic ordering.
    ///
    /// Returns `false` when the current ordering is the last one.
    fn advance(&mut self) -> bool {
        let p = &mut self.positions;
        let n = p.len();
        if n < 2 {
            return false;
        }

        // Longest non-increasing suffix starts after `i`.
        let Some(i) = (0..n - 1).rev().find(|&i| p[i] < p[i + 1]) else {
            return false;
        };
        // Rightmost element of the suffix exceeding the pivot.
        let Some(j) = (i + 1..n).rev().find(|&j| p[j] > p[i]) else {
            return false;
        };
        p.swap(i, j);
        p[i + 1..].reverse();
        true
    }
}

impl<'a, T> Iterator for Permutations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current: Vec<&'a T> = self.positions.iter().map(|&i| &self.items[i]).collect();
        if !self.advance() {
            self.done = true;
        }
        Some(current)
    }
}

/// `k!`, or `None` on overflow.
pub fn factorial(k: usize) -> Option<u64> {
    (1..=k as u64).try_fold(1u64, u64::checked_mul)
}
