/// Subset generation over a vertex set, partitioned by subset size.
///
/// # Bit basis
///
/// The vertices are sorted by label. For `n` vertices, the vertex at sorted
/// position `j` owns bit `n - 1 - j` of a `u64` mask, so the first vertex is
/// the most significant bit. The masks `0 .. 2^n` are visited in increasing
/// order, and each mask names the subset of vertices whose bits are set. A
/// subset's size key is the mask's population count.
///
/// Subsets of the same size therefore come out in increasing-mask order,
/// which makes every downstream enumeration reproducible.
use std::collections::{BTreeMap, BTreeSet};

use crate::budget::EnumerationError;
use crate::newtypes::Vertex;

/// Largest vertex count a `u64` mask can describe.
pub const MAX_SUBSET_VERTICES: usize = 63;

/// One subset: its generating mask and its members in label order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subset {
    /// The generating integer.
    pub mask: u64,
    /// Members, sorted by label.
    pub vertices: Vec<Vertex>,
}

impl Subset {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for the empty subset.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Subsets keyed by size; every size `0..=n` is present.
pub type SubsetTable = BTreeMap<usize, Vec<Subset>>;

// ---------------------------------------------------------------------------
// Subsets iterator
// ---------------------------------------------------------------------------

/// Lazy iterator over all `2^n` subsets in increasing-mask order.
#[derive(Debug, Clone)]
pub struct Subsets {
    basis: Vec<Vertex>,
    next: u64,
    end: u64,
}

impl Subsets {
    /// Builds the iterator over the distinct vertices of `vertices`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::TooManyVertices`] when there are more than
    /// [`MAX_SUBSET_VERTICES`] distinct vertices.
    pub fn new(vertices: &[Vertex]) -> Result<Self, EnumerationError> {
        let basis = sorted_basis(vertices)?;
        let end = 1u64 << basis.len();
        Ok(Self {
            basis,
            next: 0,
            end,
        })
    }

    /// The sorted vertex basis.
    pub fn basis(&self) -> &[Vertex] {
        &self.basis
    }

    /// Members of the subset named by `mask`, in label order.
    pub fn members(&self, mask: u64) -> Vec<Vertex> {
        members_of(&self.basis, mask)
    }
}

impl Iterator for Subsets {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        if self.next >= self.end {
            return None;
        }
        let mask = self.next;
        self.next += 1;
        Some(Subset {
            mask,
            vertices: self.members(mask),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

// ---------------------------------------------------------------------------
// SubsetsOfSize iterator
// ---------------------------------------------------------------------------

/// Lazy iterator over the `C(n, k)` subsets of size `k`, in increasing-mask
/// order.
///
/// Yields the same subsets, in the same order, as the size-`k` list of
/// [`subsets_by_size`], but produces each one on demand. Masks step with
/// Gosper's hack, so no mask of another size is ever visited.
#[derive(Debug, Clone)]
pub struct SubsetsOfSize {
    basis: Vec<Vertex>,
    next: Option<u64>,
    end: u64,
}

impl SubsetsOfSize {
    /// Builds the iterator over the size-`k` subsets of the distinct
    /// vertices of `vertices`. Empty when `k` exceeds the vertex count.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::TooManyVertices`] when there are more than
    /// [`MAX_SUBSET_VERTICES`] distinct vertices.
    pub fn new(vertices: &[Vertex], k: usize) -> Result<Self, EnumerationError> {
        let basis = sorted_basis(vertices)?;
        let end = 1u64 << basis.len();
        // k <= n <= 63 inside the branch, so the shift cannot overflow.
        let next = if k <= basis.len() {
            Some((1u64 << k) - 1)
        } else {
            None
        };
        Ok(Self { basis, next, end })
    }

    /// The sorted vertex basis.
    pub fn basis(&self) -> &[Vertex] {
        &self.basis
    }
}

impl Iterator for SubsetsOfSize {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        let mask = self.next?;
        self.next = next_same_popcount(mask).filter(|&m| m < self.end);
        Some(Subset {
            mask,
            vertices: members_of(&self.basis, mask),
        })
    }
}

/// The smallest mask greater than `x` with the same number of set bits.
///
/// `None` for `x == 0` (the empty subset is the only one of its size) and
/// on overflow.
fn next_same_popcount(x: u64) -> Option<u64> {
    if x == 0 {
        return None;
    }
    let lowest = x & x.wrapping_neg();
    let ripple = x.checked_add(lowest)?;
    Some((((ripple ^ x) >> 2) / lowest) | ripple)
}

// ---------------------------------------------------------------------------
// Basis helpers
// ---------------------------------------------------------------------------

/// Distinct vertices in label order, bounded by [`MAX_SUBSET_VERTICES`].
fn sorted_basis(vertices: &[Vertex]) -> Result<Vec<Vertex>, EnumerationError> {
    let basis: Vec<Vertex> = vertices
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect();
    if basis.len() > MAX_SUBSET_VERTICES {
        return Err(EnumerationError::TooManyVertices {
            count: basis.len(),
            max: MAX_SUBSET_VERTICES,
        });
    }
    Ok(basis)
}

/// Members of `basis` whose bits are set in `mask`, first vertex on the
/// most significant bit.
fn members_of(basis: &[Vertex], mask: u64) -> Vec<Vertex> {
    let n = basis.len();
    basis
        .iter()
        .enumerate()
        .filter(|&(j, _)| (mask >> (n - 1 - j)) & 1 == 1)
        .map(|(_, v)| v.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// subsets_by_size
// ---------------------------------------------------------------------------

/// Returns every subset of `vertices`, grouped by size.
///
/// The table has one key for every size `0..=n`, and the list for size `k`
/// holds exactly `C(n, k)` subsets in increasing-mask order. Duplicate input
/// vertices are collapsed first.
///
/// # Errors
///
/// Returns [`EnumerationError::TooManyVertices`] when there are more than
/// [`MAX_SUBSET_VERTICES`] distinct vertices.
pub fn subsets_by_size(vertices: &[Vertex]) -> Result<SubsetTable, EnumerationError> {
    let subsets = Subsets::new(vertices)?;
    let n = subsets.basis().len();

    let mut table: SubsetTable = (0..=n).map(|k| (k, Vec::new())).collect();
    for subset in subsets {
        table.entry(subset.len()).or_default().push(subset);
    }

    tracing::debug!(vertices = n, "generated subsets");
    Ok(table)
}

/// The binomial coefficient `C(n, k)`; zero when `k > n`.
///
/// Saturates at `u64::MAX` on overflow.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    u64::try_from(acc).unwrap_or(u64::MAX)
}
