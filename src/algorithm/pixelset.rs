use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over flat pixel indices
///
/// Tracks hole and boundary membership for a grid with a known pixel count.
/// Provides O(1) membership testing and efficient unions when merging
/// per-worker partial sets.
#[derive(Clone, Debug)]
pub struct PixelSet {
    bits: BitVec,
    cells: usize,
}

impl PixelSet {
    /// Create a set with no pixels present
    pub fn new(cells: usize) -> Self {
        Self {
            bits: bitvec![0; cells],
            cells,
        }
    }

    /// Insert a flat pixel index
    ///
    /// Indices at or beyond the pixel count are ignored
    pub fn insert(&mut self, index: usize) {
        if index < self.cells {
            self.bits.set(index, true);
        }
    }

    /// Test pixel membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Merge another set into this one in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Create a new set containing the union
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Test if no pixels are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count pixels in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all member indices as a sorted vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Get the pixel capacity this set was created for
    pub const fn cells(&self) -> usize {
        self.cells
    }
}

impl fmt::Display for PixelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelSet({} of {} pixels)", self.count(), self.cells)
    }
}
