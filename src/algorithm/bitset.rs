use bitvec::prelude::*;
use std::fmt;

/// Fixed-size membership set over indices into a rectangle population
///
/// Provides O(1) membership testing while a neighborhood closure grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartBitset {
    bits: BitVec,
    population: usize,
}

impl PartBitset {
    /// Create an empty set for a population of `population` parts
    pub fn new(population: usize) -> Self {
        Self {
            bits: bitvec![0; population],
            population,
        }
    }

    /// Insert a part index, returning whether it was newly added
    ///
    /// Indices outside the population are ignored.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.population || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test part membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no parts are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count parts in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over member indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all member indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for PartBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PartBitset({}/{} parts: {:?})",
            self.count(),
            self.population,
            self.to_vec()
        )
    }
}
