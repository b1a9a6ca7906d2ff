//! Directional neighborhood closure
//!
//! Pushing a rectangle one unit in a direction has to push everything in the way as
//! well. The closure of a seed set under "touches in `direction`" is exactly the group
//! that moves together.

use crate::algorithm::bitset::PartBitset;
use crate::spatial::rectangle::{Bounds, Direction};

/// Expands seed sets against a fixed rectangle population
#[derive(Debug, Clone, Copy)]
pub struct NeighborhoodExpander<'a> {
    population: &'a [Bounds],
}

impl<'a> NeighborhoodExpander<'a> {
    /// Create an expander over `population`
    pub const fn new(population: &'a [Bounds]) -> Self {
        Self { population }
    }

    /// Indices of the population members neighboring `member` in `direction`
    pub fn neighbors(
        &self,
        member: Bounds,
        direction: Direction,
    ) -> impl Iterator<Item = usize> + '_ {
        self.population
            .iter()
            .enumerate()
            .filter(move |(_, candidate)| member.has_neighbor(candidate, direction))
            .map(|(index, _)| index)
    }

    /// Closure of the seed indices under adjacency in `direction`
    ///
    /// Seed indices outside the population are dropped.
    pub fn expand_indices(&self, seeds: &[usize], direction: Direction) -> PartBitset {
        let mut members = PartBitset::new(self.population.len());
        let mut frontier: Vec<usize> = seeds
            .iter()
            .copied()
            .filter(|&seed| members.insert(seed))
            .collect();

        while let Some(index) = frontier.pop() {
            let Some(&member) = self.population.get(index) else {
                continue;
            };
            frontier.extend(
                self.neighbors(member, direction)
                    .filter(|&neighbor| members.insert(neighbor)),
            );
        }

        members
    }

    /// Closure of the seed rectangles under adjacency in `direction`
    ///
    /// Identity is by bounds: the result holds each rectangle once, seeds first in their
    /// given order. Seeds absent from the population are kept as they are.
    pub fn expand(&self, seeds: &[Bounds], direction: Direction) -> Vec<Bounds> {
        let mut members: Vec<Bounds> = Vec::with_capacity(seeds.len());
        for seed in seeds {
            if !members.contains(seed) {
                members.push(*seed);
            }
        }

        let mut cursor = 0;
        while let Some(&member) = members.get(cursor) {
            cursor += 1;
            for candidate in self.population {
                if member.has_neighbor(candidate, direction) && !members.contains(candidate) {
                    members.push(*candidate);
                }
            }
        }

        members
    }
}

/// Closure of `seeds` within `population` under adjacency in `direction`
pub fn expand(seeds: &[Bounds], population: &[Bounds], direction: Direction) -> Vec<Bounds> {
    NeighborhoodExpander::new(population).expand(seeds, direction)
}
