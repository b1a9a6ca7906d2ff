//! Uniform random sources injected into every stochastic decision
//!
//! Generation and animation never call a global generator. Everything routes through
//! [`RandomSource`], so a run is reproducible either by seed ([`SeededRandom`]) or by
//! fixing the exact sequence of draws ([`ReplayRandom`]).

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform scalars in `[0, 1)`
pub trait RandomSource {
    /// Draw the next uniform value in `[0, 1)`
    fn next_uniform(&mut self) -> f64;

    /// Bernoulli test that succeeds when the draw is at most `probability`
    fn chance(&mut self, probability: f64) -> bool {
        self.next_uniform() <= probability
    }

    /// Uniform index into a collection of `len` elements
    ///
    /// Returns 0 for empty collections; callers validate non-emptiness upfront.
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = (self.next_uniform() * len as f64).floor() as usize;
        index.min(len - 1)
    }
}

/// Seeded random source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Derive an independent stream from this one
    ///
    /// Lets a single user seed drive both generation and animation without the two
    /// sharing a draw sequence.
    pub fn fork(&mut self) -> Self {
        Self::new(self.rng.random::<u64>())
    }
}

impl RandomSource for SeededRandom {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted
///
/// An empty sequence always yields 0.0.
#[derive(Debug, Clone, Default)]
pub struct ReplayRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplayRandom {
    /// Create a source that replays `values` in order
    pub const fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Create a source that always returns `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplayRandom {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self
            .values
            .get(self.cursor % self.values.len())
            .copied()
            .unwrap_or(0.0);
        self.cursor += 1;
        value
    }
}
