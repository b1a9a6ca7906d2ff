//! Tick-driven motion scheduling
//!
//! A cycle scrambles a freshly generated apparatus. Each tick either continues the
//! current burst or starts a new one from a uniformly chosen seed part, then pushes the
//! seed's directional neighborhood one unit. Every part records its position on every
//! tick, so a renderer can replay the cycle backwards as an assembly.
//!
//! Until the midpoint tick the scheduler runs in symmetric assembly mode: mirrored twins
//! (parts sharing a region id) are moved together, horizontally in mirrored directions.
//! From the midpoint on, single parts move in any direction. A hold that already covers
//! the midpoint leaves the whole cycle symmetric.

use crate::algorithm::bitset::PartBitset;
use crate::algorithm::neighborhood::NeighborhoodExpander;
use crate::io::configuration::{
    DEFAULT_FINAL_FRAME_DURATION, DEFAULT_MOVEMENT_LENGTH, DEFAULT_SHUFFLE_LENGTH,
};
use crate::io::error::{Result, invalid_configuration};
use crate::math::random::RandomSource;
use crate::spatial::rectangle::{Direction, Rectangle, bounds_of};
use serde::{Deserialize, Serialize};

/// Animation cycle parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Total ticks per cycle, including the hold
    pub shuffle_length: usize,
    /// Ticks the assembled state is held before motion starts
    pub final_frame_duration: usize,
    /// Probability that a burst continues for another tick
    pub movement_length: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            shuffle_length: DEFAULT_SHUFFLE_LENGTH,
            final_frame_duration: DEFAULT_FINAL_FRAME_DURATION,
            movement_length: DEFAULT_MOVEMENT_LENGTH,
        }
    }
}

impl AnimationConfig {
    /// Tick at which symmetric assembly mode ends
    pub const fn midpoint(&self) -> usize {
        self.shuffle_length / 2
    }

    /// Number of ticks that actually move parts
    pub const fn moving_ticks(&self) -> usize {
        self.shuffle_length.saturating_sub(self.final_frame_duration)
    }

    /// Check the cycle parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - The cycle is empty
    /// - The hold is longer than the cycle
    /// - The continuation probability lies outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.shuffle_length == 0 {
            return Err(invalid_configuration(
                "shuffle_length",
                &self.shuffle_length,
                &"cycle must contain at least one tick",
            ));
        }
        if self.final_frame_duration > self.shuffle_length {
            return Err(invalid_configuration(
                "final_frame_duration",
                &self.final_frame_duration,
                &format!("must not exceed shuffle_length ({})", self.shuffle_length),
            ));
        }
        if !(0.0..=1.0).contains(&self.movement_length) {
            return Err(invalid_configuration(
                "movement_length",
                &self.movement_length,
                &"must lie within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Path index displayed at playback frame `frame`
///
/// Playback runs the recorded cycle backwards, so the scrambled state comes first and
/// the assembled state is held at the end. Returns `None` past the end of the cycle.
pub const fn playback_index(shuffle_length: usize, frame: usize) -> Option<usize> {
    shuffle_length.checked_sub(frame + 1)
}

/// Random direction among `choices` options
///
/// - 2: North or South, evenly
/// - 3: East half the time, otherwise South or North evenly (West is excluded)
/// - otherwise: any of the four, evenly
pub fn random_direction<R: RandomSource + ?Sized>(choices: usize, rng: &mut R) -> Direction {
    match choices {
        2 => {
            if rng.next_uniform() > 0.5 {
                Direction::North
            } else {
                Direction::South
            }
        }
        3 => {
            if rng.next_uniform() > 0.5 {
                Direction::East
            } else if rng.next_uniform() > 0.5 {
                Direction::South
            } else {
                Direction::North
            }
        }
        _ => Direction::from_index(rng.pick_index(Direction::ALL.len())),
    }
}

/// Counters describing one simulated cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleSummary {
    /// Ticks simulated after the hold
    pub ticks: usize,
    /// Bursts started
    pub bursts: usize,
    /// Individual unit shifts applied
    pub shifts: usize,
}

/// Seed parts and direction persisting across the ticks of a burst
#[derive(Debug, Clone, PartialEq, Eq)]
struct Burst {
    origin: Vec<usize>,
    direction: Direction,
}

/// Drives animation cycles over generated apparatuses
#[derive(Debug, Clone)]
pub struct MotionScheduler<R> {
    config: AnimationConfig,
    rng: R,
}

impl<R: RandomSource> MotionScheduler<R> {
    /// Create a scheduler after validating `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the configuration fails validation
    pub fn new(config: AnimationConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Cycle parameters
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Simulate one full cycle, filling every part's path
    ///
    /// After the call each path holds exactly `shuffle_length` positions: the hold
    /// followed by one entry per simulated tick.
    pub fn run_cycle(&mut self, parts: &mut [Rectangle]) -> CycleSummary {
        let hold = self.config.final_frame_duration;
        for part in parts.iter_mut() {
            part.populate(hold);
        }

        let mut summary = CycleSummary::default();
        let mut start_new_burst = true;
        let mut burst: Option<Burst> = None;
        let mut symmetric = true;

        for tick in hold..self.config.shuffle_length {
            // A hold past the midpoint keeps the whole cycle symmetric
            if tick == self.config.midpoint() {
                symmetric = false;
            }

            for part in parts.iter_mut() {
                part.record();
            }
            summary.ticks += 1;

            if parts.is_empty() {
                continue;
            }

            if start_new_burst || burst.is_none() {
                let next = self.choose_burst(parts, symmetric);
                log::trace!(
                    "Tick {tick}: burst of {} part(s) moving {}",
                    next.origin.len(),
                    next.direction
                );
                burst = Some(next);
                summary.bursts += 1;
            }
            start_new_burst = self.rng.next_uniform() > self.config.movement_length;

            if let Some(current) = &burst {
                summary.shifts += Self::advance(parts, current, symmetric, tick);
            }
        }

        log::debug!(
            "Cycle of {} ticks: {} bursts, {} shifts over {} parts",
            summary.ticks,
            summary.bursts,
            summary.shifts,
            parts.len()
        );
        summary
    }

    fn choose_burst(&mut self, parts: &[Rectangle], symmetric: bool) -> Burst {
        let chosen = self.rng.pick_index(parts.len());
        let origin: Vec<usize> = match parts.get(chosen) {
            Some(seed) if symmetric => parts
                .iter()
                .enumerate()
                .filter(|(_, part)| part.id == seed.id)
                .map(|(index, _)| index)
                .collect(),
            _ => vec![chosen],
        };

        let choices = match (symmetric, origin.len()) {
            (true, 1) => 2,
            (true, _) => 3,
            (false, _) => 4,
        };
        let direction = random_direction(choices, &mut self.rng);

        Burst { origin, direction }
    }

    fn advance(parts: &mut [Rectangle], burst: &Burst, symmetric: bool, tick: usize) -> usize {
        let population = bounds_of(parts);
        let expander = NeighborhoodExpander::new(&population);
        let direction = burst.direction;

        if direction.is_vertical() || !symmetric {
            let group = expander.expand_indices(&burst.origin, direction);
            return shift_group(parts, &group, direction, tick);
        }

        let (mirrored, drawn) = split_origin(&burst.origin);
        let left_group = expander.expand_indices(mirrored, direction.mirror());
        let right_group = expander.expand_indices(drawn, direction);
        shift_group(parts, &left_group, direction.mirror(), tick)
            + shift_group(parts, &right_group, direction, tick)
    }
}

/// First origin member, moved in the mirrored direction, and second, moved as drawn
///
/// Origins list parts in population order, which is row-major by top-left corner, so a
/// horizontal twin pair always starts with its left member. Members past the second are
/// left in place.
fn split_origin(origin: &[usize]) -> (&[usize], &[usize]) {
    (
        origin.get(..1).unwrap_or_default(),
        origin.get(1..2).unwrap_or_default(),
    )
}

fn shift_group(
    parts: &mut [Rectangle],
    group: &PartBitset,
    direction: Direction,
    tick: usize,
) -> usize {
    let mut shifted = 0;
    for index in group.iter() {
        if let Some(part) = parts.get_mut(index) {
            part.shift(direction, tick);
            shifted += 1;
        }
    }
    shifted
}
