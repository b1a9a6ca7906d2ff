//! Procedural "apparatus" generation and connectivity-driven assembly animation
//!
//! A stochastic line-grid builder produces a (optionally mirrored) tiling of rectangles,
//! and a motion scheduler scrambles that tiling by pushing directionally connected groups
//! of parts one grid unit at a time, recording every part's position per tick so the cycle
//! can be played back in reverse as an assembly.

#![forbid(unsafe_code)]

/// Grid construction, rectangle extraction, neighborhood expansion and motion scheduling
pub mod algorithm;
/// Input/output operations, rendering collaborators and error handling
pub mod io;
/// Randomness injection and ellipse geometry
pub mod math;
/// Cells, rectangles and directions
pub mod spatial;

pub use algorithm::generator::{ApparatusGenerator, GeneratorConfig};
pub use algorithm::scheduler::{AnimationConfig, MotionScheduler};
pub use io::error::{ApparatusError, Result};
pub use math::random::{RandomSource, ReplayRandom, SeededRandom};
pub use spatial::rectangle::{Bounds, Direction, Position, Rectangle};
