//! Spatial data structures for generation and animation
//!
//! This module contains:
//! - Line-grid cells and the grid that holds them during generation
//! - Rectangle parts, their bounds, positions and movement directions

/// Line-grid cells and grid storage
pub mod cell;
/// Rectangle parts, bounds, directions and unit shifts
pub mod rectangle;

pub use cell::{Cell, CellGrid, Occupant};
pub use rectangle::{Bounds, Direction, Position, Rectangle};
