//! Rectangle parts, their bounds and unit movement
//!
//! Coordinates are grid units with x growing east and y growing south. A rectangle
//! occupies the half-open span `[x1, x2) × [y1, y2)`.

use crate::spatial::cell::{ColorId, PartId};
use std::fmt;

/// Grid position of a part's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Position {
    /// Create a position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller y
    North,
    /// Towards larger x
    East,
    /// Towards larger y
    South,
    /// Towards smaller x
    West,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Direction for index 0..4 (North, East, South, West); wraps modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Index of the direction (North = 0 … West = 3)
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Whether the direction moves along y
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Horizontal mirror image: East and West swap, vertical directions are unchanged
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
            vertical => vertical,
        }
    }

    /// Unit step `(dx, dy)` for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Boundary coordinates of a rectangle, used for identity and adjacency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Left edge (inclusive)
    pub x1: i32,
    /// Top edge (inclusive)
    pub y1: i32,
    /// Right edge (exclusive)
    pub x2: i32,
    /// Bottom edge (exclusive)
    pub y2: i32,
}

impl Bounds {
    /// Bounds from corner and size
    pub const fn from_size(x1: i32, y1: i32, w: i32, h: i32) -> Self {
        Self {
            x1,
            y1,
            x2: x1 + w,
            y2: y1 + h,
        }
    }

    /// Whether `candidate` touches this rectangle's edge in `direction`
    ///
    /// The candidate's far edge must coincide with this rectangle's near edge and the
    /// spans along the other axis must overlap strictly; corner contact does not count.
    /// Identical bounds are never neighbors.
    pub const fn has_neighbor(&self, candidate: &Self, direction: Direction) -> bool {
        if self.x1 == candidate.x1
            && self.y1 == candidate.y1
            && self.x2 == candidate.x2
            && self.y2 == candidate.y2
        {
            return false;
        }
        let overlaps_x = candidate.x1 < self.x2 && candidate.x2 > self.x1;
        let overlaps_y = candidate.y1 < self.y2 && candidate.y2 > self.y1;
        match direction {
            Direction::North => candidate.y2 == self.y1 && overlaps_x,
            Direction::East => candidate.x1 == self.x2 && overlaps_y,
            Direction::South => candidate.y1 == self.y2 && overlaps_x,
            Direction::West => candidate.x2 == self.x1 && overlaps_y,
        }
    }

    /// Bounds moved one unit in `direction`
    #[must_use]
    pub const fn shifted(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

/// Whether `candidate` is a neighbor of `member` in `direction`
pub const fn is_neighbor(member: &Bounds, candidate: &Bounds, direction: Direction) -> bool {
    member.has_neighbor(candidate, direction)
}

/// One rectangle of an apparatus
///
/// Created by the generator with an empty path; the motion scheduler seeds and extends
/// `path` and keeps `x1, y1, x2, y2` in sync as it shifts the part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    /// Left column
    pub x1: i32,
    /// Top row
    pub y1: i32,
    /// Width in grid units
    pub w: i32,
    /// Height in grid units
    pub h: i32,
    /// Right edge, `x1 + w`
    pub x2: i32,
    /// Bottom edge, `y1 + h`
    pub y2: i32,
    /// Color id, mapped to RGBA by the renderer's palette
    pub color: ColorId,
    /// Generation region id; mirrored twins share it
    pub id: PartId,
    /// Position per simulated tick
    pub path: Vec<Position>,
}

impl Rectangle {
    /// Create a rectangle with derived far edges and an empty path
    pub const fn new(x1: i32, y1: i32, w: i32, h: i32, color: ColorId, id: PartId) -> Self {
        Self {
            x1,
            y1,
            w,
            h,
            x2: x1 + w,
            y2: y1 + h,
            color,
            id,
            path: Vec::new(),
        }
    }

    /// Current boundary coordinates
    pub const fn bounds(&self) -> Bounds {
        Bounds {
            x1: self.x1,
            y1: self.y1,
            x2: self.x2,
            y2: self.y2,
        }
    }

    /// Current top-left position
    pub const fn position(&self) -> Position {
        Position::new(self.x1, self.y1)
    }

    /// Reset the path to `hold` copies of the current position
    pub fn populate(&mut self, hold: usize) {
        let position = self.position();
        self.path.clear();
        self.path.resize(hold, position);
    }

    /// Append the current position to the path
    pub fn record(&mut self) {
        self.path.push(self.position());
    }

    /// Move one unit in `direction` and store the new position at `path[time]`
    ///
    /// If the path is shorter than `time`, the gap is filled with the position held
    /// before the move.
    pub fn shift(&mut self, direction: Direction, time: usize) {
        let before = self.position();
        let (dx, dy) = direction.delta();
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;

        let after = self.position();
        if let Some(slot) = self.path.get_mut(time) {
            *slot = after;
        } else {
            self.path.resize(time, before);
            self.path.push(after);
        }
    }

    /// Recorded position at tick `tick`
    pub fn position_at(&self, tick: usize) -> Option<Position> {
        self.path.get(tick).copied()
    }
}

/// Collect the bounds of every part
pub fn bounds_of(parts: &[Rectangle]) -> Vec<Bounds> {
    parts.iter().map(Rectangle::bounds).collect()
}
