//! Line-grid cells and their storage
//!
//! A cell is one intersection point of the generation grid. Its edge flags mark where a
//! rectangle boundary passes through that point: `has_top_edge` is a horizontal line
//! running along the cell's top, `has_left_edge` a vertical line along its left side.

use ndarray::Array2;

/// Identifier of an externally owned color
pub type ColorId = usize;

/// Identifier of a generation-time region
pub type PartId = u32;

/// Region membership carried by an occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    /// Color of the region
    pub color: ColorId,
    /// Region identifier shared by every cell of the region (and its mirror twin)
    pub part: PartId,
}

/// Single grid intersection with boundary and occupancy information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// A horizontal boundary passes along the top of this cell
    pub has_top_edge: bool,
    /// A vertical boundary passes along the left of this cell
    pub has_left_edge: bool,
    /// Region this cell belongs to, if any
    pub occupant: Option<Occupant>,
}

impl Cell {
    /// Unoccupied cell without edges, used for row 0 and column 0
    pub const BOUNDARY: Self = Self {
        has_top_edge: false,
        has_left_edge: false,
        occupant: None,
    };

    /// Unoccupied cell with the given edges
    pub const fn blank(has_top_edge: bool, has_left_edge: bool) -> Self {
        Self {
            has_top_edge,
            has_left_edge,
            occupant: None,
        }
    }

    /// Occupied cell with the given edges
    pub const fn occupied_by(occupant: Occupant, has_top_edge: bool, has_left_edge: bool) -> Self {
        Self {
            has_top_edge,
            has_left_edge,
            occupant: Some(occupant),
        }
    }

    /// Whether the cell belongs to a region
    pub const fn occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Whether the cell is the top-left corner of a rectangle
    pub const fn is_corner(&self) -> bool {
        self.has_top_edge && self.has_left_edge && self.occupied()
    }

    /// Color of the occupying region
    pub fn color(&self) -> Option<ColorId> {
        self.occupant.map(|occupant| occupant.color)
    }
}

/// Finished (or in-progress) generation grid, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Array2<Cell>,
}

impl CellGrid {
    /// Create a grid filled with boundary cells
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::BOUNDARY),
        }
    }

    /// Number of rows (`ydim + 1`)
    pub fn rows(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of columns (`xdim + 1`)
    pub fn cols(&self) -> usize {
        self.cells.dim().1
    }

    /// Cell at column `x`, row `y`; out-of-range reads yield a boundary cell
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells.get([y, x]).copied().unwrap_or(Cell::BOUNDARY)
    }

    /// Overwrite the cell at column `x`, row `y`; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut([y, x]) {
            *slot = cell;
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupied()).count()
    }

    /// Iterate over `(x, y, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| (x, y, *cell))
    }
}
