//! Conversion of a finished line grid into rectangles

use crate::spatial::cell::{CellGrid, Occupant};
use crate::spatial::rectangle::Rectangle;

/// Top-left corner of a rectangle found in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    /// Column of the corner cell
    pub x: usize,
    /// Row of the corner cell
    pub y: usize,
    /// Region owning the corner
    pub occupant: Occupant,
}

/// Collect every rectangle corner in row-major order
///
/// A corner is an occupied cell carrying both a top and a left edge.
pub fn find_corners(grid: &CellGrid) -> Vec<Corner> {
    grid.iter()
        .filter(|(_, _, cell)| cell.is_corner())
        .filter_map(|(x, y, cell)| cell.occupant.map(|occupant| Corner { x, y, occupant }))
        .collect()
}

/// Width and height of the rectangle starting at `(x, y)`
///
/// Walks right until a vertical line and down until a horizontal line, stopping at the
/// grid extent.
pub fn measure(grid: &CellGrid, x: usize, y: usize) -> (usize, usize) {
    let mut width = 1;
    while x + width < grid.cols() && !grid.cell(x + width, y).has_left_edge {
        width += 1;
    }

    let mut height = 1;
    while y + height < grid.rows() && !grid.cell(x, y + height).has_top_edge {
        height += 1;
    }

    (width, height)
}

/// Extract all rectangles of a grid
///
/// For a grid produced by the builder the rectangles tile every occupied cell exactly
/// once.
pub fn extract(grid: &CellGrid) -> Vec<Rectangle> {
    find_corners(grid)
        .into_iter()
        .map(|corner| {
            let (width, height) = measure(grid, corner.x, corner.y);
            Rectangle::new(
                corner.x as i32,
                corner.y as i32,
                width as i32,
                height as i32,
                corner.occupant.color,
                corner.occupant.part,
            )
        })
        .collect()
}
