//! Line-grid construction
//!
//! The grid is scanned row-major. Row 0 and column 0 stay boundary cells; every other
//! cell is either a mirror copy of an already built counterpart or derived from its
//! left and top neighbors through the rule table in [`crate::algorithm::rules`].

use crate::algorithm::color::ColorState;
use crate::algorithm::generator::GeneratorConfig;
use crate::algorithm::rules::{DecisionContext, decide};
use crate::math::random::RandomSource;
use crate::spatial::cell::{Cell, CellGrid};

/// Builds one line grid for a configuration
#[derive(Debug, Clone, Copy)]
pub struct GridBuilder<'a> {
    config: &'a GeneratorConfig,
    context: DecisionContext<'a>,
    rows: usize,
    cols: usize,
}

impl<'a> GridBuilder<'a> {
    /// Prepare a builder; the grid has `ydim + 1` rows and `xdim + 1` columns
    pub fn new(config: &'a GeneratorConfig) -> Self {
        let (xdim, ydim) = config.dimensions();
        Self {
            config,
            context: DecisionContext::new(config, xdim, ydim),
            rows: ydim + 1,
            cols: xdim + 1,
        }
    }

    /// Grid shape as `(rows, cols)`
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Build the grid, issuing colors and region ids through `state`
    pub fn build<R: RandomSource + ?Sized>(&self, state: &mut ColorState, rng: &mut R) -> CellGrid {
        let mut grid = CellGrid::new(self.rows, self.cols);

        for y in 1..self.rows {
            for x in 1..self.cols {
                let cell = if self.config.horizontal_symmetry && 2 * x > self.cols {
                    self.mirror_column(&grid, x, y)
                } else if self.config.vertical_symmetry && 2 * y > self.rows {
                    self.mirror_row(&grid, x, y)
                } else {
                    let left = grid.cell(x - 1, y);
                    let top = grid.cell(x, y - 1);
                    decide(&self.context, left, top, x, y, rng)
                        .into_cell(left, top, self.config, state, rng)
                };
                grid.set(x, y, cell);
            }
        }

        grid
    }

    // The vertical line left of the copy is the one right of its counterpart.
    fn mirror_column(&self, grid: &CellGrid, x: usize, y: usize) -> Cell {
        let mut cell = grid.cell(self.cols - x, y);
        let edge_source = self.cols - x + 1;
        if edge_source != x {
            cell.has_left_edge = grid.cell(edge_source, y).has_left_edge;
        }
        cell
    }

    // The horizontal line above the copy is the one below its counterpart.
    fn mirror_row(&self, grid: &CellGrid, x: usize, y: usize) -> Cell {
        let mut cell = grid.cell(x, self.rows - y);
        let edge_source = self.rows - y + 1;
        if edge_source != y {
            cell.has_top_edge = grid.cell(x, edge_source).has_top_edge;
        }
        cell
    }
}
