//! Local decision rules of the line-grid builder
//!
//! Every non-boundary, non-mirrored cell is derived from its left and top neighbors
//! alone. [`decide`] classifies the cell into a [`CellDecision`] using a handful of
//! probabilistic primitives gated by ellipse membership, and
//! [`CellDecision::into_cell`] materializes that decision, drawing a color and region
//! id only for new regions.

use crate::algorithm::color::ColorState;
use crate::algorithm::generator::GeneratorConfig;
use crate::math::geometry::Ellipse;
use crate::math::random::RandomSource;
use crate::spatial::cell::{Cell, Occupant};

/// Neighbor a cell can continue from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// The cell to the left; the region grows rightward along its top row
    Left,
    /// The cell above; the region grows downward along its left column
    Top,
}

/// Outcome of the rule table for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDecision {
    /// Unoccupied cell, optionally closing the neighboring region(s)
    Blank {
        /// Close a region above
        top_edge: bool,
        /// Close a region to the left
        left_edge: bool,
    },
    /// Unoccupied junction closing both neighbors
    Undecided,
    /// Interior continuation of the region shared by both neighbors
    Merged,
    /// Continuation of one neighbor's region along an open boundary
    Extended {
        /// Neighbor whose region continues
        from: Neighbor,
    },
    /// Top-left corner of a fresh region
    New,
}

impl CellDecision {
    /// Materialize the decision into a cell
    ///
    /// Only [`CellDecision::New`] consumes randomness (for its color).
    pub fn into_cell<R: RandomSource + ?Sized>(
        self,
        left: Cell,
        top: Cell,
        config: &GeneratorConfig,
        state: &mut ColorState,
        rng: &mut R,
    ) -> Cell {
        match self {
            Self::Blank {
                top_edge,
                left_edge,
            } => Cell::blank(top_edge, left_edge),
            Self::Undecided => Cell::blank(true, true),
            Self::Merged => continue_region(left, false, false),
            Self::Extended {
                from: Neighbor::Left,
            } => continue_region(left, true, false),
            Self::Extended {
                from: Neighbor::Top,
            } => continue_region(top, false, true),
            Self::New => {
                let color = state.assign_color(config, left.color(), top.color(), rng);
                let part = state.next_part_id();
                Cell::occupied_by(Occupant { color, part }, true, true)
            }
        }
    }
}

fn continue_region(source: Cell, has_top_edge: bool, has_left_edge: bool) -> Cell {
    source.occupant.map_or_else(
        || Cell::blank(has_top_edge, has_left_edge),
        |occupant| Cell::occupied_by(occupant, has_top_edge, has_left_edge),
    )
}

/// Probabilistic primitives shared by every cell of one grid
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    config: &'a GeneratorConfig,
    ellipse: Ellipse,
}

impl<'a> DecisionContext<'a> {
    /// Create the context for a grid of `xdim × ydim` units
    pub fn new(config: &'a GeneratorConfig, xdim: usize, ydim: usize) -> Self {
        let center = (xdim as f64 / 2.0, ydim as f64 / 2.0);
        Self {
            config,
            ellipse: Ellipse::new(center, (config.radius_x, config.radius_y)),
        }
    }

    /// Whether `(x, y)` lies inside the ellipse with randomly fuzzed radii
    ///
    /// Negative `fuzzy` shrinks the radii by up to that fraction, positive grows them.
    pub fn active_position<R: RandomSource + ?Sized>(
        &self,
        x: usize,
        y: usize,
        fuzzy: f64,
        rng: &mut R,
    ) -> bool {
        let fuzziness = rng.next_uniform().mul_add(fuzzy, 1.0);
        self.ellipse.contains_scaled(x as f64, y as f64, fuzziness)
    }

    /// Start a region where neither neighbor is occupied
    pub fn start_new_from_blank<R: RandomSource + ?Sized>(
        &self,
        x: usize,
        y: usize,
        rng: &mut R,
    ) -> bool {
        if self.config.simple {
            return true;
        }
        if !self.active_position(x, y, -(1.0 - self.config.roundness), rng) {
            return false;
        }
        rng.chance(self.config.solidness)
    }

    /// Start a region at a junction of two occupied neighbors
    pub fn start_new<R: RandomSource + ?Sized>(&self, x: usize, y: usize, rng: &mut R) -> bool {
        if self.config.simple {
            return true;
        }
        if !self.active_position(x, y, 0.0, rng) {
            return false;
        }
        rng.chance(self.config.chance_new)
    }

    /// Continue a neighbor's region across this cell
    pub fn extend<R: RandomSource + ?Sized>(&self, x: usize, y: usize, rng: &mut R) -> bool {
        if !self.config.simple && !self.active_position(x, y, 1.0 - self.config.roundness, rng) {
            return false;
        }
        rng.chance(self.config.chance_extend)
    }

    /// Prefer the region above when two regions meet at a corner
    pub fn vertical_dir<R: RandomSource + ?Sized>(&self, rng: &mut R) -> bool {
        rng.chance(self.config.chance_vertical)
    }
}

/// Classify cell `(x, y)` from its left and top neighbors
pub fn decide<R: RandomSource + ?Sized>(
    context: &DecisionContext<'_>,
    left: Cell,
    top: Cell,
    x: usize,
    y: usize,
    rng: &mut R,
) -> CellDecision {
    match (left.occupied(), top.occupied()) {
        (false, false) => blank_or_new(context, x, y, false, false, rng),
        (true, false) => {
            if left.has_top_edge && context.extend(x, y, rng) {
                return CellDecision::Extended {
                    from: Neighbor::Left,
                };
            }
            blank_or_new(context, x, y, false, true, rng)
        }
        (false, true) => {
            if top.has_left_edge && context.extend(x, y, rng) {
                return CellDecision::Extended {
                    from: Neighbor::Top,
                };
            }
            blank_or_new(context, x, y, true, false, rng)
        }
        (true, true) => match (left.has_top_edge, top.has_left_edge) {
            (false, false) => CellDecision::Merged,
            (true, false) => extend_or_junction(context, Neighbor::Left, x, y, rng),
            (false, true) => extend_or_junction(context, Neighbor::Top, x, y, rng),
            (true, true) => {
                let from = if context.vertical_dir(rng) {
                    Neighbor::Top
                } else {
                    Neighbor::Left
                };
                CellDecision::Extended { from }
            }
        },
    }
}

fn blank_or_new<R: RandomSource + ?Sized>(
    context: &DecisionContext<'_>,
    x: usize,
    y: usize,
    top_edge: bool,
    left_edge: bool,
    rng: &mut R,
) -> CellDecision {
    if context.start_new_from_blank(x, y, rng) {
        CellDecision::New
    } else {
        CellDecision::Blank {
            top_edge,
            left_edge,
        }
    }
}

fn extend_or_junction<R: RandomSource + ?Sized>(
    context: &DecisionContext<'_>,
    from: Neighbor,
    x: usize,
    y: usize,
    rng: &mut R,
) -> CellDecision {
    if context.extend(x, y, rng) {
        CellDecision::Extended { from }
    } else if context.start_new(x, y, rng) {
        CellDecision::New
    } else {
        CellDecision::Undecided
    }
}
