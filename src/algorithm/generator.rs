//! Apparatus generation: configuration, validation and orchestration
//!
//! One [`ApparatusGenerator`] is created per configuration and reused for every
//! regeneration. Each call to [`ApparatusGenerator::generate`] starts from fresh pass
//! state (a newly picked main color and a zeroed region id counter), builds a line grid
//! and extracts its rectangles.
//!
//! # Mirrored twins
//!
//! Mirror copies duplicate a cell's occupant verbatim, so under symmetry the two halves
//! of a mirrored region carry the same region id. A rectangle therefore shares its `id`
//! with at most its horizontal and vertical mirror images, and with nothing else. The
//! motion scheduler relies on this to move twins together.

use crate::algorithm::builder::GridBuilder;
use crate::algorithm::color::{ColorMode, ColorState};
use crate::algorithm::extraction::extract;
use crate::io::configuration::{
    DEFAULT_COLOR_COUNT, DEFAULT_RADIUS_X, DEFAULT_RADIUS_Y, GRID_MARGIN, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_configuration};
use crate::math::random::RandomSource;
use crate::spatial::cell::{CellGrid, ColorId};
use crate::spatial::rectangle::Rectangle;
use serde::{Deserialize, Serialize};

/// Immutable generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
// Symmetry flags and the simple switch are independent toggles
#[allow(clippy::struct_excessive_bools)]
pub struct GeneratorConfig {
    /// Horizontal radius of the silhouette ellipse, in grid units
    pub radius_x: f64,
    /// Vertical radius of the silhouette ellipse, in grid units
    pub radius_y: f64,
    /// Probability of starting a region at a junction of two regions
    #[serde(alias = "initiate_chance")]
    pub chance_new: f64,
    /// Probability of continuing a region across an open boundary
    #[serde(alias = "extension_chance")]
    pub chance_extend: f64,
    /// Probability of joining the upper region when two regions meet at a corner
    #[serde(alias = "vertical_chance")]
    pub chance_vertical: f64,
    /// Softens the silhouette: 0 gives the most ragged outline, 1 a crisp ellipse
    pub roundness: f64,
    /// Probability of starting a region on empty ground
    pub solidness: f64,
    /// Mirror the right half onto the left half
    pub horizontal_symmetry: bool,
    /// Mirror the bottom half onto the top half
    pub vertical_symmetry: bool,
    /// Color assignment strategy
    pub color_mode: ColorMode,
    /// Bias towards reusing a neighbor's color in [`ColorMode::Group`]
    pub group_size: f64,
    /// Available color ids
    pub colors: Vec<ColorId>,
    /// Bypass every geometric gate and rely on the probabilities alone
    pub simple: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            radius_x: DEFAULT_RADIUS_X,
            radius_y: DEFAULT_RADIUS_Y,
            chance_new: 0.8,
            chance_extend: 0.8,
            chance_vertical: 0.8,
            roundness: 0.1,
            solidness: 0.5,
            horizontal_symmetry: true,
            vertical_symmetry: false,
            color_mode: ColorMode::Group,
            group_size: 0.8,
            colors: (0..DEFAULT_COLOR_COUNT).collect(),
            simple: false,
        }
    }
}

impl GeneratorConfig {
    /// Preset producing dense, machine-like assemblies
    pub fn assembly() -> Self {
        Self {
            solidness: 0.6,
            chance_new: 0.9,
            chance_extend: 0.88,
            chance_vertical: 0.5,
            roundness: 0.0,
            group_size: 0.6,
            ..Self::default()
        }
    }

    /// Grid extents `(xdim, ydim)` leaving a margin around the ellipse
    pub fn dimensions(&self) -> (usize, usize) {
        let extent = |radius: f64| 2.0f64.mul_add(radius, GRID_MARGIN).round().max(0.0) as usize;
        (extent(self.radius_x), extent(self.radius_y))
    }

    /// Check every parameter for generation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - A radius is not a positive finite number
    /// - A probability lies outside `[0, 1]`
    /// - The color list is empty
    /// - The grid would exceed the maximum dimension
    pub fn validate(&self) -> Result<()> {
        for (parameter, radius) in [("radius_x", self.radius_x), ("radius_y", self.radius_y)] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(invalid_configuration(
                    parameter,
                    &radius,
                    &"radius must be a positive finite number",
                ));
            }
        }

        for (parameter, probability) in [
            ("chance_new", self.chance_new),
            ("chance_extend", self.chance_extend),
            ("chance_vertical", self.chance_vertical),
            ("roundness", self.roundness),
            ("solidness", self.solidness),
            ("group_size", self.group_size),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(invalid_configuration(
                    parameter,
                    &probability,
                    &"must lie within [0, 1]",
                ));
            }
        }

        if self.colors.is_empty() {
            return Err(invalid_configuration(
                "colors",
                &"[]",
                &"at least one color is required",
            ));
        }

        let (xdim, ydim) = self.dimensions();
        if xdim.max(ydim) > MAX_GRID_DIMENSION {
            return Err(invalid_configuration(
                "radius",
                &format!("{xdim}x{ydim}"),
                &format!("grid exceeds {MAX_GRID_DIMENSION} units"),
            ));
        }

        Ok(())
    }
}

/// Generates apparatus instances for one validated configuration
#[derive(Debug, Clone)]
pub struct ApparatusGenerator<R> {
    config: GeneratorConfig,
    rng: R,
    xdim: usize,
    ydim: usize,
}

impl<R: RandomSource> ApparatusGenerator<R> {
    /// Create a generator after validating `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the configuration fails validation
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let (xdim, ydim) = config.dimensions();
        Ok(Self {
            config,
            rng,
            xdim,
            ydim,
        })
    }

    /// Generation parameters
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Horizontal grid extent
    pub const fn xdim(&self) -> usize {
        self.xdim
    }

    /// Vertical grid extent
    pub const fn ydim(&self) -> usize {
        self.ydim
    }

    /// Build a fresh line grid without extracting rectangles
    pub fn build_grid(&mut self) -> CellGrid {
        let mut state = ColorState::start(&self.config.colors, &mut self.rng);
        let grid = GridBuilder::new(&self.config).build(&mut state, &mut self.rng);
        log::trace!(
            "Built {}x{} grid with {} regions",
            grid.cols(),
            grid.rows(),
            state.issued_ids()
        );
        grid
    }

    /// Generate a new apparatus
    pub fn generate(&mut self) -> Vec<Rectangle> {
        let grid = self.build_grid();
        let parts = extract(&grid);
        log::debug!(
            "Generated apparatus with {} parts covering {} cells",
            parts.len(),
            grid.occupied_count()
        );
        parts
    }
}
