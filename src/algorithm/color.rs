//! Color assignment for newly started regions
//!
//! The running "main color" and the region id counter live in [`ColorState`], which is
//! created fresh for every generation pass and threaded through the builder. Nothing
//! here is stored on the generator itself.

use crate::algorithm::generator::GeneratorConfig;
use crate::math::random::RandomSource;
use crate::spatial::cell::{ColorId, PartId};
use serde::{Deserialize, Serialize};

/// Probability threshold above which `main` mode replaces the main color
const MAIN_MODE_REPLACEMENT_THRESHOLD: f64 = 0.75;

/// Strategy for choosing the color of a new region
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Uniform pick from the color list for every region
    Random,
    /// Mostly the running main color, occasionally a uniform pick
    Main,
    /// Inherit a neighbor's color, occasionally switching to a uniform pick
    #[default]
    Group,
    /// Always the running main color
    Fixed,
}

/// Running state of one generation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    main_color: ColorId,
    next_id: PartId,
}

impl ColorState {
    /// Start a pass with a uniformly picked main color and a zeroed id counter
    pub fn start<R: RandomSource + ?Sized>(colors: &[ColorId], rng: &mut R) -> Self {
        let main_color = colors.get(rng.pick_index(colors.len())).copied().unwrap_or(0);
        Self::with_main_color(main_color)
    }

    /// Start a pass with a known main color
    pub const fn with_main_color(main_color: ColorId) -> Self {
        Self {
            main_color,
            next_id: 0,
        }
    }

    /// Current running main color
    pub const fn main_color(&self) -> ColorId {
        self.main_color
    }

    /// Number of region ids issued so far
    pub const fn issued_ids(&self) -> PartId {
        self.next_id
    }

    /// Issue the next region id
    pub const fn next_part_id(&mut self) -> PartId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Choose the color of a region starting between `left` and `top`
    ///
    /// `left` and `top` are the colors of the neighboring cells, if occupied.
    pub fn assign_color<R: RandomSource + ?Sized>(
        &mut self,
        config: &GeneratorConfig,
        left: Option<ColorId>,
        top: Option<ColorId>,
        rng: &mut R,
    ) -> ColorId {
        match config.color_mode {
            ColorMode::Random => self.pick(&config.colors, rng),
            ColorMode::Main => {
                if rng.next_uniform() > MAIN_MODE_REPLACEMENT_THRESHOLD {
                    self.pick(&config.colors, rng)
                } else {
                    self.main_color
                }
            }
            ColorMode::Group => {
                let candidate = if rng.next_uniform() > 0.5 { left } else { top };
                self.main_color = if rng.next_uniform() > config.group_size {
                    self.pick(&config.colors, rng)
                } else {
                    candidate.unwrap_or(self.main_color)
                };
                self.main_color
            }
            ColorMode::Fixed => self.main_color,
        }
    }

    fn pick<R: RandomSource + ?Sized>(&self, colors: &[ColorId], rng: &mut R) -> ColorId {
        colors
            .get(rng.pick_index(colors.len()))
            .copied()
            .unwrap_or(self.main_color)
    }
}
