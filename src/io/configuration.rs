//! Constants, runtime defaults and the JSON settings file

use crate::algorithm::generator::GeneratorConfig;
use crate::algorithm::scheduler::AnimationConfig;
use crate::io::error::{ApparatusError, Result, file_system_error};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Grid geometry
/// Units added around the ellipse diameter on each axis
pub const GRID_MARGIN: f64 = 11.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Default horizontal ellipse radius
pub const DEFAULT_RADIUS_X: f64 = 24.0;
/// Default vertical ellipse radius
pub const DEFAULT_RADIUS_Y: f64 = 32.0;
/// Number of color ids available by default (matches the default palette)
pub const DEFAULT_COLOR_COUNT: usize = 20;
/// Ticks per animation cycle
pub const DEFAULT_SHUFFLE_LENGTH: usize = 220;
/// Ticks the assembled apparatus is held
pub const DEFAULT_FINAL_FRAME_DURATION: usize = 25;
/// Probability that a movement burst continues
pub const DEFAULT_MOVEMENT_LENGTH: f64 = 0.82;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Number of apparatuses generated per run
pub const DEFAULT_COUNT: usize = 1;
/// Pixels per grid unit
pub const DEFAULT_SCALE: u32 = 8;

// Rendering
/// Gap in pixels between a part's outline and its grid cell boundary
pub const PART_INSET: u32 = 2;
/// Width in pixels of a part's outline
pub const STROKE_WIDTH: u32 = 2;
/// Delay between GIF animation frames (30 frames per second)
pub const GIF_FRAME_DELAY_MS: u32 = 33;

/// Grid units of empty space around the motion extent
pub const CANVAS_MARGIN: u32 = 1;

// Output settings
/// Prefix of every output filename
pub const OUTPUT_PREFIX: &str = "apparatus";

// Progress bar display settings
/// Maximum number of apparatus progress bars shown at once
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Complete set of tunable parameters, loadable from JSON
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Generation parameters
    pub generator: GeneratorConfig,
    /// Animation cycle parameters
    pub animation: AnimationConfig,
}

impl Settings {
    /// Parse settings from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has mistyped fields
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ApparatusError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not valid settings JSON
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| file_system_error(path, "read settings", source))?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize settings as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| ApparatusError::ConfigParse {
            path: "<settings>".into(),
            source,
        })
    }

    /// Validate both parameter groups
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for the first invalid parameter
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.animation.validate()
    }
}
