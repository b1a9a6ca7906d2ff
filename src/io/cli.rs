//! Command-line interface for batch generation of apparatuses and their animations

use crate::algorithm::color::ColorMode;
use crate::algorithm::generator::{ApparatusGenerator, GeneratorConfig};
use crate::algorithm::scheduler::MotionScheduler;
use crate::io::configuration::{
    CANVAS_MARGIN, DEFAULT_COUNT, DEFAULT_SCALE, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
    OUTPUT_PREFIX, Settings,
};
use crate::io::error::{Result, invalid_configuration};
use crate::io::image::{Canvas, export_png};
use crate::io::palette::Palette;
use crate::io::progress::ProgressManager;
use crate::io::visualization::CycleAnimation;
use crate::math::random::SeededRandom;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "apparatus")]
#[command(
    author,
    version,
    about = "Generate symmetric rectangle apparatuses and animate their assembly"
)]
/// Command-line arguments for apparatus generation
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving the generated images
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of apparatuses to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// JSON settings file; missing fields take their defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Built-in palette name
    #[arg(short, long, default_value = "assembly")]
    pub palette: String,

    /// Pixels per grid unit
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Override the color assignment mode
    #[arg(long, value_enum)]
    pub color_mode: Option<ColorMode>,

    /// Override the horizontal ellipse radius
    #[arg(long)]
    pub radius_x: Option<f64>,

    /// Override the vertical ellipse radius
    #[arg(long)]
    pub radius_y: Option<f64>,

    /// Also export the assembly animation as a GIF
    #[arg(short, long)]
    pub animate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate apparatuses even if their output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Settings after applying the config file and command-line overrides
    ///
    /// Without a config file the sketch's assembly preset is used, colored with every
    /// color of `palette`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be loaded
    /// - A color id is missing from `palette`
    /// - The resulting settings are invalid
    pub fn settings(&self, palette: &Palette) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_json_file(path)?,
            None => Settings {
                generator: GeneratorConfig {
                    colors: palette.color_ids(),
                    ..GeneratorConfig::assembly()
                },
                ..Settings::default()
            },
        };

        if let Some(mode) = self.color_mode {
            settings.generator.color_mode = mode;
        }
        if let Some(radius) = self.radius_x {
            settings.generator.radius_x = radius;
        }
        if let Some(radius) = self.radius_y {
            settings.generator.radius_y = radius;
        }
        if self.scale == 0 {
            return Err(invalid_configuration(
                "scale",
                &self.scale,
                &"must be at least one pixel per unit",
            ));
        }

        let outside = settings
            .generator
            .colors
            .iter()
            .find(|&&color| color >= palette.len());
        if let Some(color) = outside {
            return Err(invalid_configuration(
                "colors",
                color,
                &format!("palette '{}' has {} colors", self.palette, palette.len()),
            ));
        }

        settings.validate()?;
        Ok(settings)
    }

    /// PNG path of apparatus `index`
    pub fn png_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{}.png", self.output_stem(index)))
    }

    /// GIF path of apparatus `index`
    pub fn gif_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{}.gif", self.output_stem(index)))
    }

    /// Seed of apparatus `index`; each apparatus is reproducible on its own
    pub const fn apparatus_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }

    fn output_stem(&self, index: usize) -> String {
        format!("{OUTPUT_PREFIX}_{}_{index:03}", self.seed)
    }
}

/// Orchestrates generation, simulation and export with progress tracking
pub struct ApparatusRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ApparatusRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested apparatus
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or an export fails
    pub fn run(&mut self) -> Result<()> {
        let palette = Palette::by_name(&self.cli.palette)?;
        let settings = self.cli.settings(&palette)?;

        let pending: Vec<usize> = (0..self.cli.count)
            .filter(|&index| self.should_generate(index))
            .collect();

        if pending.is_empty() {
            log::info!("Nothing to generate");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(pending.len());
        }

        for (slot, &index) in pending.iter().enumerate() {
            self.generate_one(&settings, &palette, index, slot)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        log::info!(
            "Generated {} apparatus(es) in {}",
            pending.len(),
            self.cli.output_dir.display()
        );
        Ok(())
    }

    fn should_generate(&self, index: usize) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let png = self.cli.png_path(index);
        let done = png.exists() && (!self.cli.animate || self.cli.gif_path(index).exists());
        if done {
            log::warn!("Skipping: {} (output exists)", png.display());
        }
        !done
    }

    fn generate_one(
        &mut self,
        settings: &Settings,
        palette: &Palette,
        index: usize,
        slot: usize,
    ) -> Result<()> {
        let start_time = Instant::now();
        let png_path = self.cli.png_path(index);
        let stages = if self.cli.animate { 4 } else { 3 };
        self.start_stage(slot, &png_path, stages);

        let mut rng = SeededRandom::new(self.cli.apparatus_seed(index));
        let scheduler_rng = rng.fork();

        let mut generator = ApparatusGenerator::new(settings.generator.clone(), rng)?;
        let mut parts = generator.generate();
        if parts.is_empty() {
            log::warn!("Apparatus {index} has no parts; writing background only");
        }
        self.advance_stage(slot);

        let mut scheduler = MotionScheduler::new(settings.animation, scheduler_rng)?;
        let summary = scheduler.run_cycle(&mut parts);
        self.advance_stage(slot);

        let grid = (generator.xdim(), generator.ydim());
        let canvas = Canvas::framing(&parts, CANVAS_MARGIN, grid);
        export_png(&parts, 0, palette, self.cli.scale, &canvas, &png_path)?;
        self.advance_stage(slot);

        if self.cli.animate {
            let gif_path = self.cli.gif_path(index);
            CycleAnimation::new(
                &parts,
                palette,
                settings.animation.shuffle_length,
                self.cli.scale,
                canvas,
            )
            .export_gif(&gif_path, GIF_FRAME_DELAY_MS)?;
            self.advance_stage(slot);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete(slot);
        }

        log::info!(
            "Apparatus {index}: {} parts, {} bursts, {} shifts in {:.2?}",
            parts.len(),
            summary.bursts,
            summary.shifts,
            start_time.elapsed()
        );
        Ok(())
    }

    fn start_stage(&mut self, slot: usize, path: &Path, stages: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            pm.start(slot, &name, stages);
        }
    }

    fn advance_stage(&mut self, slot: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(slot);
        }
    }
}
