/// Command-line front end driving generation, simulation and export
pub mod cli;
/// Constants, defaults and the JSON settings file
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Frame rasterization and PNG export
pub mod image;
/// Color palettes
pub mod palette;
/// Terminal progress bars
pub mod progress;
/// Animated GIF export of a cycle
pub mod visualization;
