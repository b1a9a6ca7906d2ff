/// Population-indexed membership set for neighborhood closures
pub mod bitset;
/// Line-grid construction with mirror symmetry
pub mod builder;
/// Color assignment modes and per-generation running state
pub mod color;
/// Rectangle extraction from a finished line grid
pub mod extraction;
/// Apparatus generation orchestration and configuration
pub mod generator;
/// Directional neighborhood closure over a rectangle population
pub mod neighborhood;
/// Per-cell decision rules for the line grid
pub mod rules;
/// Tick-driven motion scheduling and path recording
pub mod scheduler;
