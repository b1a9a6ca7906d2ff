//! Mathematical utilities shared by generation and animation

/// Ellipse membership used to shape the apparatus silhouette
pub mod geometry;
/// Injectable uniform random sources
pub mod random;
