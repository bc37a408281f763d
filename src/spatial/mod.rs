//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Pixel grid storage and access
//! - Neighborhood and connectivity rules

/// Pixel grid storage and sample state
pub mod grid;
/// Neighbor offsets and connectivity rules
pub mod neighbors;

pub use grid::{PixelGrid, Sample};
