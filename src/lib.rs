//! Hole filling for grayscale images by inverse distance weighted interpolation
//!
//! The library classifies unknown pixels from a mask, finds the known pixels
//! bordering them, and reconstructs each hole as a weighted average of the
//! boundary where influence falls off with distance.

#![forbid(unsafe_code)]

/// Core algorithm implementation including classification and the fill pipeline
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for distance weighting and interpolation
pub mod math;
/// Spatial grid management and connectivity rules
pub mod spatial;

pub use io::error::{FillError, Result};
