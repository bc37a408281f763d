//! Mathematical utilities for the algorithm

/// Inverse distance weighting and interpolation
pub mod weighting;
