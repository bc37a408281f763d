//! Single-pass hole filling pipeline
//!
//! Classifies holes and their boundary once, then interpolates every hole
//! pixel from the original boundary snapshot. Filled values never feed back
//! into later interpolations, so the output is independent of fill order.

use rayon::prelude::*;

use crate::algorithm::boundary::{boundary_samples, classify_boundary};
use crate::algorithm::holes::classify_holes;
use crate::algorithm::pixelset::PixelSet;
use crate::io::error::{FillError, Result, invalid_parameter};
use crate::math::weighting::{BoundarySample, interpolate};
use crate::spatial::neighbors::Connectivity;
use crate::spatial::{PixelGrid, Sample};

/// Behavior when a hole pixel has no boundary samples to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyBoundaryPolicy {
    /// Report an error naming an affected pixel
    #[default]
    Fail,
    /// Leave affected pixels unknown and count them in the outcome
    LeaveUnknown,
}

/// Parameters controlling a fill run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillConfig {
    /// Adjacency rule for boundary classification
    pub connectivity: Connectivity,
    /// Falloff exponent applied to distances
    pub z: u32,
    /// Positive stabilizer added to each weighted distance
    pub epsilon: f64,
    /// Behavior when no boundary samples exist
    pub empty_boundary: EmptyBoundaryPolicy,
}

impl FillConfig {
    /// Create a configuration that fails on an empty boundary
    pub const fn new(connectivity: Connectivity, z: u32, epsilon: f64) -> Self {
        Self {
            connectivity,
            z,
            epsilon,
            empty_boundary: EmptyBoundaryPolicy::Fail,
        }
    }

    /// Replace the empty boundary policy
    #[must_use]
    pub const fn with_empty_boundary(mut self, policy: EmptyBoundaryPolicy) -> Self {
        self.empty_boundary = policy;
        self
    }

    /// Check parameter ranges before running the pipeline
    ///
    /// # Errors
    ///
    /// Returns [`FillError::InvalidParameter`] when `z` is zero or `epsilon`
    /// is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.z == 0 {
            return Err(invalid_parameter(
                "z",
                &self.z,
                &"falloff exponent must be at least 1",
            ));
        }

        if self.epsilon <= 0.0 || !self.epsilon.is_finite() {
            return Err(invalid_parameter(
                "epsilon",
                &self.epsilon,
                &"must be a positive finite number",
            ));
        }

        Ok(())
    }
}

/// Result of a completed fill run
#[derive(Debug, Clone)]
pub struct FillOutcome {
    /// Grid with hole pixels replaced by interpolated intensities
    pub grid: PixelGrid,
    /// Flat indices classified as holes
    pub holes: PixelSet,
    /// Flat indices classified as boundary
    pub boundary: PixelSet,
    /// Hole pixels left unknown under [`EmptyBoundaryPolicy::LeaveUnknown`]
    pub unfilled: usize,
}

impl FillOutcome {
    /// Count the hole pixels that received an interpolated value
    pub fn filled(&self) -> usize {
        self.holes.count().saturating_sub(self.unfilled)
    }
}

/// Fill every hole pixel from the original boundary snapshot
///
/// Classification and interpolation both read the input grid only. The
/// returned grid is a copy with interpolated intensities written into hole
/// positions.
///
/// # Errors
///
/// Returns [`FillError::InvalidParameter`] when the configuration fails
/// validation, or [`FillError::EmptyBoundary`] when every pixel is a hole
/// and the policy is [`EmptyBoundaryPolicy::Fail`].
pub fn fill_holes(grid: &PixelGrid, config: &FillConfig) -> Result<FillOutcome> {
    config.validate()?;

    let holes = classify_holes(grid);
    if holes.is_empty() {
        return Ok(FillOutcome {
            grid: grid.clone(),
            holes,
            boundary: PixelSet::new(grid.cells()),
            unfilled: 0,
        });
    }

    let boundary = classify_boundary(grid, &holes, config.connectivity);
    let samples = boundary_samples(grid, &boundary);
    let fills = compute_fill_values(grid, &holes, &samples, config)?;
    let unfilled = holes.count().saturating_sub(fills.len());

    let mut filled = grid.clone();
    for (index, value) in fills {
        let [x, y] = filled.coords_of(index);
        filled.set(x, y, Sample::Known(value))?;
    }

    Ok(FillOutcome {
        grid: filled,
        holes,
        boundary,
        unfilled,
    })
}

/// Interpolate all hole pixels in parallel against a fixed sample slice
fn compute_fill_values(
    grid: &PixelGrid,
    holes: &PixelSet,
    samples: &[BoundarySample],
    config: &FillConfig,
) -> Result<Vec<(usize, f32)>> {
    let hole_indices = holes.to_vec();

    // A global boundary snapshot is either available to every hole or to none
    if samples.is_empty() {
        return match config.empty_boundary {
            EmptyBoundaryPolicy::LeaveUnknown => Ok(Vec::new()),
            EmptyBoundaryPolicy::Fail => {
                let [x, y] = hole_indices
                    .first()
                    .map_or([0, 0], |&index| grid.coords_of(index));
                Err(FillError::EmptyBoundary { x, y })
            }
        };
    }

    let z = f64::from(config.z);
    let epsilon = config.epsilon;

    hole_indices
        .into_par_iter()
        .map(|index| {
            let position = grid.coords_of(index);
            let value = interpolate(position, samples, z, epsilon)?;
            Ok((index, value as f32))
        })
        .collect()
}
