//! Inverse distance weighting over boundary samples
//!
//! Every boundary pixel contributes to a filled value with weight
//! `1 / (distance^z + epsilon)`, so near samples dominate while far samples
//! still pull the average slightly. The falloff exponent `z` controls how
//! quickly influence decays with distance.

use num_traits::{AsPrimitive, Float};

use crate::io::error::{FillError, Result};

/// A known boundary pixel with its position and intensity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySample {
    /// Pixel position as `[x, y]`
    pub position: [usize; 2],
    /// Normalized grayscale intensity
    pub intensity: f32,
}

/// Euclidean distance between two pixel positions
pub fn euclidean_distance<F>(a: [usize; 2], b: [usize; 2]) -> F
where
    F: Float + 'static,
    usize: AsPrimitive<F>,
{
    let dx: F = a[0].abs_diff(b[0]).as_();
    let dy: F = a[1].abs_diff(b[1]).as_();
    dx.mul_add(dx, dy * dy).sqrt()
}

/// Weight contributed by a boundary pixel at the given distance
///
/// A positive `epsilon` keeps the weight finite when the distance
/// approaches zero.
pub fn weight<F>(distance: F, z: F, epsilon: F) -> F
where
    F: Float,
{
    F::one() / (distance.powf(z) + epsilon)
}

/// Interpolate the intensity for a hole pixel from boundary samples
///
/// Computes the weighted average of all sample intensities using inverse
/// distance weights. The result depends only on the samples passed in, so
/// callers decide whether values come from the original image or include
/// previously filled pixels.
///
/// # Errors
///
/// Returns [`FillError::EmptyBoundary`] carrying the hole position when no
/// samples are available.
pub fn interpolate<F>(hole: [usize; 2], samples: &[BoundarySample], z: F, epsilon: F) -> Result<F>
where
    F: Float + 'static,
    usize: AsPrimitive<F>,
    f32: AsPrimitive<F>,
{
    if samples.is_empty() {
        return Err(FillError::EmptyBoundary {
            x: hole[0],
            y: hole[1],
        });
    }

    let (numerator, denominator) = samples.iter().fold(
        (F::zero(), F::zero()),
        |(numerator, denominator), sample| {
            let distance = euclidean_distance(hole, sample.position);
            let w = weight(distance, z, epsilon);
            (
                w.mul_add(sample.intensity.as_(), numerator),
                denominator + w,
            )
        },
    );

    Ok(numerator / denominator)
}
