//! Grid state management for partially known grayscale images
//!
//! Stores one [`Sample`] per pixel in a dense 2D array. Positions use `[x, y]`
//! order at the API surface while the backing array is indexed row-major, and
//! all accessors translate between the two so callers never see the storage
//! layout.

use ndarray::Array2;

use crate::io::error::{FillError, Result};

/// Intensity state of a single pixel
///
/// Known pixels carry a normalized grayscale intensity in `[0.0, 1.0]`.
/// Unknown pixels belong to a hole and carry no value until filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Pixel intensity is available
    Known(f32),
    /// Pixel belongs to a hole and has no intensity yet
    Unknown,
}

impl Sample {
    /// Check whether this sample is missing its intensity
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Get the intensity if one is available
    pub const fn intensity(self) -> Option<f32> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }
}

/// Dense pixel grid with per-pixel known/unknown state
///
/// Dimensions are fixed at construction. Out-of-range access is reported
/// through [`FillError::OutOfRange`] rather than panicking, so callers can
/// surface the offending coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    /// Per-pixel samples indexed by (row, col)
    samples: Array2<Sample>,

    /// Grid dimensions as (width, height)
    dimensions: (usize, usize),
}

impl PixelGrid {
    /// Build a grid from rows of samples
    ///
    /// # Errors
    ///
    /// Returns [`FillError::MalformedGrid`] when rows have differing lengths
    /// or the row data cannot form a rectangular array.
    pub fn from_rows(rows: Vec<Vec<Sample>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some(ragged) = rows.iter().position(|row| row.len() != width) {
            return Err(FillError::MalformedGrid {
                reason: format!(
                    "row {ragged} has {} samples, expected {width}",
                    rows.get(ragged).map_or(0, Vec::len)
                ),
            });
        }

        let flat: Vec<Sample> = rows.into_iter().flatten().collect();
        Self::from_raw(width, height, flat)
    }

    /// Build a grid from a flat row-major sample buffer
    ///
    /// # Errors
    ///
    /// Returns [`FillError::MalformedGrid`] when the buffer length does not
    /// match `width * height`.
    pub fn from_raw(width: usize, height: usize, samples: Vec<Sample>) -> Result<Self> {
        let expected = width * height;
        if samples.len() != expected {
            return Err(FillError::MalformedGrid {
                reason: format!(
                    "sample buffer holds {} values, expected {expected} for {width}x{height}",
                    samples.len()
                ),
            });
        }

        let samples = Array2::from_shape_vec((height, width), samples).map_err(|source| {
            FillError::MalformedGrid {
                reason: source.to_string(),
            }
        })?;

        Ok(Self {
            samples,
            dimensions: (width, height),
        })
    }

    /// Get the grid width in pixels
    pub const fn width(&self) -> usize {
        self.dimensions.0
    }

    /// Get the grid height in pixels
    pub const fn height(&self) -> usize {
        self.dimensions.1
    }

    /// Get the total number of pixels
    pub const fn cells(&self) -> usize {
        self.width() * self.height()
    }

    /// Check whether a position lies within the grid
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Convert a position to its flat row-major index
    pub const fn flat_index(&self, x: usize, y: usize) -> usize {
        y * self.width() + x
    }

    /// Convert a flat row-major index back to a position
    pub const fn coords_of(&self, index: usize) -> [usize; 2] {
        [index % self.width(), index / self.width()]
    }

    /// Read the sample at a position
    ///
    /// # Errors
    ///
    /// Returns [`FillError::OutOfRange`] when the position lies outside the
    /// grid.
    pub fn get(&self, x: usize, y: usize) -> Result<Sample> {
        self.samples
            .get([y, x])
            .copied()
            .ok_or_else(|| FillError::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Overwrite the sample at a position
    ///
    /// # Errors
    ///
    /// Returns [`FillError::OutOfRange`] when the position lies outside the
    /// grid.
    pub fn set(&mut self, x: usize, y: usize, sample: Sample) -> Result<()> {
        let (width, height) = self.dimensions;
        match self.samples.get_mut([y, x]) {
            Some(slot) => {
                *slot = sample;
                Ok(())
            }
            None => Err(FillError::OutOfRange {
                x,
                y,
                width,
                height,
            }),
        }
    }

    /// Produce a copy of the grid with one sample replaced
    ///
    /// # Errors
    ///
    /// Returns [`FillError::OutOfRange`] when the position lies outside the
    /// grid.
    pub fn with_value(&self, x: usize, y: usize, sample: Sample) -> Result<Self> {
        let mut updated = self.clone();
        updated.set(x, y, sample)?;
        Ok(updated)
    }

    /// Iterate over all samples with their positions in row-major order
    pub fn samples(&self) -> impl Iterator<Item = ([usize; 2], Sample)> + '_ {
        self.samples
            .indexed_iter()
            .map(|((y, x), sample)| ([x, y], *sample))
    }
}
