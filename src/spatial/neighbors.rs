//! Neighborhood definitions for pixel connectivity
//!
//! Hole and boundary classification both walk the pixels adjacent to a
//! position. Four-connectivity visits the cardinal neighbors only, while
//! eight-connectivity adds the diagonals.

use std::fmt;

use crate::io::error::{FillError, Result};

/// Offsets to the eight surrounding pixels, cardinal directions first
pub const NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [0, -1],
    [-1, 0],
    [1, 0],
    [0, 1],
    [-1, -1],
    [1, -1],
    [-1, 1],
    [1, 1],
];

/// Pixel adjacency rule used during classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Cardinal neighbors only
    Four,
    /// Cardinal and diagonal neighbors
    Eight,
}

impl Connectivity {
    /// Get the numeric neighbor count for this rule
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Iterate over the neighbor offsets selected by this rule
    pub fn offsets(self) -> impl Iterator<Item = [isize; 2]> {
        NEIGHBOR_OFFSETS.into_iter().filter(move |offset| {
            self == Self::Eight || offset[0].abs() + offset[1].abs() < 2
        })
    }
}

impl TryFrom<u8> for Connectivity {
    type Error = FillError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            _ => Err(FillError::InvalidConnectivity { value }),
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-connected", self.as_u8())
    }
}

/// Apply a neighbor offset to a position, clipping at the grid edge
///
/// Returns `None` when the offset would leave the `width` by `height` grid,
/// so border pixels simply see fewer neighbors.
pub fn step(
    position: [usize; 2],
    offset: [isize; 2],
    width: usize,
    height: usize,
) -> Option<[usize; 2]> {
    let x = position[0].checked_add_signed(offset[0])?;
    let y = position[1].checked_add_signed(offset[1])?;
    (x < width && y < height).then_some([x, y])
}
