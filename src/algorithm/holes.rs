//! Hole classification over the full grid extent

use crate::algorithm::pixelset::PixelSet;
use crate::spatial::PixelGrid;

/// Collect the flat indices of every unknown pixel
///
/// Scans the full grid extent, so holes touching the image border are
/// collected like any interior hole.
pub fn classify_holes(grid: &PixelGrid) -> PixelSet {
    let mut holes = PixelSet::new(grid.cells());
    for ([x, y], sample) in grid.samples() {
        if sample.is_unknown() {
            holes.insert(grid.flat_index(x, y));
        }
    }
    holes
}
