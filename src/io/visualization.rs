//! Classification overlay rendering for inspection
//!
//! Renders the hole and boundary sets on top of the source image so a run
//! can be checked visually. Hole pixels are tinted red, boundary pixels
//! green, and everything else keeps its grayscale intensity.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::algorithm::pixelset::PixelSet;
use crate::io::configuration::{BOUNDARY_TINT, HOLE_TINT};
use crate::io::error::Result;
use crate::io::image::{channel_value, write_rgba};
use crate::spatial::PixelGrid;

/// Save an overlay image showing hole and boundary classification
///
/// # Errors
///
/// Returns [`crate::io::error::FillError::FileSystem`] when the parent
/// directory cannot be created and
/// [`crate::io::error::FillError::ImageExport`] when encoding fails.
pub fn save_classification(
    grid: &PixelGrid,
    holes: &PixelSet,
    boundary: &PixelSet,
    path: &Path,
) -> Result<()> {
    let mut img = ImageBuffer::new(grid.width() as u32, grid.height() as u32);

    for ([x, y], sample) in grid.samples() {
        let index = grid.flat_index(x, y);
        let color = if holes.contains(index) {
            Rgba(HOLE_TINT)
        } else if boundary.contains(index) {
            Rgba(BOUNDARY_TINT)
        } else {
            let value = channel_value(sample);
            Rgba([value, value, value, 255])
        };

        img.put_pixel(x as u32, y as u32, color);
    }

    write_rgba(&img, path)
}
