//! Image loading, grayscale conversion, and PNG export

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::configuration::{CHANNEL_MAX, MASK_THRESHOLD};
use crate::io::error::{FillError, Result};
use crate::spatial::{PixelGrid, Sample};

// Averages the color channels of a decoded image into one intensity plane
fn luminance_plane(path: &Path) -> Result<(u32, u32, Vec<f32>)> {
    let decoded = image::open(path).map_err(|e| FillError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgb = decoded.to_rgb32f();
    let (width, height) = rgb.dimensions();
    let plane = rgb
        .pixels()
        .map(|pixel| (pixel.0[0] + pixel.0[1] + pixel.0[2]) / 3.0)
        .collect();

    Ok((width, height, plane))
}

/// Load an image and its mask into a partially known pixel grid
///
/// Pixels whose mask luminance is at or below the mask threshold become
/// holes; all others keep their image intensity clamped to `[0.0, 1.0]`.
///
/// # Errors
///
/// Returns [`FillError::ImageLoad`] when either file cannot be decoded,
/// [`FillError::DimensionMismatch`] when the two images disagree on size,
/// and [`FillError::MalformedGrid`] when the decoded planes cannot form a
/// rectangular grid.
pub fn load_grid(image_path: &Path, mask_path: &Path) -> Result<PixelGrid> {
    let (width, height, intensities) = luminance_plane(image_path)?;
    let (mask_width, mask_height, mask) = luminance_plane(mask_path)?;

    if (width, height) != (mask_width, mask_height) {
        return Err(FillError::DimensionMismatch {
            original: (width, height),
            mask: (mask_width, mask_height),
        });
    }

    let samples = intensities
        .into_iter()
        .zip(mask)
        .map(|(intensity, mask_value)| {
            if mask_value > MASK_THRESHOLD {
                Sample::Known(intensity.clamp(0.0, 1.0))
            } else {
                Sample::Unknown
            }
        })
        .collect();

    PixelGrid::from_raw(width as usize, height as usize, samples)
}

/// Map a sample to its 8-bit output channel, rendering unknowns as black
pub(crate) fn channel_value(sample: Sample) -> u8 {
    sample
        .intensity()
        .map_or(0, |value| (value.clamp(0.0, 1.0) * CHANNEL_MAX).round() as u8)
}

/// Save a grid as an opaque grayscale PNG
///
/// Unknown pixels are written as black.
///
/// # Errors
///
/// Returns [`FillError::FileSystem`] when the parent directory cannot be
/// created and [`FillError::ImageExport`] when encoding fails.
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    let mut img = ImageBuffer::new(grid.width() as u32, grid.height() as u32);

    for ([x, y], sample) in grid.samples() {
        let value = channel_value(sample);
        img.put_pixel(x as u32, y as u32, Rgba([value, value, value, 255]));
    }

    write_rgba(&img, path)
}

/// Write an RGBA buffer to disk, creating parent directories as needed
pub(crate) fn write_rgba(img: &ImageBuffer<Rgba<u8>, Vec<u8>>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FillError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| FillError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
