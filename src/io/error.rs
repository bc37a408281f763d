//! Error types for the fill pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fill operations
#[derive(Debug)]
pub enum FillError {
    /// Connectivity argument outside {4, 8}
    ///
    /// Rejected before the core pass runs, before any file is opened.
    InvalidConnectivity {
        /// The rejected argument value
        value: u8,
    },

    /// Original and mask images differ in pixel dimensions
    DimensionMismatch {
        /// Original image dimensions (width, height)
        original: (u32, u32),
        /// Mask image dimensions (width, height)
        mask: (u32, u32),
    },

    /// Grid construction from rows or buffers of inconsistent length
    ///
    /// Indicates an ingestion bug rather than bad user input.
    MalformedGrid {
        /// Description of the inconsistency
        reason: String,
    },

    /// Coordinate access outside grid bounds
    ///
    /// A programming error in a caller; never expected in correct use.
    OutOfRange {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// A hole pixel had no boundary pixel to interpolate from
    ///
    /// Raised instead of silently dividing by zero. Fatal to the whole pass
    /// unless the caller opted into `EmptyBoundaryPolicy::LeaveUnknown`.
    EmptyBoundary {
        /// Column of the unfillable hole pixel
        x: usize,
        /// Row of the unfillable hole pixel
        y: usize,
    },

    /// Fill parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnectivity { value } => {
                write!(f, "Invalid connectivity {value}: expected 4 or 8")
            }
            Self::DimensionMismatch { original, mask } => {
                write!(
                    f,
                    "Image dimensions do not match: original is {}x{}, mask is {}x{}",
                    original.0, original.1, mask.0, mask.1
                )
            }
            Self::MalformedGrid { reason } => {
                write!(f, "Malformed grid: {reason}")
            }
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({x}, {y}) is out of bounds for a {width}x{height} grid"
                )
            }
            Self::EmptyBoundary { x, y } => {
                write!(
                    f,
                    "Hole pixel ({x}, {y}) has no adjacent known pixel to interpolate from"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fill results
pub type Result<T> = std::result::Result<T, FillError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FillError {
    FillError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
