//! Algorithm constants and runtime configuration defaults

// Mask interpretation
/// Luminance above this value marks a pixel as known; at or below, a hole
pub const MASK_THRESHOLD: f32 = 0.5;

/// Maximum channel value for 8-bit image output
pub const CHANNEL_MAX: f32 = 255.0;

// Parallelism settings
/// Number of hole pixels handled per worker chunk during boundary classification
pub const PARALLEL_CHUNK_SIZE: usize = 4096;

// Progress display settings
/// Interval between spinner ticks (in milliseconds)
pub const PROGRESS_TICK_MS: u64 = 80;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix added to classification overlay filenames
pub const CLASSIFICATION_SUFFIX: &str = "_classification";

// Classification overlay colors (RGBA)
/// Tint applied to hole pixels in the classification overlay
pub const HOLE_TINT: [u8; 4] = [220, 50, 47, 255];
/// Tint applied to boundary pixels in the classification overlay
pub const BOUNDARY_TINT: [u8; 4] = [78, 154, 6, 255];
