/// Boundary classification around hole regions
pub mod boundary;
/// Single-pass fill pipeline and configuration
pub mod fill;
/// Hole classification from sample state
pub mod holes;
/// Efficient bitset implementation for pixel membership tracking
pub mod pixelset;
