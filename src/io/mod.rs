//! Input/output and user-facing surfaces
//!
//! This module contains everything that touches the outside world:
//! - Command-line argument parsing and run orchestration
//! - Image loading and PNG export
//! - Progress display and error reporting

/// Command-line interface and run orchestration
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for the fill pipeline
pub mod error;
/// Image loading, grayscale conversion, and PNG export
pub mod image;
/// Stage progress display
pub mod progress;
/// Classification overlay rendering
pub mod visualization;
