//! Command-line interface for the hole filling tool

use crate::algorithm::fill::{EmptyBoundaryPolicy, FillConfig, FillOutcome, fill_holes};
use crate::io::configuration::{CLASSIFICATION_SUFFIX, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::{load_grid, save_grid};
use crate::io::progress::StageTracker;
use crate::io::visualization::save_classification;
use crate::spatial::neighbors::Connectivity;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "holefill")]
#[command(
    author,
    version,
    about = "Fill masked-out image regions by inverse distance weighting"
)]
/// Command-line arguments for the hole filling tool
pub struct Cli {
    /// Grayscale image containing hole regions to reconstruct
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Mask image marking hole pixels with dark values
    #[arg(value_name = "MASK")]
    pub mask: PathBuf,

    /// Falloff exponent for inverse distance weighting
    #[arg(value_name = "Z")]
    pub z: u32,

    /// Positive stabilizer avoiding division by zero at small distances
    #[arg(value_name = "EPSILON")]
    pub epsilon: f64,

    /// Pixel connectivity for boundary classification (4 or 8)
    #[arg(value_name = "CONNECTIVITY")]
    pub connectivity: u8,

    /// Output path (defaults to the image name with a result suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Continue when no boundary exists, leaving affected pixels black
    #[arg(short, long)]
    pub keep_unfillable: bool,

    /// Save a classification overlay next to the input image
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Get the empty boundary policy selected by the flags
    pub const fn empty_boundary_policy(&self) -> EmptyBoundaryPolicy {
        if self.keep_unfillable {
            EmptyBoundaryPolicy::LeaveUnknown
        } else {
            EmptyBoundaryPolicy::Fail
        }
    }
}

/// Orchestrates one fill run from image loading through export
pub struct FillProcessor {
    cli: Cli,
    progress: Option<StageTracker>,
}

impl FillProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(StageTracker::new);

        Self { cli, progress }
    }

    /// Run the fill pipeline according to CLI arguments
    ///
    /// Parameters are validated before any file is touched, so bad
    /// arguments fail without leaving partial output behind.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, image loading, hole
    /// filling, or export fails
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();

        let connectivity = Connectivity::try_from(self.cli.connectivity)?;
        let config = FillConfig::new(connectivity, self.cli.z, self.cli.epsilon)
            .with_empty_boundary(self.cli.empty_boundary_policy());
        config.validate()?;

        if let Some(ref mut tracker) = self.progress {
            tracker.stage("loading images");
        }
        let grid = load_grid(&self.cli.image, &self.cli.mask)?;

        if let Some(ref mut tracker) = self.progress {
            tracker.stage("filling holes");
        }
        let outcome = fill_holes(&grid, &config)?;

        if let Some(ref mut tracker) = self.progress {
            tracker.stage("writing result");
        }
        let output_path = self.output_path();
        save_grid(&outcome.grid, &output_path)?;

        if self.cli.visualize {
            let overlay_path = Self::with_suffix(&self.cli.image, CLASSIFICATION_SUFFIX);
            save_classification(&grid, &outcome.holes, &outcome.boundary, &overlay_path)?;
        }

        self.finish_summary(&outcome, start_time.elapsed());

        Ok(())
    }

    fn finish_summary(&mut self, outcome: &FillOutcome, elapsed: Duration) {
        if let Some(ref mut tracker) = self.progress {
            let mut summary = format!(
                "filled {} hole pixels from {} boundary pixels in {elapsed:.2?}",
                outcome.filled(),
                outcome.boundary.count()
            );
            if outcome.unfilled > 0 {
                summary.push_str(&format!(" ({} left unfilled)", outcome.unfilled));
            }
            tracker.finish_with(summary);
        }
    }

    fn output_path(&self) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::with_suffix(&self.cli.image, OUTPUT_SUFFIX))
    }

    fn with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let file_name = format!("{}{suffix}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(file_name)
        } else {
            PathBuf::from(file_name)
        }
    }
}
