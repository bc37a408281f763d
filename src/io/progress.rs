//! Stage progress display for the fill pipeline

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_TICK_MS;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Displays one spinner per pipeline stage
///
/// Starting a stage finishes the previous spinner, so the terminal keeps a
/// line per completed stage and a live spinner for the current one.
pub struct StageTracker {
    current: Option<ProgressBar>,
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StageTracker {
    /// Create a tracker with no active stage
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Finish the previous stage and start a new one
    pub fn stage(&mut self, message: &'static str) {
        self.finish_current();

        let bar = ProgressBar::new_spinner()
            .with_style(STAGE_STYLE.clone())
            .with_message(message);
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        self.current = Some(bar);
    }

    /// Finish the active stage, leaving its line in place
    pub fn finish_current(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish();
        }
    }

    /// Finish the active stage with a closing message
    pub fn finish_with(&mut self, message: String) {
        if let Some(bar) = self.current.take() {
            bar.finish_with_message(message);
        }
    }
}
