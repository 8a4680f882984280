//! Single-bar progress display for generation and splitting loops

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} [{{elapsed_precise}}]"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar that can be silenced with `--quiet`
///
/// A disabled reporter accepts every call and draws nothing.
pub struct ProgressReporter {
    bar: ProgressBar,
    enabled: bool,
}

impl ProgressReporter {
    /// Create a reporter drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar, enabled: true }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden());
        Self {
            bar,
            enabled: false,
        }
    }

    /// Create a visible or hidden reporter
    pub fn for_quiet(quiet: bool) -> Self {
        if quiet { Self::hidden() } else { Self::new() }
    }

    /// Whether the reporter draws anything
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Reset the bar for a new loop of `total` steps
    pub fn start(&self, label: &str, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
        self.bar.set_message(label.to_string());
    }

    /// Advance by one step
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Steps completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
