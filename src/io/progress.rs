//! Progress display for headless frame rendering

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} frames ({per_sec})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks frames painted during a headless render
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Create a bar for `frames` frames; hidden when `visible` is false
    pub fn new(frames: u64, label: &str, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(frames)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(frames);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Record one painted frame
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Frames recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total frames expected
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
