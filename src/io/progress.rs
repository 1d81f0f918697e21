//! Progress display for batch processing of image files

use crate::io::configuration::{MIN_FILES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many files of a batch have been processed
///
/// Single files are processed without a bar; larger batches get one bar
/// whose message names the file currently being worked on.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Prepare the display for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.completed = 0;
        self.bar = (file_count >= MIN_FILES_FOR_PROGRESS).then(|| {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
    }

    /// Show which file is being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(display_name.to_string());
        }
    }

    /// Count a file as done
    pub fn complete_file(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of files completed since the last [`Self::initialize`]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Whether a progress bar is being drawn
    pub const fn has_bar(&self) -> bool {
        self.bar.is_some()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All files processed");
        }
    }
}
