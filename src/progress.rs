//! Progress bar display for file copies

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for one install batch
pub struct CopyProgress {
    pb: ProgressBar,
}

impl CopyProgress {
    /// Create a progress bar over `total_files`; hidden entirely for dry runs
    pub fn new(total_files: u64, hidden: bool) -> Self {
        if hidden {
            return Self {
                pb: ProgressBar::hidden(),
            };
        }

        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);

        Self { pb }
    }

    /// Advance past one file
    pub fn update(&self, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.len() > 50 {
            format!("...{}", &file_path[file_path.len() - 47..])
        } else {
            file_path.to_string()
        };
        self.pb.set_message(display_path);
        self.pb.inc(1);
    }

    /// Finish and clear the bar so the report prints on a clean line
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
