use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for tree check runs.
///
/// Discovery runs concurrently with checking, so the total is unknown at
/// first; the bar starts as a spinner and switches to a fraction once the
/// walk reports its file count. Hidden in quiet mode or when stderr is not
/// a TTY.
#[derive(Clone)]
pub struct CheckProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl CheckProgress {
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid. The template is a
    /// compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::no_length();
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} Checking [{bar:40.cyan/blue}] {pos}/{len} files")
                    .expect("valid template")
                    .progress_chars("█▓░"),
            );
            pb
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fix the total once discovery finishes.
    pub fn set_total(&self, total: u64) {
        self.progress_bar.set_length(total);
    }

    /// Count one finished file. Thread-safe.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    /// Finish the bar and clear it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
