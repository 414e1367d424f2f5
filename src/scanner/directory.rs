use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::filter::{FileFilter, is_hidden};
use crate::error::Result;

/// Recursive, depth-first discovery of checkable files beneath a root.
///
/// Hidden directories are not descended into; hidden and non-matching files
/// are skipped. Directory entries themselves never appear in the result.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Discover every checkable file under `root`, recursively.
    ///
    /// # Errors
    /// Currently infallible; unreadable subtrees are skipped, matching the
    /// run-must-continue policy for path errors.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let files = WalkDir::new(root)
            .into_iter()
            // The root itself is always entered, even when its own name is
            // dot-prefixed; only nested hidden entries are pruned.
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
