use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::checker::{CheckResult, Checker};
use crate::filetype::FileKind;
use crate::options::OptionSet;

/// Why a path was skipped instead of checked. Skips are ordinary outcomes:
/// a multi-file run continues past any single file's failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    NotAFile,
    UnsupportedType,
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NotFound | Self::NotAFile => "either cannot open file or is not a file",
            Self::UnsupportedType => "ignored unsupported file type",
            Self::Unreadable => "cannot read file",
        };
        f.write_str(reason)
    }
}

/// Outcome of one scheduled file check.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Checked(CheckResult),
    Skipped(SkipReason),
}

impl FileOutcome {
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked(_))
    }

    #[must_use]
    pub const fn result(&self) -> Option<&CheckResult> {
        match self {
            Self::Checked(result) => Some(result),
            Self::Skipped(_) => None,
        }
    }

    /// Error count toward aggregation; a skipped file counts zero.
    #[must_use]
    pub fn num_errors(&self) -> usize {
        self.result().map_or(0, CheckResult::num_errors)
    }

    #[must_use]
    pub fn loc(&self) -> usize {
        self.result().map_or(0, CheckResult::loc)
    }

    #[must_use]
    pub fn scanned_loc(&self) -> usize {
        self.result().map_or(0, CheckResult::scanned_loc)
    }
}

/// Runs the checker against one file: stat, type gate, read, check.
pub struct FileCheckRunner {
    checker: Arc<dyn Checker>,
    options: OptionSet,
}

impl FileCheckRunner {
    #[must_use]
    pub fn new(checker: Arc<dyn Checker>, options: OptionSet) -> Self {
        Self { checker, options }
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Check a single file. Never panics and never aborts the run; path
    /// errors come back as [`FileOutcome::Skipped`].
    #[must_use]
    pub fn check_file(&self, path: &Path) -> FileOutcome {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => return FileOutcome::Skipped(SkipReason::NotFound),
        };
        if !metadata.is_file() {
            return FileOutcome::Skipped(SkipReason::NotAFile);
        }

        let kind = FileKind::classify(path);
        if !kind.checkable() {
            return FileOutcome::Skipped(SkipReason::UnsupportedType);
        }

        let Ok(bytes) = fs::read(path) else {
            return FileOutcome::Skipped(SkipReason::Unreadable);
        };
        let source = String::from_utf8_lossy(&bytes);

        let per_call = self.options.for_file(kind);
        FileOutcome::Checked(self.checker.check(&source, &per_call))
    }
}

#[cfg(test)]
#[path = "single_tests.rs"]
mod tests;
