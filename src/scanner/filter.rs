use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LintSweepError, Result};
use crate::filetype::FileKind;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Filter for discovery: the fixed checkable-extension allow-list, minus
/// hidden files, minus caller-supplied exclude globs.
pub struct TypeFilter {
    exclude_patterns: GlobSet,
}

impl TypeFilter {
    /// Create a filter with the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LintSweepError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| LintSweepError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for TypeFilter {
    fn should_include(&self, path: &Path) -> bool {
        FileKind::classify(path).checkable() && !is_hidden(path) && !self.is_excluded(path)
    }
}

/// Hidden files (dot-prefixed basenames) are never discovered.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
