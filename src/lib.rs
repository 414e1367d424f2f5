pub mod checker;
pub mod cli;
pub mod error;
pub mod filetype;
pub mod options;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod watch;

pub use error::{LintSweepError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LINT_ERRORS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
pub const EXIT_CHECKER_UNAVAILABLE: i32 = 3;

/// Directory (relative to the working directory) that summary and per-file
/// HTML reports are written under.
pub const REPORT_DIR: &str = "lintsweep_reports";

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
