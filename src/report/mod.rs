//! Result presentation: console text reports, per-file HTML reports, the
//! run summary record, and the scan progress bar.

mod html;
mod progress;
mod summary;
mod text;

pub use html::{BasicRenderer, HtmlReportWriter, ReportRenderer};
pub use progress::CheckProgress;
pub use summary::{RunSummary, current_date, current_date_time};
pub use text::ErrorReport;

/// Color output mode for console reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI escape sequences used by console reports.
pub(crate) mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}
