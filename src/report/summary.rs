//! Run summary record and its CSV persistence.
//!
//! The record layout is `<date>, <loc>, <scanned loc>, 0, <error count>`;
//! the constant zero column is a placeholder kept for compatibility with
//! spreadsheets that track a severity level this tool never emits.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::REPORT_DIR;
use crate::error::{LintSweepError, Result};
use crate::runner::TreeReport;

/// Accumulated metrics for one run, summed over every tree walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_loc: usize,
    pub total_scanned_loc: usize,
    pub total_errors: usize,
}

impl RunSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished tree walk into the running totals.
    pub fn fold(&mut self, report: &TreeReport) {
        self.total_loc += report.total_loc;
        self.total_scanned_loc += report.total_scanned_loc;
        self.total_errors += report.total_errors;
    }

    /// One CSV record: `date, loc, scanned loc, 0, errors`.
    #[must_use]
    pub fn record(&self) -> String {
        format!(
            "{}, {}, {}, 0, {}",
            current_date(),
            self.total_loc,
            self.total_scanned_loc,
            self.total_errors
        )
    }

    /// Write the record to `lintsweep_reports/summary.csv`, replacing any
    /// previous run's record.
    ///
    /// # Errors
    /// Returns [`LintSweepError::ReportWrite`] if the report directory or
    /// the file cannot be written.
    pub fn save(&self) -> Result<PathBuf> {
        let dir = PathBuf::from(REPORT_DIR);
        fs::create_dir_all(&dir).map_err(|source| LintSweepError::ReportWrite {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join("summary.csv");
        fs::write(&path, self.record()).map_err(|source| LintSweepError::ReportWrite {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Current date as `d/m/yyyy`, without zero padding.
#[must_use]
pub fn current_date() -> String {
    let (year, month, day, ..) = now_civil();
    format!("{day}/{month}/{year}")
}

/// Current date and time as `d/m/yyyy h:mm:ss`.
#[must_use]
pub fn current_date_time() -> String {
    let (year, month, day, hour, minute, second) = now_civil();
    format!("{day}/{month}/{year} {hour}:{minute:02}:{second:02}")
}

fn now_civil() -> (i64, u32, u32, u32, u32, u32) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    civil_from_unix(secs)
}

/// Convert Unix seconds to a UTC civil date and time of day.
///
/// Days-to-date conversion follows the standard era-based algorithm over
/// 400-year cycles, which is exact for the whole proleptic Gregorian range
/// reachable from a `u64` of seconds.
fn civil_from_unix(secs: u64) -> (i64, u32, u32, u32, u32, u32) {
    let days = (secs / 86_400) as i64;
    let rem = secs % 86_400;
    let hour = (rem / 3600) as u32;
    let minute = (rem % 3600 / 60) as u32;
    let second = (rem % 60) as u32;

    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day, hour, minute, second)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
