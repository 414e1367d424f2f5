use super::{CheckResult, Checker, Warning};
use crate::error::{LintSweepError, Result};
use crate::options::OptionSet;

/// Warning ceiling used when the overlay does not set `maxerr`.
pub const DEFAULT_MAX_ERRORS: usize = 50;

/// Reference checker: a pure, line-level engine.
///
/// It honors the subset of the option contract expressible at line level:
/// - `maxlen` (number): warn on lines longer than the ceiling
/// - `maxerr` (number): stop early once the warning count reaches the ceiling
/// - `todo` (bool): tolerate TODO comments
/// - `white` (bool): tolerate tabs and trailing whitespace
/// - `sloppy` (bool): tolerate a missing `"use strict"` pragma
/// - `browser` (bool): browser context; the pragma requirement is waived
///
/// Checking is synchronous CPU work; a very large file holds its worker until
/// the check finishes.
#[derive(Debug)]
pub struct LineChecker {
    edition: String,
}

impl LineChecker {
    /// Build the default engine.
    ///
    /// # Errors
    /// Returns `CheckerUnavailable` when the engine cannot initialize; the
    /// caller must abort the process before scheduling any checks.
    pub fn new() -> Result<Self> {
        Self::with_edition(env!("CARGO_PKG_VERSION"))
    }

    /// Build an engine with an explicit version tag.
    ///
    /// # Errors
    /// Returns `CheckerUnavailable` for an empty tag.
    pub fn with_edition(edition: &str) -> Result<Self> {
        if edition.trim().is_empty() {
            return Err(LintSweepError::CheckerUnavailable(
                "engine has no version tag".to_string(),
            ));
        }
        Ok(Self {
            edition: edition.to_string(),
        })
    }
}

struct Toggles {
    max_errors: usize,
    max_length: Option<usize>,
    allow_todo: bool,
    allow_white: bool,
    sloppy: bool,
    browser: bool,
}

impl Toggles {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_options(options: &OptionSet) -> Self {
        Self {
            max_errors: options
                .number("maxerr")
                .map_or(DEFAULT_MAX_ERRORS, |n| n.max(1.0) as usize),
            max_length: options.number("maxlen").map(|n| n.max(1.0) as usize),
            allow_todo: options.is_enabled("todo"),
            allow_white: options.is_enabled("white"),
            sloppy: options.is_enabled("sloppy"),
            browser: options.is_enabled("browser"),
        }
    }
}

impl Checker for LineChecker {
    fn check(&self, source: &str, options: &OptionSet) -> CheckResult {
        let toggles = Toggles::from_options(options);
        let lines: Vec<String> = source.lines().map(str::to_string).collect();

        let mut warnings = Vec::new();
        let mut stopped_early = false;
        let mut pragma_checked = false;
        let json_source = is_json_source(&lines);

        for (index, line) in lines.iter().enumerate() {
            let line_no = index + 1;

            if !pragma_checked && !is_blank_or_comment(line) {
                pragma_checked = true;
                if !toggles.sloppy
                    && !toggles.browser
                    && !json_source
                    && !is_strict_pragma(line)
                {
                    warnings.push(Warning {
                        line: line_no,
                        column: 1,
                        message: "expected 'use strict' pragma before first statement"
                            .to_string(),
                    });
                }
            }

            check_line(line, line_no, &toggles, &mut warnings);

            if warnings.len() >= toggles.max_errors {
                stopped_early = true;
                break;
            }
        }

        CheckResult {
            ok: warnings.is_empty(),
            warnings,
            lines,
            unused: Vec::new(),
            undefined: Vec::new(),
            stopped_early,
            edition: self.edition.clone(),
        }
    }

    fn edition(&self) -> &str {
        &self.edition
    }
}

fn check_line(line: &str, line_no: usize, toggles: &Toggles, warnings: &mut Vec<Warning>) {
    if !toggles.allow_white {
        if let Some(column) = line.chars().position(|c| c == '\t') {
            warnings.push(Warning {
                line: line_no,
                column: column + 1,
                message: "unexpected tab".to_string(),
            });
        }
        if !line.is_empty() && line.trim_end() != line {
            warnings.push(Warning {
                line: line_no,
                column: line.trim_end().chars().count() + 1,
                message: "unexpected trailing whitespace".to_string(),
            });
        }
    }

    if !toggles.allow_todo
        && let Some(position) = line.find("TODO")
    {
        warnings.push(Warning {
            line: line_no,
            column: line[..position].chars().count() + 1,
            message: "unexpected TODO comment".to_string(),
        });
    }

    if let Some(max_length) = toggles.max_length {
        let width = line.chars().count();
        if width > max_length {
            warnings.push(Warning {
                line: line_no,
                column: max_length + 1,
                message: format!("line exceeds maximum length of {max_length}"),
            });
        }
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty()
        || trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
        || trimmed.starts_with("<!--")
}

fn is_strict_pragma(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("\"use strict\"") || trimmed.starts_with("'use strict'")
}

/// Structured-data sources (JSON) carry no statements, so the strict-mode
/// pragma requirement does not apply to them.
fn is_json_source(lines: &[String]) -> bool {
    lines
        .iter()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with('{') || trimmed.starts_with('[')
        })
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
