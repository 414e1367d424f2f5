//! Console text report for a single file's check result.

use std::fmt::Write as _;
use std::io::IsTerminal;
use std::path::Path;

use super::{ColorMode, ansi, current_date_time};
use crate::checker::{CheckResult, UnusedParam};

/// Formats check results for the console, with optional ANSI color and an
/// optional file path prefix on each finding.
pub struct ErrorReport {
    use_colors: bool,
    hide_path: bool,
}

impl ErrorReport {
    #[must_use]
    pub fn new(mode: ColorMode, hide_path: bool) -> Self {
        Self {
            use_colors: should_use_colors(mode),
            hide_path,
        }
    }

    /// Explicit color control, used by tests and by the watch loop which
    /// resolves the mode once up front.
    #[must_use]
    pub const fn with_colors(use_colors: bool, hide_path: bool) -> Self {
        Self {
            use_colors,
            hide_path,
        }
    }

    /// Render the findings of one result as report text.
    ///
    /// Sections appear in a fixed order: warnings with their source line,
    /// undefined identifiers, then unused parameters with adjacent
    /// same-function same-line entries collapsed into one. A clean result
    /// renders as an empty string.
    #[must_use]
    pub fn render(&self, result: &CheckResult, path: &Path) -> String {
        let mut out = String::new();

        if !result.warnings.is_empty() {
            let _ = writeln!(out, "{}", self.paint("==Error(s)==", ansi::YELLOW));
            for warning in &result.warnings {
                if !self.hide_path {
                    let _ = write!(out, "{} ", path.display());
                }
                let _ = write!(
                    out,
                    "{}",
                    self.paint(
                        &format!("(line {} character {}) ", warning.line, warning.column),
                        ansi::CYAN
                    )
                );
                let _ = writeln!(out, "{}", self.paint(&warning.message, ansi::RED));
                if let Some(evidence) = result.lines.get(warning.line.wrapping_sub(1))
                    && !evidence.is_empty()
                {
                    let _ = writeln!(out, "{evidence}");
                }
            }
        }

        if !result.undefined.is_empty() || !result.unused.is_empty() {
            out.push('\n');
        }

        if !result.undefined.is_empty() {
            let _ = writeln!(
                out,
                "{} (parameter function line#)",
                self.paint("==Undefined==", ansi::YELLOW)
            );
            let snippets: Vec<String> = result
                .undefined
                .iter()
                .map(|u| {
                    format!(
                        "{} {} {}",
                        self.paint(&u.name, ansi::RED),
                        self.paint(&u.function, ansi::GREEN),
                        self.paint(&u.line.to_string(), ansi::CYAN)
                    )
                })
                .collect();
            let _ = write!(out, "{}\n\n", snippets.join(", "));
        }

        if !result.unused.is_empty() {
            let unused = collapse(&result.unused);
            if self.hide_path {
                let _ = writeln!(
                    out,
                    "{} ('function' line# parameter(s))",
                    self.paint("==Unused==", ansi::YELLOW)
                );
                let snippets: Vec<String> = unused
                    .iter()
                    .map(|u| {
                        format!(
                            "{} {} {}",
                            self.paint(&u.function, ansi::GREEN),
                            self.paint(&u.line.to_string(), ansi::CYAN),
                            self.paint(&u.name, ansi::RED)
                        )
                    })
                    .collect();
                let _ = write!(out, "{}", snippets.join(", "));
            } else {
                let _ = writeln!(
                    out,
                    "{} ('function' parameter(s))",
                    self.paint("==Unused==", ansi::YELLOW)
                );
                for u in &unused {
                    let _ = write!(
                        out,
                        "{} {}\n    ",
                        path.display(),
                        self.paint(&format!("(line {} character 1)", u.line), ansi::CYAN)
                    );
                    let _ = writeln!(
                        out,
                        "{} {}",
                        self.paint(&u.function, ansi::GREEN),
                        self.paint(&u.name, ansi::RED)
                    );
                }
            }
            out.push('\n');
        }

        out
    }

    /// Print one file's outcome to stdout, framed by a timestamped banner.
    pub fn print_result(&self, result: &CheckResult, path: &Path) {
        let stamp = current_date_time();
        let delimiter = format!(
            "===={} @ {stamp}====",
            self.paint(&path.display().to_string(), ansi::RED)
        );
        if result.num_errors() > 0 {
            println!("{delimiter}");
            println!("{}", self.render(result, path));
            println!("{delimiter}");
        } else {
            let delimiter = format!(
                "===={} @ {stamp}====",
                self.paint(&path.display().to_string(), ansi::GREEN)
            );
            println!("{delimiter}");
            println!("{}", self.paint("<No errors found>", ansi::GREEN));
            println!("{delimiter}");
        }
        println!();
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{color}{text}{}", ansi::BOLD, ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

/// Merge adjacent unused entries that share a function and line into one
/// entry with a comma-joined name list.
fn collapse(unused: &[UnusedParam]) -> Vec<UnusedParam> {
    let mut merged: Vec<UnusedParam> = Vec::with_capacity(unused.len());
    for entry in unused {
        if let Some(last) = merged.last_mut()
            && last.function == entry.function
            && last.line == entry.line
        {
            last.name.push_str(", ");
            last.name.push_str(&entry.name);
        } else {
            merged.push(entry.clone());
        }
    }
    merged
}

fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR (https://no-color.org/), then require a TTY.
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
