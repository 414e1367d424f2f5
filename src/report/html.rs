//! Per-file HTML reports, mirroring the scanned tree under the report
//! directory.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::CheckResult;
use crate::error::{LintSweepError, Result};
use crate::options::{OptionSet, OptionValue};

const HTML_HEADER: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>lintsweep Report</title>\n";

const HTML_STYLES: &str = "<style>\n\
body { font-family: -apple-system, 'Segoe UI', Roboto, Arial, sans-serif; line-height: 1.5; padding: 1.5rem; color: #1e293b; }\n\
h1 { font-size: 1.5rem; } h3, h4 { margin: 0.25rem 0; }\n\
fieldset { border: 1px solid #e2e8f0; border-radius: 0.375rem; margin: 1rem 0; padding: 0.75rem; }\n\
legend { font-weight: 600; }\n\
pre, textarea { font-family: Consolas, Menlo, monospace; font-size: 0.8125rem; width: 100%; }\n\
.passed { color: #16a34a; } .failed { color: #dc2626; }\n\
</style>\n";

const HTML_BODY_OPEN: &str = "</head>\n<body>\n<div id=\"report\">\n<a href=\"#top\" id=\"top\"></a>\n";

const HTML_FOOTER: &str = "<p>[ <a href=\"#top\">Top</a> ]\n</div>\n</body>\n</html>\n";

/// Renders the inner HTML fragments of a report.
///
/// The reference renderer below covers the findings this tool's own
/// checker produces; a richer checker integration can substitute its own
/// renderer for deeper function and property reports.
pub trait ReportRenderer: Send + Sync {
    /// Per-function breakdown fragment.
    fn function_report(&self, result: &CheckResult) -> String;
    /// Warning list fragment.
    fn error_report(&self, result: &CheckResult) -> String;
    /// Property directive text placed in the report's textarea.
    fn property_report(&self, result: &CheckResult) -> String;
}

/// Reference [`ReportRenderer`] backed only by the check result itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRenderer;

impl ReportRenderer for BasicRenderer {
    fn function_report(&self, result: &CheckResult) -> String {
        if result.unused.is_empty() && result.undefined.is_empty() {
            return "<p>No function findings.</p>\n".to_string();
        }
        let mut out = String::from("<ul>\n");
        for u in &result.unused {
            let _ = writeln!(
                out,
                "<li><b>{}</b> line {}: unused parameter <i>{}</i></li>",
                escape(&u.function),
                u.line,
                escape(&u.name)
            );
        }
        for u in &result.undefined {
            let _ = writeln!(
                out,
                "<li><b>{}</b> line {}: undefined <i>{}</i></li>",
                escape(&u.function),
                u.line,
                escape(&u.name)
            );
        }
        out.push_str("</ul>\n");
        out
    }

    fn error_report(&self, result: &CheckResult) -> String {
        let mut out = String::new();
        for warning in &result.warnings {
            let _ = write!(
                out,
                "<p><i>line {} character {}</i>: {}",
                warning.line,
                warning.column,
                escape(&warning.message)
            );
            if let Some(evidence) = result.lines.get(warning.line.wrapping_sub(1))
                && !evidence.is_empty()
            {
                let _ = write!(out, "<br><pre>{}</pre>", escape(evidence));
            }
            out.push_str("</p>\n");
        }
        out
    }

    fn property_report(&self, result: &CheckResult) -> String {
        format!("checked with edition {}", escape(&result.edition))
    }
}

/// Writes one HTML report per checked file under the report directory,
/// recreating the scanned tree's directory structure.
pub struct HtmlReportWriter {
    report_dir: PathBuf,
    /// More than one root was given on the command line; reports get an
    /// extra level named after each root to keep them apart.
    multi_root: bool,
    options_html: String,
    renderer: Box<dyn ReportRenderer>,
}

impl HtmlReportWriter {
    #[must_use]
    pub fn new(report_dir: impl Into<PathBuf>, multi_root: bool, options: &OptionSet) -> Self {
        Self {
            report_dir: report_dir.into(),
            multi_root,
            options_html: options_html(options),
            renderer: Box::new(BasicRenderer),
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn ReportRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Write the report for `file` (checked under walk root `root`) and
    /// return the path it was saved to.
    ///
    /// # Errors
    /// Returns [`LintSweepError::ReportWrite`] when the report tree or the
    /// file itself cannot be created.
    pub fn save(&self, result: &CheckResult, root: &Path, file: &Path) -> Result<PathBuf> {
        let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let file = dunce::canonicalize(file).unwrap_or_else(|_| file.to_path_buf());
        let save_path = self.save_path(&root, &file)?;

        if let Some(parent) = save_path.parent() {
            fs::create_dir_all(parent).map_err(|source| LintSweepError::ReportWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let document = self.document(result, &root, &file);
        fs::write(&save_path, document).map_err(|source| LintSweepError::ReportWrite {
            path: save_path.clone(),
            source,
        })?;
        Ok(save_path)
    }

    /// Report location: a single-file root saves `<name>.html` at the top
    /// of the report directory; files under a directory root mirror their
    /// relative path.
    fn save_path(&self, root: &Path, file: &Path) -> Result<PathBuf> {
        let mut save_path = self.report_dir.clone();
        if root == file {
            let name = file
                .file_name()
                .ok_or_else(|| LintSweepError::ReportWrite {
                    path: file.to_path_buf(),
                    source: std::io::Error::other("path has no file name"),
                })?;
            save_path.push(name);
        } else {
            if self.multi_root
                && let Some(root_name) = root.file_name()
            {
                save_path.push(root_name);
            }
            let relative = file.strip_prefix(root).unwrap_or(file);
            save_path.push(relative);
        }
        // Append rather than replace, so a.js and a.json keep distinct reports.
        save_path.as_mut_os_string().push(".html");
        Ok(save_path)
    }

    fn document(&self, result: &CheckResult, root: &Path, file: &Path) -> String {
        let errors = result.num_errors();
        let loc = result.loc();
        let scanned = result.scanned_loc();
        let shown = file.strip_prefix(root).unwrap_or(file);
        let status = if errors > 0 { "failed" } else { "passed" };

        let mut out = String::with_capacity(2048);
        out.push_str(HTML_HEADER);
        out.push_str(HTML_STYLES);
        out.push_str(HTML_BODY_OPEN);

        let _ = writeln!(
            out,
            "<h1 class=\"{status}\"><a href=\"file://{}\">{}</a></h1>",
            file.display(),
            escape(&shown.display().to_string())
        );
        let _ = writeln!(
            out,
            "<h4>Check completed on: {} using checker edition {}</h4>",
            super::current_date_time(),
            escape(&result.edition)
        );
        let _ = writeln!(out, "<h3 class=\"{status}\">Total no. of warnings: {errors}</h3>");
        let _ = writeln!(out, "<h3>Total lines of code: {loc}</h3>");
        let scanned_class = if scanned < loc { "failed" } else { "passed" };
        let _ = writeln!(
            out,
            "<h3 class=\"{scanned_class}\">Total scanned lines: {scanned}</h3>"
        );
        out.push_str("[ <a href=\"#fn_rpt\">Functions</a> | <a href=\"#prop_rpt\">Properties</a> ]\n");

        if errors > 0 {
            out.push_str("<fieldset><legend>Warnings</legend><div>\n");
            out.push_str(&self.renderer.error_report(result));
            out.push_str("</div></fieldset>\n<p>[ <a href=\"#top\">Top</a> ]\n");
        }

        out.push_str("<a id=\"fn_rpt\"></a><fieldset><legend>Function Report</legend><div>\n");
        out.push_str(&self.renderer.function_report(result));
        out.push_str("</div></fieldset>\n<a id=\"prop_rpt\"></a><fieldset><legend>Property Directive</legend><textarea rows=\"8\" readonly>");
        out.push_str(&self.renderer.property_report(result));
        out.push_str("</textarea></fieldset>\n");

        out.push_str("<h2>Overridden Options</h2>\n");
        out.push_str(&self.options_html);
        out.push_str(HTML_FOOTER);
        out
    }
}

fn options_html(options: &OptionSet) -> String {
    if options.is_empty() {
        return "<p>Options are all at default values.</p>\n".to_string();
    }
    let mut out = String::from("<ul>\n");
    for (key, value) in options.iter() {
        let rendered = match value {
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Number(n) => n.to_string(),
            OptionValue::Str(s) => s.clone(),
            OptionValue::List(items) => items.join(", "),
        };
        let _ = writeln!(out, "<li><b>{}</b>: {}</li>", escape(key), escape(&rendered));
    }
    out.push_str("</ul>\n");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
