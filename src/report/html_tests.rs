use std::fs;

use super::*;
use crate::checker::Warning;

fn clean_result() -> CheckResult {
    CheckResult {
        ok: true,
        warnings: vec![],
        lines: vec!["var a = 1;".into()],
        unused: vec![],
        undefined: vec![],
        stopped_early: false,
        edition: "2026-01-01".into(),
    }
}

fn dirty_result() -> CheckResult {
    CheckResult {
        ok: false,
        warnings: vec![Warning {
            line: 1,
            column: 8,
            message: "line contains tab character".into(),
        }],
        lines: vec!["var a =\t1;".into()],
        unused: vec![],
        undefined: vec![],
        stopped_early: false,
        edition: "2026-01-01".into(),
    }
}

#[test]
fn single_file_root_saves_at_report_dir_top() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("script.js");
    fs::write(&file, "var a = 1;\n").unwrap();
    let reports = dir.path().join("reports");

    let writer = HtmlReportWriter::new(&reports, false, &OptionSet::new());
    let saved = writer.save(&clean_result(), &file, &file).unwrap();

    assert_eq!(saved, reports.join("script.js.html"));
    assert!(saved.is_file());
}

#[test]
fn directory_root_mirrors_relative_path() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sub").join("inner.js");
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(&file, "var a = 1;\n").unwrap();
    let reports = dir.path().join("reports");

    let writer = HtmlReportWriter::new(&reports, false, &OptionSet::new());
    let saved = writer.save(&clean_result(), dir.path(), &file).unwrap();

    assert_eq!(saved, reports.join("sub").join("inner.js.html"));
    assert!(saved.is_file());
}

#[test]
fn multi_root_prepends_root_directory_name() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("pkg");
    let file = root.join("a.js");
    fs::create_dir_all(&root).unwrap();
    fs::write(&file, "var a = 1;\n").unwrap();
    let reports = dir.path().join("reports");

    let writer = HtmlReportWriter::new(&reports, true, &OptionSet::new());
    let saved = writer.save(&clean_result(), &root, &file).unwrap();

    assert_eq!(saved, reports.join("pkg").join("a.js.html"));
}

#[test]
fn extension_is_appended_not_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.json");
    fs::write(&file, "{}\n").unwrap();
    let reports = dir.path().join("reports");

    let writer = HtmlReportWriter::new(&reports, false, &OptionSet::new());
    let saved = writer.save(&clean_result(), &file, &file).unwrap();

    assert!(saved.to_string_lossy().ends_with("data.json.html"));
}

#[test]
fn document_includes_metrics_and_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("script.js");
    fs::write(&file, "var a =\t1;\n").unwrap();
    let reports = dir.path().join("reports");

    let writer = HtmlReportWriter::new(&reports, false, &OptionSet::new());
    let saved = writer.save(&dirty_result(), &file, &file).unwrap();
    let html = fs::read_to_string(saved).unwrap();

    assert!(html.contains("Total no. of warnings: 1"));
    assert!(html.contains("Total lines of code: 1"));
    assert!(html.contains("line contains tab character"));
    assert!(html.contains("checker edition 2026-01-01"));
    assert!(html.contains("class=\"failed\""));
}

#[test]
fn clean_document_omits_warnings_fieldset() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("script.js");
    fs::write(&file, "var a = 1;\n").unwrap();
    let reports = dir.path().join("reports");

    let writer = HtmlReportWriter::new(&reports, false, &OptionSet::new());
    let saved = writer.save(&clean_result(), &file, &file).unwrap();
    let html = fs::read_to_string(saved).unwrap();

    assert!(!html.contains("<legend>Warnings</legend>"));
    assert!(html.contains("Total no. of warnings: 0"));
    assert!(html.contains("class=\"passed\""));
}

#[test]
fn basic_renderer_escapes_markup_in_messages() {
    let renderer = BasicRenderer;
    let mut result = dirty_result();
    result.warnings[0].message = "unexpected <script> tag".into();
    let fragment = renderer.error_report(&result);
    assert!(fragment.contains("unexpected &lt;script&gt; tag"));
}

#[test]
fn options_section_lists_overrides() {
    use crate::options::OptionValue;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("script.js");
    fs::write(&file, "var a = 1;\n").unwrap();
    let reports = dir.path().join("reports");

    let mut options = OptionSet::new();
    options.set("sloppy", OptionValue::Bool(true));
    options.set("maxerr", OptionValue::Number(25.0));

    let writer = HtmlReportWriter::new(&reports, false, &options);
    let saved = writer.save(&clean_result(), &file, &file).unwrap();
    let html = fs::read_to_string(saved).unwrap();

    assert!(html.contains("<b>sloppy</b>: true"));
    assert!(html.contains("<b>maxerr</b>: 25"));
}
