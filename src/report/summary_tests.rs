use std::path::PathBuf;

use super::*;

fn report(loc: usize, scanned: usize, errors: usize) -> TreeReport {
    TreeReport {
        root: PathBuf::from("src"),
        checked: 1,
        skipped: 0,
        total_loc: loc,
        total_scanned_loc: scanned,
        total_errors: errors,
    }
}

#[test]
fn civil_date_at_epoch() {
    assert_eq!(civil_from_unix(0), (1970, 1, 1, 0, 0, 0));
}

#[test]
fn civil_date_modern() {
    // 2023-11-14 22:13:20 UTC
    assert_eq!(civil_from_unix(1_700_000_000), (2023, 11, 14, 22, 13, 20));
}

#[test]
fn civil_date_leap_day() {
    // 2000-02-29 00:00:00 UTC
    assert_eq!(civil_from_unix(951_782_400), (2000, 2, 29, 0, 0, 0));
}

#[test]
fn civil_date_year_boundary() {
    // 2019-12-31 23:59:59 UTC
    assert_eq!(civil_from_unix(1_577_836_799), (2019, 12, 31, 23, 59, 59));
}

#[test]
fn record_layout_has_constant_zero_column() {
    let mut summary = RunSummary::new();
    summary.fold(&report(10, 8, 3));
    let record = summary.record();
    assert!(record.ends_with(", 10, 8, 0, 3"), "unexpected: {record}");
}

#[test]
fn fold_accumulates_across_trees() {
    let mut summary = RunSummary::new();
    summary.fold(&report(10, 10, 0));
    summary.fold(&report(5, 3, 2));
    assert_eq!(summary.total_loc, 15);
    assert_eq!(summary.total_scanned_loc, 13);
    assert_eq!(summary.total_errors, 2);
}

#[test]
fn date_formats_are_unpadded_day_and_month() {
    let date = current_date();
    let parts: Vec<&str> = date.split('/').collect();
    assert_eq!(parts.len(), 3);
    assert!(!parts[0].starts_with('0'));
    assert!(!parts[1].starts_with('0'));
    assert_eq!(parts[2].len(), 4);
}

#[test]
fn date_time_pads_minutes_and_seconds() {
    let stamp = current_date_time();
    let (_, time) = stamp.split_once(' ').unwrap();
    let fields: Vec<&str> = time.split(':').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[1].len(), 2);
    assert_eq!(fields[2].len(), 2);
}
