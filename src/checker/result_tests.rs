use super::*;

fn result_with(warnings: Vec<Warning>, lines: usize, stopped_early: bool) -> CheckResult {
    CheckResult {
        ok: warnings.is_empty(),
        warnings,
        lines: (0..lines).map(|i| format!("line {i}")).collect(),
        unused: Vec::new(),
        undefined: Vec::new(),
        stopped_early,
        edition: "test".to_string(),
    }
}

fn warning(line: usize) -> Warning {
    Warning {
        line,
        column: 1,
        message: "problem".to_string(),
    }
}

#[test]
fn loc_equals_line_table_size() {
    let result = result_with(Vec::new(), 10, false);
    assert_eq!(result.loc(), 10);
}

#[test]
fn scanned_loc_equals_loc_for_completed_run() {
    let result = result_with(vec![warning(3)], 10, false);
    assert_eq!(result.scanned_loc(), 10);
}

#[test]
fn scanned_loc_is_last_warning_line_when_stopped_early() {
    let result = result_with(vec![warning(2), warning(7)], 100, true);
    assert_eq!(result.scanned_loc(), 7);
}

#[test]
fn scanned_loc_falls_back_to_loc_without_warnings() {
    let result = result_with(Vec::new(), 42, true);
    assert_eq!(result.scanned_loc(), 42);
}

#[test]
fn num_errors_counts_warnings_and_unused() {
    let mut result = result_with(vec![warning(1), warning(2)], 5, false);
    result.unused.push(UnusedParam {
        function: "f".to_string(),
        line: 1,
        name: "x".to_string(),
    });

    assert_eq!(result.num_errors(), 3);
}

#[test]
fn num_errors_zero_for_clean_result() {
    let result = result_with(Vec::new(), 5, false);
    assert_eq!(result.num_errors(), 0);
}
