use serde::Serialize;

/// One checker warning, positioned by 1-indexed line and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// An unused function parameter reported by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnusedParam {
    pub function: String,
    pub line: usize,
    pub name: String,
}

/// An undeclared identifier used somewhere in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndefinedUse {
    pub name: String,
    pub function: String,
    pub line: usize,
}

/// Immutable output of one checker invocation.
///
/// A `CheckResult` always means the checker ran; "the checker could not be
/// run for this file" is the separate `FileOutcome::Skipped` case, so the
/// metric helpers here never have to guess what an absent warning list means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub ok: bool,
    pub warnings: Vec<Warning>,
    /// Raw source lines; entry `i` is line `i + 1`.
    pub lines: Vec<String>,
    pub unused: Vec<UnusedParam>,
    pub undefined: Vec<UndefinedUse>,
    /// The checker hit its error ceiling and stopped mid-file.
    pub stopped_early: bool,
    /// Checker version tag.
    pub edition: String,
}

impl CheckResult {
    /// Lines of code: the size of the line table.
    #[must_use]
    pub fn loc(&self) -> usize {
        self.lines.len()
    }

    /// Lines actually processed. Equal to [`Self::loc`] for a completed run;
    /// for an early stop it is the line of the last emitted warning, which
    /// captures the partial coverage.
    #[must_use]
    pub fn scanned_loc(&self) -> usize {
        if self.stopped_early
            && let Some(last) = self.warnings.last()
        {
            return last.line;
        }
        self.loc()
    }

    /// Warnings plus unused-parameter entries.
    #[must_use]
    pub fn num_errors(&self) -> usize {
        self.warnings.len() + self.unused.len()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
