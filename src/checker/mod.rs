mod engine;
mod result;

pub use engine::LineChecker;
pub use result::{CheckResult, UndefinedUse, UnusedParam, Warning};

use crate::options::OptionSet;

/// The lint checker boundary.
///
/// Implementations must be pure and synchronous, and must never panic on
/// malformed input: malformed source becomes warnings, not failures. Every
/// behavior toggle the implementation supports is a named [`OptionSet`] field
/// it branches on internally; the orchestration layer only builds the option
/// set, it never patches checker behavior after the fact.
pub trait Checker: Send + Sync {
    fn check(&self, source: &str, options: &OptionSet) -> CheckResult;

    /// Version tag recorded into each result's `edition` field.
    fn edition(&self) -> &str;
}
