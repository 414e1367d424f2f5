mod overlay;

pub use overlay::OptionOverlay;

use indexmap::IndexMap;

use crate::filetype::FileKind;

/// Reserved key the checker consumes as the list of known global identifiers.
pub const PREDEF_KEY: &str = "predef";

/// A single checker option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<String>),
}

impl OptionValue {
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// The layered configuration every checker invocation receives.
///
/// Built once per process by [`OptionOverlay::load`] and read-only afterwards;
/// per-file side effects (the browser-context flag for markup files) are
/// applied to a per-invocation clone via [`OptionSet::for_file`] and never
/// persist across files.
///
/// Insertion order is preserved so reports and debug output list options in a
/// deterministic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSet {
    values: IndexMap<String, OptionValue>,
}

impl OptionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last writer wins: overwrites any earlier value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: OptionValue) {
        self.values.insert(key.into(), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// True iff the option is present and set to boolean true.
    #[must_use]
    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key).and_then(OptionValue::as_bool) == Some(true)
    }

    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(OptionValue::as_number)
    }

    #[must_use]
    pub fn predef(&self) -> Option<&[String]> {
        self.get(PREDEF_KEY).and_then(OptionValue::as_list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Options for one checker invocation: a clone of the static overlay with
    /// the file-type side effect applied. Markup files force the
    /// browser-context flag on; the shared overlay is never mutated, so the
    /// flag cannot leak into the next non-markup file's check.
    #[must_use]
    pub fn for_file(&self, kind: FileKind) -> Self {
        let mut per_call = self.clone();
        if kind.is_markup() {
            per_call.set("browser", OptionValue::Bool(true));
        }
        per_call
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
