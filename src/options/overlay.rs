use std::fs;
use std::path::{Path, PathBuf};

use super::{OptionSet, OptionValue, PREDEF_KEY};

/// Builds the working [`OptionSet`] from layered sources.
///
/// Application order (last writer wins for a given key):
/// 1. file-loaded base document (JSON, or TOML for `.toml` paths)
/// 2. enable list (force `true`)
/// 3. disable list (force `false`)
/// 4. numeric overrides (`maxerr`, `maxlen`)
/// 5. predefined global identifiers (reserved `predef` key)
///
/// A base file that cannot be read or parsed is a recovered error: a warning
/// is printed and the overlay continues from an empty base. The run must not
/// abort over a bad options file.
#[derive(Debug, Default)]
pub struct OptionOverlay {
    base_path: Option<PathBuf>,
    enable: Vec<String>,
    disable: Vec<String>,
    max_errors: Option<usize>,
    max_length: Option<usize>,
    predef: Vec<String>,
}

impl OptionOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_file(mut self, path: Option<PathBuf>) -> Self {
        self.base_path = path;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, names: Vec<String>) -> Self {
        self.enable = names;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, names: Vec<String>) -> Self {
        self.disable = names;
        self
    }

    #[must_use]
    pub const fn with_max_errors(mut self, max_errors: Option<usize>) -> Self {
        self.max_errors = max_errors;
        self
    }

    #[must_use]
    pub const fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_predef(mut self, names: Vec<String>) -> Self {
        self.predef = names;
        self
    }

    /// Apply all layers and produce the process-wide option set.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Option ceilings are far below 2^52
    pub fn load(&self) -> OptionSet {
        let mut options = self
            .base_path
            .as_deref()
            .map(load_base_file)
            .unwrap_or_default();

        for name in &self.enable {
            options.set(name.clone(), OptionValue::Bool(true));
        }
        for name in &self.disable {
            options.set(name.clone(), OptionValue::Bool(false));
        }
        if let Some(max_errors) = self.max_errors {
            options.set("maxerr", OptionValue::Number(max_errors as f64));
        }
        if let Some(max_length) = self.max_length {
            options.set("maxlen", OptionValue::Number(max_length as f64));
        }
        if !self.predef.is_empty() {
            options.set(PREDEF_KEY, OptionValue::List(self.predef.clone()));
        }

        options
    }
}

fn load_base_file(path: &Path) -> OptionSet {
    match try_load_base_file(path) {
        Ok(options) => options,
        Err(message) => {
            eprintln!(
                "Warning: failed to load options file {}: {message}",
                path.display()
            );
            OptionSet::new()
        }
    }
}

fn try_load_base_file(path: &Path) -> Result<OptionSet, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;

    if path.extension().is_some_and(|ext| ext == "toml") {
        let table: toml::Table = toml::from_str(&content).map_err(|e| e.to_string())?;
        Ok(options_from_toml(&table))
    } else {
        let document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(options_from_json(&document))
    }
}

fn options_from_json(document: &serde_json::Map<String, serde_json::Value>) -> OptionSet {
    let mut options = OptionSet::new();
    for (key, value) in document {
        match json_value(value) {
            Some(converted) => options.set(key.clone(), converted),
            None => eprintln!("Warning: ignoring unsupported option value for '{key}'"),
        }
    }
    options
}

fn json_value(value: &serde_json::Value) -> Option<OptionValue> {
    match value {
        serde_json::Value::Bool(b) => Some(OptionValue::Bool(*b)),
        serde_json::Value::Number(n) => n.as_f64().map(OptionValue::Number),
        serde_json::Value::String(s) => Some(OptionValue::Str(s.clone())),
        serde_json::Value::Array(items) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            strings.map(OptionValue::List)
        }
        serde_json::Value::Null | serde_json::Value::Object(_) => None,
    }
}

fn options_from_toml(table: &toml::Table) -> OptionSet {
    let mut options = OptionSet::new();
    for (key, value) in table {
        match toml_value(value) {
            Some(converted) => options.set(key.clone(), converted),
            None => eprintln!("Warning: ignoring unsupported option value for '{key}'"),
        }
    }
    options
}

#[allow(clippy::cast_precision_loss)] // Option ceilings are far below 2^52
fn toml_value(value: &toml::Value) -> Option<OptionValue> {
    match value {
        toml::Value::Boolean(b) => Some(OptionValue::Bool(*b)),
        toml::Value::Integer(n) => Some(OptionValue::Number(*n as f64)),
        toml::Value::Float(n) => Some(OptionValue::Number(*n)),
        toml::Value::String(s) => Some(OptionValue::Str(s.clone())),
        toml::Value::Array(items) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            strings.map(OptionValue::List)
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
