use std::path::Path;

/// Checkable extensions: script files, structured-data files, markup files.
pub const CHECKABLE_EXTENSIONS: &[&str] = &["js", "json", "html", "htm"];

/// Classification of a path by extension, matched case-insensitively.
///
/// Markup files carry one option side effect: the browser-context flag must
/// be forced on for that file's check (and only that file's check), which
/// [`crate::options::OptionSet::for_file`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Script,
    Data,
    Markup,
    Unsupported,
}

impl FileKind {
    #[must_use]
    pub fn classify(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Unsupported;
        };

        match ext.to_ascii_lowercase().as_str() {
            "js" => Self::Script,
            "json" => Self::Data,
            "html" | "htm" => Self::Markup,
            _ => Self::Unsupported,
        }
    }

    #[must_use]
    pub const fn checkable(self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    #[must_use]
    pub const fn is_markup(self) -> bool {
        matches!(self, Self::Markup)
    }
}

#[cfg(test)]
#[path = "filetype_tests.rs"]
mod tests;
