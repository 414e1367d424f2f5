#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the lintsweep binary.
#[macro_export]
macro_rules! lintsweep {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lintsweep"))
    };
}

/// Temporary directory with helpers for laying out files to check.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content, making parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Script that passes every default check.
    pub fn create_clean_script(&self, relative_path: &str) {
        self.create_file(relative_path, "'use strict';\nvar a = 1;\n");
    }

    /// Script with a tab warning and a TODO warning.
    pub fn create_dirty_script(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "'use strict';\nvar a =\t1;\n// TODO tidy this up\n",
        );
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Options file enabling the lenient toggles.
pub const LENIENT_OPTIONS_JSON: &str = r#"{
    "sloppy": true,
    "todo": true,
    "white": true
}"#;
