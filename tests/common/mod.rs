#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the semi-guard binary.
#[macro_export]
macro_rules! semi_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("semi-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Reads a file back from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.semi-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".semi-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Two imports on one line: one violation.
pub const INLINE_IMPORTS: &str = "@import \"a.css\"; @import \"b.css\";\n";

/// Every block-less at-rule already followed by a newline.
pub const CLEAN_IMPORTS: &str = "@import \"a.css\";\n@import \"b.css\";\n\na { color: red; }\n";

/// Config scanning css and less, without gitignore.
pub const BASIC_CONFIG: &str = r#"
version = "1"

[scanner]
gitignore = false
extensions = ["css", "less"]
exclude = []

[rules]
at-rule-semicolon-newline-after = "always"
"#;
