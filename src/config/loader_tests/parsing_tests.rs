//! Tests for config parsing, explicit path loading, and error handling.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader, RuleSetting};
use crate::error::SemiGuardError;

use super::mock_fs::MockFileSystem;

#[test]
fn load_from_explicit_path() {
    let config_content = r#"
version = "1"

[scanner]
extensions = ["css", "less"]

[rules]
at-rule-semicolon-newline-after = "always"
"#;

    let fs = MockFileSystem::new().with_file("/custom/path/config.toml", config_content);

    let loader = FileConfigLoader::with_fs(fs);
    let config = loader
        .load_from_path(Path::new("/custom/path/config.toml"))
        .unwrap();

    assert_eq!(config.scanner.extensions, vec!["css", "less"]);
    assert_eq!(
        config.rule_setting("at-rule-semicolon-newline-after"),
        Some(RuleSetting::Enabled(Some("always".to_string())))
    );
}

#[test]
fn load_from_missing_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/nowhere/config.toml"))
        .unwrap_err();
    assert!(matches!(err, SemiGuardError::FileRead { .. }));
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.semi-guard.toml", "[rules\n");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load().unwrap_err();
    assert!(matches!(err, SemiGuardError::TomlParse(_)));
}

#[test]
fn unknown_rule_is_config_error() {
    let fs = MockFileSystem::new().with_file(
        "/project/.semi-guard.toml",
        "[rules]\nblock-no-empty = true\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load().unwrap_err();
    assert!(matches!(err, SemiGuardError::Config(_)));
}

#[test]
fn disabled_rule_loads() {
    let fs = MockFileSystem::new().with_file(
        "/project/.semi-guard.toml",
        "[rules]\nat-rule-semicolon-newline-after = false\n",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(
        config.rule_setting("at-rule-semicolon-newline-after"),
        Some(RuleSetting::Disabled)
    );
}
