use std::path::PathBuf;

use super::*;
use crate::config::Config;
use crate::lint::lint_source;

fn report(path: &str, source: &str, fix: bool) -> LintReport {
    LintReport {
        path: PathBuf::from(path),
        report: lint_source(source, &Config::default(), fix).unwrap(),
    }
}

fn invalid_option_report(path: &str) -> LintReport {
    let mut config = Config::default();
    config.rules.insert(
        "at-rule-semicolon-newline-after".to_string(),
        toml::Value::String("never".to_string()),
    );
    LintReport {
        path: PathBuf::from(path),
        report: lint_source("@import \"a\";", &config, false).unwrap(),
    }
}

#[test]
fn format_violation_line() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let reports = vec![report("styles/a.css", "@import \"a\";@import \"b\";", false)];

    let output = formatter.format(&reports).unwrap();

    assert!(output.contains(
        "styles/a.css:1:13  error  Expected newline after \";\" (at-rule-semicolon-newline-after)"
    ));
    assert!(output.contains("Summary: 1 files checked, 1 problems in 1 files"));
}

#[test]
fn format_violation_on_later_line() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let reports = vec![report(
        "a.css",
        "a {}\n@charset \"utf-8\"; @import \"b\";",
        false,
    )];

    let output = formatter.format(&reports).unwrap();

    assert!(output.contains("a.css:2:18  error"));
}

#[test]
fn format_clean_files() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let reports = vec![
        report("a.css", "@import \"a\";\n@import \"b\";", false),
        report("b.css", "a { color: red; }", false),
    ];

    let output = formatter.format(&reports).unwrap();

    assert_eq!(output, "Summary: 2 files checked, no problems\n");
}

#[test]
fn format_invalid_option_has_no_position() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter.format(&[invalid_option_report("a.css")]).unwrap();

    assert!(output.contains(
        "a.css  error  Invalid option value \"never\" for rule \"at-rule-semicolon-newline-after\""
    ));
}

#[test]
fn format_fixed_count_in_summary() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let reports = vec![report("a.css", "@import \"a\"; @import \"b\";", true)];

    let output = formatter.format(&reports).unwrap();

    assert!(output.contains("no problems, 1 fixed"));
    assert!(!output.contains("a.css: fixed"));
}

#[test]
fn verbose_lists_fixed_and_clean_files() {
    let reports = vec![
        report("fixed.css", "@import \"a\"; @import \"b\";", true),
        report("clean.css", "a {}", true),
    ];

    let v1 = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&reports)
        .unwrap();
    assert!(v1.contains("fixed.css: fixed 1"));
    assert!(!v1.contains("clean.css: ok"));

    let v2 = TextFormatter::with_verbose(ColorMode::Never, 2)
        .format(&reports)
        .unwrap();
    assert!(v2.contains("clean.css: ok"));
}

#[test]
fn colors_applied_when_always() {
    let formatter = TextFormatter::new(ColorMode::Always);
    let reports = vec![report("a.css", "@import \"a\";@import \"b\";", false)];

    let output = formatter.format(&reports).unwrap();

    assert!(output.contains("\x1b[31merror\x1b[0m"));
}

#[test]
fn no_colors_when_never() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let reports = vec![report("a.css", "@import \"a\";@import \"b\";", false)];

    let output = formatter.format(&reports).unwrap();

    assert!(!output.contains("\x1b["));
}
