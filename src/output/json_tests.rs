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

fn parse(output: &str) -> serde_json::Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn format_empty_results() {
    let output = JsonFormatter.format(&[]).unwrap();
    let json = parse(&output);

    assert_eq!(json["summary"]["total_files"], 0);
    assert_eq!(json["summary"]["problems"], 0);
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
}

#[test]
fn format_violation() {
    let reports = vec![report("a.css", "@import \"a\";@import \"b\";", false)];
    let json = parse(&JsonFormatter.format(&reports).unwrap());

    assert_eq!(json["summary"]["total_files"], 1);
    assert_eq!(json["summary"]["files_with_problems"], 1);
    assert_eq!(json["summary"]["problems"], 1);

    let diagnostic = &json["results"][0]["diagnostics"][0];
    assert_eq!(json["results"][0]["path"], "a.css");
    assert_eq!(diagnostic["rule"], "at-rule-semicolon-newline-after");
    assert_eq!(diagnostic["kind"], "violation");
    assert_eq!(diagnostic["severity"], "error");
    assert_eq!(
        diagnostic["message"],
        "Expected newline after \";\" (at-rule-semicolon-newline-after)"
    );
    assert_eq!(diagnostic["line"], 1);
    assert_eq!(diagnostic["column"], 13);
    assert_eq!(diagnostic["index"], 12);
}

#[test]
fn format_invalid_option_omits_location() {
    let mut config = Config::default();
    config.rules.insert(
        "at-rule-semicolon-newline-after".to_string(),
        toml::Value::String("never".to_string()),
    );
    let reports = vec![LintReport {
        path: PathBuf::from("a.css"),
        report: lint_source("@import \"a\";", &config, false).unwrap(),
    }];
    let json = parse(&JsonFormatter.format(&reports).unwrap());

    let diagnostic = &json["results"][0]["diagnostics"][0];
    assert_eq!(diagnostic["kind"], "invalid_option");
    assert!(diagnostic.get("line").is_none());
    assert!(diagnostic.get("index").is_none());
}

#[test]
fn format_fixed_counts() {
    let reports = vec![
        report("a.css", "@import \"a\"; @import \"b\"; @import \"c\";", true),
        report("b.css", "a {}", true),
    ];
    let json = parse(&JsonFormatter.format(&reports).unwrap());

    assert_eq!(json["summary"]["fixed"], 2);
    assert_eq!(json["summary"]["problems"], 0);
    assert_eq!(json["results"][0]["fixed"], 2);
    assert_eq!(json["results"][1]["fixed"], 0);
}
