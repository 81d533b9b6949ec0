use serde::Serialize;

use crate::checker::{Diagnostic, DiagnosticKind, Severity};
use crate::error::Result;
use crate::lint::LintReport;

use super::{OutputFormatter, Totals};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    files_with_problems: usize,
    problems: usize,
    fixed: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    fixed: usize,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    rule: &'a str,
    kind: DiagnosticKind,
    severity: Severity,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[LintReport]) -> Result<String> {
        let totals = Totals::of(reports);
        let output = JsonOutput {
            summary: Summary {
                total_files: totals.files,
                files_with_problems: totals.files_with_problems,
                problems: totals.problems,
                fixed: totals.fixed,
            },
            results: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &LintReport) -> FileResult<'_> {
    FileResult {
        path: report.path.display().to_string(),
        fixed: report.report.fixed,
        diagnostics: report
            .report
            .diagnostics
            .iter()
            .map(convert_diagnostic)
            .collect(),
    }
}

fn convert_diagnostic(diagnostic: &Diagnostic) -> JsonDiagnostic<'_> {
    JsonDiagnostic {
        rule: diagnostic.rule,
        kind: diagnostic.kind,
        severity: diagnostic.severity,
        message: &diagnostic.message,
        line: diagnostic.position.map(|p| p.line),
        column: diagnostic.position.map(|p| p.column),
        index: diagnostic.index,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
