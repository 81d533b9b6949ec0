mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::lint::LintReport;

/// Trait for formatting lint reports into various output formats.
pub trait OutputFormatter {
    /// Format the lint reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[LintReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Counts shared by every formatter's summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Totals {
    pub files: usize,
    pub files_with_problems: usize,
    pub problems: usize,
    pub fixed: usize,
}

impl Totals {
    pub(crate) fn of(reports: &[LintReport]) -> Self {
        reports.iter().fold(Self::default(), |mut t, r| {
            t.files += 1;
            t.problems += r.report.diagnostics.len();
            t.fixed += r.report.fixed;
            if !r.report.diagnostics.is_empty() {
                t.files_with_problems += 1;
            }
            t
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
