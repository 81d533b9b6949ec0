use std::fmt::Write;
use std::io::Write as IoWrite;

use crate::checker::{Diagnostic, Severity};
use crate::error::Result;
use crate::lint::LintReport;

use super::{OutputFormatter, Totals};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_diagnostic(&self, report: &LintReport, diagnostic: &Diagnostic, output: &mut Vec<u8>) {
        let location = diagnostic.position.map_or_else(
            || report.path.display().to_string(),
            |pos| format!("{}:{pos}", report.path.display()),
        );
        let severity = match diagnostic.severity {
            Severity::Error => self.colorize("error", ansi::RED),
            Severity::Warning => self.colorize("warning", ansi::YELLOW),
        };
        writeln!(output, "{location}  {severity}  {}", diagnostic.message).ok();
    }

    fn format_summary(&self, totals: Totals) -> String {
        if totals.problems == 0 {
            let clean = self.colorize("no problems", ansi::GREEN);
            let mut summary = format!("Summary: {} files checked, {clean}", totals.files);
            if totals.fixed > 0 {
                let _ = write!(summary, ", {} fixed", totals.fixed);
            }
            return summary;
        }

        let problems = self.colorize(&totals.problems.to_string(), ansi::RED);
        let mut summary = format!(
            "Summary: {} files checked, {problems} problems in {} files",
            totals.files, totals.files_with_problems
        );
        if totals.fixed > 0 {
            let _ = write!(summary, ", {} fixed", totals.fixed);
        }
        summary
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[LintReport]) -> Result<String> {
        let mut output = Vec::new();

        for report in reports {
            for diagnostic in &report.report.diagnostics {
                self.format_diagnostic(report, diagnostic, &mut output);
            }
            if self.verbose >= 1 && report.report.fixed > 0 {
                let line = format!("{}: fixed {}", report.path.display(), report.report.fixed);
                writeln!(output, "{}", self.colorize(&line, ansi::GREEN)).ok();
            }
            if self.verbose >= 2 && report.report.diagnostics.is_empty() {
                let line = format!("{}: ok", report.path.display());
                writeln!(output, "{}", self.colorize(&line, ansi::DIM)).ok();
            }
        }

        writeln!(output, "{}", self.format_summary(Totals::of(reports))).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
