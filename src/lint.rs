//! Running the configured rules over stylesheets.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::checker::{
    AtRuleSemicolonNewlineAfter, Diagnostic, Rule, RuleContext, SEMICOLON_NEWLINE_AFTER,
};
use crate::config::{Config, RuleSetting};
use crate::error::{Result, SemiGuardError};
use crate::syntax::{Document, ParseError, parse};

pub type BoxedRule = Box<dyn Rule + Send + Sync>;

/// Names of every rule this crate provides.
pub const RULE_NAMES: &[&str] = &[SEMICOLON_NEWLINE_AFTER];

#[must_use]
pub fn is_known_rule(name: &str) -> bool {
    RULE_NAMES.contains(&name)
}

fn build_rule(name: &str, option: Option<String>) -> Option<BoxedRule> {
    match name {
        SEMICOLON_NEWLINE_AFTER => Some(Box::new(AtRuleSemicolonNewlineAfter::new(option))),
        _ => None,
    }
}

/// Outcome of linting one in-memory source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Number of fixes applied (fix mode only).
    pub fixed: usize,
    /// Rendered document, set in fix mode when at least one fix was applied.
    pub output: Option<String>,
}

impl SourceReport {
    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.diagnostics.iter().any(|d| !d.is_invalid_option())
    }

    #[must_use]
    pub fn has_invalid_options(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_invalid_option)
    }
}

/// Outcome of linting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub path: PathBuf,
    pub report: SourceReport,
}

pub struct Linter {
    rules: Vec<BoxedRule>,
}

impl Linter {
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Build the rules enabled in `config`, each with its configured option.
    ///
    /// # Errors
    /// Returns an error if the config names a rule that does not exist.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut rules = Vec::new();
        for name in config.rules.keys() {
            let Some(RuleSetting::Enabled(option)) = config.rule_setting(name) else {
                debug!(rule = %name, "rule disabled");
                continue;
            };
            let rule = build_rule(name, option)
                .ok_or_else(|| SemiGuardError::Config(format!("Unknown rule '{name}'")))?;
            rules.push(rule);
        }
        Ok(Self::new(rules))
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run every rule over `doc`, in configuration order.
    pub fn lint_document(&self, doc: &mut Document, fix: bool) -> SourceReport {
        let context = RuleContext { fix };
        let mut report = SourceReport::default();
        for rule in &self.rules {
            let outcome = rule.run(doc, &context);
            trace!(rule = rule.meta().name, aborted = outcome.is_aborted(), "rule finished");
            report.fixed += outcome.fixed();
            report.diagnostics.extend(outcome.into_diagnostics());
        }
        if fix && report.fixed > 0 {
            report.output = Some(doc.to_string());
        }
        report
    }

    /// Parse and lint a source string.
    ///
    /// # Errors
    /// Returns an error if the source cannot be parsed.
    pub fn lint_source(&self, source: &str, fix: bool) -> std::result::Result<SourceReport, ParseError> {
        let mut doc = parse(source)?;
        Ok(self.lint_document(&mut doc, fix))
    }

    /// Read, parse and lint a file. Writing fixes back is left to the caller.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn lint_file(&self, path: &Path, fix: bool) -> Result<LintReport> {
        let source = std::fs::read_to_string(path).map_err(|source| SemiGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let report = self
            .lint_source(&source, fix)
            .map_err(|source| SemiGuardError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            path = %path.display(),
            diagnostics = report.diagnostics.len(),
            fixed = report.fixed,
            "linted file"
        );
        Ok(LintReport {
            path: path.to_path_buf(),
            report,
        })
    }
}

/// Lint `source` with the rules enabled in `config`.
///
/// # Errors
/// Returns an error if the config names an unknown rule or the source cannot
/// be parsed.
pub fn lint_source(source: &str, config: &Config, fix: bool) -> Result<SourceReport> {
    let linter = Linter::from_config(config)?;
    linter
        .lint_source(source, fix)
        .map_err(|source| SemiGuardError::Parse {
            path: PathBuf::from("<input>"),
            source,
        })
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
