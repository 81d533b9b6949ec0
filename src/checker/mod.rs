pub mod classify;
mod options;
mod result;
mod semicolon_newline;
pub mod whitespace;

pub use options::validate_option;
pub use result::{Diagnostic, DiagnosticKind, RuleOutcome, Severity, rule_message};
pub use semicolon_newline::{
    AtRuleSemicolonNewlineAfter, META as SEMICOLON_NEWLINE_AFTER_META,
    RULE_NAME as SEMICOLON_NEWLINE_AFTER,
};
pub use whitespace::{Boundary, Expectation, Violation, Whitespace, WhitespaceChecker};

use crate::syntax::Document;

/// Identity of a rule, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub name: &'static str,
    pub url: &'static str,
    pub fixable: bool,
    pub deprecated: bool,
}

/// Per-run settings supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleContext {
    /// Repair violations in the tree instead of reporting them.
    pub fix: bool,
}

pub trait Rule {
    fn meta(&self) -> &'static RuleMeta;

    /// Run the rule over a document.
    ///
    /// In fix mode violations are repaired in place and no diagnostics are
    /// returned; otherwise the tree is left untouched.
    fn run(&self, doc: &mut Document, context: &RuleContext) -> RuleOutcome;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
