use serde::Serialize;

use crate::syntax::{NodeId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What a diagnostic reports: a finding in the stylesheet, or a rule that
/// could not run because its option was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    Violation,
    InvalidOption,
}

/// A single finding produced by a rule run. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub message: String,
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Node the diagnostic is anchored to.
    pub node: Option<NodeId>,
    /// Character offset from the start of `node`.
    pub index: Option<usize>,
    /// Source position of `node` + `index`, when the node came from source.
    pub position: Option<Position>,
}

impl Diagnostic {
    #[must_use]
    pub fn violation(rule: &'static str, message: String, node: NodeId, index: usize) -> Self {
        Self {
            rule,
            message,
            kind: DiagnosticKind::Violation,
            severity: Severity::Error,
            node: Some(node),
            index: Some(index),
            position: None,
        }
    }

    #[must_use]
    pub const fn invalid_option(rule: &'static str, message: String) -> Self {
        Self {
            rule,
            message,
            kind: DiagnosticKind::InvalidOption,
            severity: Severity::Error,
            node: None,
            index: None,
            position: None,
        }
    }

    #[must_use]
    pub const fn with_position(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub const fn is_invalid_option(&self) -> bool {
        matches!(self.kind, DiagnosticKind::InvalidOption)
    }
}

/// Append the rule name to a message, as every rule message carries it.
#[must_use]
pub fn rule_message(text: &str, rule: &str) -> String {
    format!("{text} ({rule})")
}

/// Terminal state of one rule run over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The option was invalid; the tree was not visited.
    Aborted { diagnostic: Diagnostic },
    /// The tree was visited. `diagnostics` is empty in fix mode.
    Completed {
        diagnostics: Vec<Diagnostic>,
        fixed: usize,
    },
}

impl RuleOutcome {
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Aborted { diagnostic } => std::slice::from_ref(diagnostic),
            Self::Completed { diagnostics, .. } => diagnostics,
        }
    }

    /// Number of fixes applied to the tree.
    #[must_use]
    pub const fn fixed(&self) -> usize {
        match self {
            Self::Aborted { .. } => 0,
            Self::Completed { fixed, .. } => *fixed,
        }
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        match self {
            Self::Aborted { diagnostic } => vec![diagnostic],
            Self::Completed { diagnostics, .. } => diagnostics,
        }
    }
}
