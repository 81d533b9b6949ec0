use tracing::{debug, trace};

use super::classify::{is_eligible, next_non_comment_node};
use super::options::validate_option;
use super::result::{Diagnostic, RuleOutcome, rule_message};
use super::whitespace::{Boundary, Expectation, Whitespace, WhitespaceChecker};
use super::{Rule, RuleContext, RuleMeta};
use crate::syntax::Document;

pub const RULE_NAME: &str = "at-rule-semicolon-newline-after";

const POSSIBLE_OPTIONS: &[&str] = &["always"];

pub static META: RuleMeta = RuleMeta {
    name: RULE_NAME,
    url: "https://stylelint.io/user-guide/rules/at-rule-semicolon-newline-after",
    fixable: true,
    deprecated: true,
};

/// Require a newline after the `;` of block-less at-rules.
///
/// A trailing comment on the same line is allowed: the boundary checked is
/// the one before the first non-comment sibling. Reports are anchored to the
/// at-rule itself, just past its `;`.
#[derive(Debug, Clone)]
pub struct AtRuleSemicolonNewlineAfter {
    option: Option<String>,
    checker: WhitespaceChecker,
}

impl AtRuleSemicolonNewlineAfter {
    #[must_use]
    pub fn new(option: Option<String>) -> Self {
        Self {
            option,
            checker: WhitespaceChecker::new(Whitespace::Newline, Expectation::Always),
        }
    }

    fn expected_after() -> String {
        rule_message("Expected newline after \";\"", RULE_NAME)
    }
}

impl Rule for AtRuleSemicolonNewlineAfter {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, doc: &mut Document, context: &RuleContext) -> RuleOutcome {
        if let Err(diagnostic) = validate_option(RULE_NAME, self.option.as_deref(), POSSIBLE_OPTIONS)
        {
            debug!(rule = RULE_NAME, option = ?self.option, "invalid option, skipping run");
            return RuleOutcome::Aborted { diagnostic };
        }

        let mut diagnostics = Vec::new();
        let mut fixed = 0;

        for statement in doc.at_rules() {
            if !is_eligible(doc, statement) {
                continue;
            }
            let Some(inspected) = next_non_comment_node(doc, doc.next(statement)) else {
                continue;
            };

            let source = doc.raw_node_string(inspected);
            if self
                .checker
                .after_one_only(Boundary::new(&source, -1))
                .is_ok()
            {
                continue;
            }

            if context.fix {
                let newline = doc.newline();
                doc.node_mut(inspected).raws.before.insert_str(0, newline);
                fixed += 1;
                trace!(node = statement.index(), "inserted newline after at-rule");
            } else {
                let index = doc.render(statement).chars().count() + 1;
                let position = doc.position(statement, index);
                diagnostics.push(
                    Diagnostic::violation(RULE_NAME, Self::expected_after(), statement, index)
                        .with_position(position),
                );
            }
        }

        debug!(
            rule = RULE_NAME,
            violations = diagnostics.len(),
            fixed,
            "rule run complete"
        );
        RuleOutcome::Completed { diagnostics, fixed }
    }
}

#[cfg(test)]
#[path = "semicolon_newline_tests.rs"]
mod tests;
