//! Node classification for statement-level rules.
//!
//! Pure read-only questions about a node: does it own a block, is it written
//! in syntax we can reason about, and which sibling should be inspected.

use crate::syntax::{Document, NodeId};

/// Whether the node introduces a nested `{ ... }` block.
#[must_use]
pub fn has_block(doc: &Document, id: NodeId) -> bool {
    doc.node(id).kind.has_block()
}

/// Whether an at-rule is standard CSS rather than a preprocessor construct.
///
/// Rejected forms:
/// - `@content;` and other block-less at-rules with no params (SCSS),
/// - mixin calls such as `.mixin();` (Less),
/// - variables such as `@var: value;` (Less),
/// - detached-ruleset calls such as `@detached();` (Less).
///
/// Nodes that are not at-rules are never standard at-rules.
#[must_use]
pub fn is_standard_syntax_at_rule(doc: &Document, id: NodeId) -> bool {
    let node = doc.node(id);
    let Some(at_rule) = node.as_at_rule() else {
        return false;
    };
    if !at_rule.has_block && at_rule.params.is_empty() {
        return false;
    }
    if at_rule.mixin || at_rule.variable {
        return false;
    }
    let detached_call =
        !at_rule.has_block && node.raws.after_name.is_empty() && at_rule.params.starts_with('(');
    !detached_call
}

/// `start`, or the first sibling after it that is not a comment.
#[must_use]
pub fn next_non_comment_node(doc: &Document, start: Option<NodeId>) -> Option<NodeId> {
    let mut current = start;
    while let Some(id) = current {
        if !doc.node(id).kind.is_comment() {
            return Some(id);
        }
        current = doc.next(id);
    }
    None
}

/// Whether a `;`-terminated at-rule should have its following boundary checked.
///
/// A statement is eligible when something follows it, it has no block of its
/// own, and it is standard syntax.
#[must_use]
pub fn is_eligible(doc: &Document, id: NodeId) -> bool {
    doc.next(id).is_some() && !has_block(doc, id) && is_standard_syntax_at_rule(doc, id)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
