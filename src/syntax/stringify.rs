use std::fmt;

use super::node::{Document, NodeId, NodeKind};

impl Document {
    /// Render a node's own text: no leading `before`, and no `;` terminator,
    /// since the terminator belongs to the parent's rendering of its children.
    #[must_use]
    pub fn render(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// `before` followed by the rendered node, i.e. the node as it appears
    /// after its predecessor's terminator.
    #[must_use]
    pub fn raw_node_string(&self, id: NodeId) -> String {
        let mut out = self.node(id).raws.before.clone();
        self.write_node(id, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        let raws = &node.raws;
        match &node.kind {
            NodeKind::Root => {
                self.write_children(id, out);
                out.push_str(&raws.after);
            }
            NodeKind::AtRule(at_rule) => {
                out.push_str(&raws.identifier);
                out.push_str(&at_rule.name);
                if at_rule.variable {
                    out.push(':');
                }
                out.push_str(&raws.after_name);
                out.push_str(&at_rule.params);
                out.push_str(&raws.between);
                if at_rule.has_block {
                    self.write_block(id, out);
                }
            }
            NodeKind::Rule { selector } => {
                out.push_str(selector);
                out.push_str(&raws.between);
                self.write_block(id, out);
            }
            NodeKind::Declaration { prop, value } => {
                out.push_str(prop);
                out.push_str(&raws.between);
                out.push_str(value);
                out.push_str(&raws.after);
            }
            NodeKind::Comment { text } => {
                out.push_str("/*");
                out.push_str(&raws.left);
                out.push_str(text);
                out.push_str(&raws.right);
                out.push_str("*/");
            }
        }
    }

    fn write_block(&self, id: NodeId, out: &mut String) {
        out.push('{');
        self.write_children(id, out);
        out.push_str(&self.node(id).raws.after);
        out.push('}');
    }

    fn write_children(&self, id: NodeId, out: &mut String) {
        let children = self.children(id);
        let trailing_semicolon = self.node(id).raws.semicolon;
        for (i, &child) in children.iter().enumerate() {
            let node = self.node(child);
            out.push_str(&node.raws.before);
            self.write_node(child, out);
            let is_last = i + 1 == children.len();
            if node.kind.is_statement() && (!is_last || trailing_semicolon) {
                out.push(';');
            }
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.root()))
    }
}
