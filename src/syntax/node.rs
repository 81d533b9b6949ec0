use std::fmt;

/// Handle to a node stored in a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// At-rule payload: `@name params;` or `@name params { ... }`.
///
/// Less mixin calls (`.mixin();`) and variables (`@var: value;`) are parsed
/// as at-rules too, flagged so that rules can tell them apart from standard
/// CSS at-rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    pub has_block: bool,
    pub variable: bool,
    pub mixin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    AtRule(AtRule),
    Rule { selector: String },
    Declaration { prop: String, value: String },
    Comment { text: String },
}

impl NodeKind {
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::Comment { .. })
    }

    #[must_use]
    pub const fn is_at_rule(&self) -> bool {
        matches!(self, Self::AtRule(_))
    }

    /// Whether this node owns a `{ ... }` block of children.
    #[must_use]
    pub const fn has_block(&self) -> bool {
        match self {
            Self::Root | Self::Rule { .. } => true,
            Self::AtRule(at_rule) => at_rule.has_block,
            Self::Declaration { .. } | Self::Comment { .. } => false,
        }
    }

    /// Whether the node is a statement that a parent terminates with `;`.
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        match self {
            Self::Declaration { .. } => true,
            Self::AtRule(at_rule) => !at_rule.has_block,
            Self::Root | Self::Rule { .. } | Self::Comment { .. } => false,
        }
    }
}

/// Raw source fragments kept alongside a node so the tree renders back to
/// the exact text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raws {
    /// Whitespace preceding the node.
    pub before: String,
    /// Text between the name/selector/prop and the params/`{`/value/`;`.
    pub between: String,
    /// Whitespace between an at-rule name and its params.
    pub after_name: String,
    /// Whitespace before a block's closing `}` (or the end of the root);
    /// for declarations, whitespace between the value and the terminator.
    pub after: String,
    /// Whitespace just inside `/*`.
    pub left: String,
    /// Whitespace just inside `*/`.
    pub right: String,
    /// Prefix of an at-rule: `@`, or `.`/`#` for Less mixin calls.
    pub identifier: String,
    /// Whether the last child of this block carries a trailing `;`.
    pub semicolon: bool,
}

impl Raws {
    #[must_use]
    pub fn with_before(before: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub raws: Raws,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    source_offset: Option<usize>,
}

impl Node {
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Byte offset where the node starts in the parsed source, after `before`.
    #[must_use]
    pub const fn source_offset(&self) -> Option<usize> {
        self.source_offset
    }

    #[must_use]
    pub const fn as_at_rule(&self) -> Option<&AtRule> {
        match &self.kind {
            NodeKind::AtRule(at_rule) => Some(at_rule),
            _ => None,
        }
    }
}

/// 1-based line and column in the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Position {
    /// Position of a byte offset within `source`; columns count characters.
    #[must_use]
    pub fn of_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let prefix = source.get(..offset).unwrap_or(source);
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix[line_start..].chars().count() + 1;
        Self { line, column }
    }
}

/// A parsed stylesheet: an arena of nodes rooted at [`Document::root`].
///
/// The document owns every node; callers hold [`NodeId`] handles. Raw
/// fragments may be mutated in place, the shape of the tree may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
    source: String,
    newline: &'static str,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(String::new())
    }

    pub(crate) fn with_source(source: String) -> Self {
        let newline = if source.contains("\r\n") { "\r\n" } else { "\n" };
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                raws: Raws::default(),
                children: Vec::new(),
                parent: None,
                source_offset: Some(0),
            }],
            source,
            newline,
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Newline sequence used by the source: `"\r\n"` if it contains one.
    #[must_use]
    pub const fn newline(&self) -> &'static str {
        self.newline
    }

    /// Text the document was parsed from (empty for built documents).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Append a new last child to `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind, raws: Raws) -> NodeId {
        self.append_at(parent, kind, raws, None)
    }

    pub(crate) fn append_at(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        raws: Raws,
        source_offset: Option<usize>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            raws,
            children: Vec::new(),
            parent: Some(parent),
            source_offset,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Following sibling of `id`, if any.
    #[must_use]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(index + 1).copied()
    }

    /// All descendants of `id` in document order (pre-order), excluding `id`.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Every at-rule in the document, in document order.
    #[must_use]
    pub fn at_rules(&self) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.node(id).kind.is_at_rule())
            .collect()
    }

    /// Source position `index` characters past the start of `id`.
    ///
    /// Returns `None` for nodes that were not parsed from source.
    #[must_use]
    pub fn position(&self, id: NodeId, index: usize) -> Option<Position> {
        let start = self.node(id).source_offset?;
        let tail = self.source.get(start..)?;
        let byte_index = tail
            .char_indices()
            .nth(index)
            .map_or(tail.len(), |(i, _)| i);
        Some(Position::of_offset(&self.source, start + byte_index))
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
