//! The syntax tree the rule engine walks.
//!
//! The parser adapter lowers the grammar's concrete tree into these types, so
//! rules only ever match on a closed set of kinds. Every node owns its
//! children; traversal only borrows.

use crate::parse::source::SourceFile;

/// Half-open byte range `[start, end)` into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a parsed file.
    Program,
    /// Call expression. The first child is the callee.
    Call,
    /// `debugger` statement.
    Debugger,
    /// Numeric literal.
    Number,
    /// Any other grammar node, tagged with the grammar's kind name.
    Other(&'static str),
}

impl NodeKind {
    /// Map a tree-sitter kind name onto the closed set.
    pub fn from_grammar(kind: &'static str) -> Self {
        match kind {
            "program" => NodeKind::Program,
            "call_expression" => NodeKind::Call,
            "debugger_statement" => NodeKind::Debugger,
            "number" => NodeKind::Number,
            other => NodeKind::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, span: Span, children: Vec<Node>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    /// The callee of a call expression. `None` for every other kind, and for
    /// a call that somehow has no children.
    pub fn callee(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::Call => self.children.first(),
            _ => None,
        }
    }

    /// The source text this node covers.
    pub fn text<'s>(&self, source: &'s SourceFile) -> Option<&'s str> {
        source.text(self.span)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drop for Node {
    // Deeply nested sources would otherwise recurse once per level on drop.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
