//! Lowering from tree-sitter's concrete tree into [`crate::ast::Node`].
//!
//! Only named nodes are kept, so punctuation and keyword tokens disappear and
//! a call's first child is always its `function` field. Both passes use an
//! explicit stack rather than recursion.

use crate::ast::{Node, NodeKind, Span};

struct Frame<'tree> {
    node: Node,
    pending: std::vec::IntoIter<tree_sitter::Node<'tree>>,
}

impl<'tree> Frame<'tree> {
    fn enter(ts_node: tree_sitter::Node<'tree>) -> Self {
        let mut cursor = ts_node.walk();
        let children: Vec<_> = ts_node.named_children(&mut cursor).collect();
        Self {
            node: Node::with_children(
                NodeKind::from_grammar(ts_node.kind()),
                Span::new(ts_node.start_byte(), ts_node.end_byte()),
                Vec::with_capacity(children.len()),
            ),
            pending: children.into_iter(),
        }
    }
}

/// Build an owned tree rooted at `root`.
pub fn lower(root: tree_sitter::Node<'_>) -> Node {
    let mut current = Frame::enter(root);
    let mut parents: Vec<Frame<'_>> = Vec::new();
    loop {
        if let Some(child) = current.pending.next() {
            parents.push(std::mem::replace(&mut current, Frame::enter(child)));
            continue;
        }
        match parents.pop() {
            Some(mut parent) => {
                parent.node.children.push(current.node);
                current = parent;
            }
            None => return current.node,
        }
    }
}

/// First `ERROR` or `MISSING` node in pre-order, if the tree has one.
pub fn first_error(root: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if !root.has_error() {
        return None;
    }
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
