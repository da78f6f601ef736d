pub mod collector;
pub mod debug_output;
pub mod magic_number;
pub mod registry;
pub mod walker;

use crate::ast::Node;
use crate::finding::Reason;
use crate::parse::source::SourceFile;

/// What a rule reports for one node, before a line is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub content: String,
    pub reason: Reason,
}

impl RuleMatch {
    pub fn new(content: impl Into<String>, reason: Reason) -> Self {
        Self {
            content: content.into(),
            reason,
        }
    }
}

/// A lint rule. Implementations must be Send + Sync so one registry can be
/// shared by independent scans.
pub trait Rule: Send + Sync {
    /// Stable rule name, e.g. "debug-output".
    fn name(&self) -> &'static str;

    /// Node-based check, called for every node during traversal. Looks only
    /// at `node` itself, never its subtree, and returns `None` for anything
    /// it does not recognize.
    fn check_node(&self, source: &SourceFile, node: &Node) -> Option<RuleMatch>;
}
