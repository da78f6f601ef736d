use crate::ast::{Node, NodeKind};
use crate::finding::Reason;
use crate::parse::source::SourceFile;
use crate::rule::{Rule, RuleMatch};

/// Flags every numeric literal. There is no allow-list: `0`, `1` and array
/// indices are reported like any other number.
pub struct MagicNumber;

impl Rule for MagicNumber {
    fn name(&self) -> &'static str {
        "magic-number"
    }

    fn check_node(&self, source: &SourceFile, node: &Node) -> Option<RuleMatch> {
        match node.kind {
            NodeKind::Number => Some(RuleMatch::new(node.text(source)?, Reason::MagicNumber)),
            _ => None,
        }
    }
}
