use crate::ast::Node;
use crate::finding::Finding;
use crate::parse::source::SourceFile;

use super::collector::FindingCollector;
use super::registry::RuleRegistry;

/// Depth-first pre-order walk that runs every registered rule on every node.
pub struct RuleWalker<'a> {
    pub registry: &'a RuleRegistry,
    pub source: &'a SourceFile,
    pub collector: FindingCollector<'a>,
}

impl<'a> RuleWalker<'a> {
    pub fn new(registry: &'a RuleRegistry, source: &'a SourceFile) -> Self {
        Self {
            registry,
            source,
            collector: FindingCollector::new(source),
        }
    }

    /// Visit `root` and everything below it, then hand back the findings.
    ///
    /// A node is checked before any of its children, and children are
    /// visited left to right.
    pub fn walk(mut self, root: &Node) -> Vec<Finding> {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            self.visit_node(node);
            stack.extend(node.children.iter().rev());
        }
        self.collector.into_findings()
    }

    fn visit_node(&mut self, node: &Node) {
        for rule in self.registry.rules() {
            if let Some(m) = rule.check_node(self.source, node) {
                self.collector.record(node, m.content, m.reason);
            }
        }
    }
}

/// Run every rule in `registry` over the tree rooted at `root`.
pub fn walk(root: &Node, source: &SourceFile, registry: &RuleRegistry) -> Vec<Finding> {
    RuleWalker::new(registry, source).walk(root)
}
