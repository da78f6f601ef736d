use crate::ast::Node;
use crate::finding::{Finding, Reason};
use crate::parse::source::SourceFile;

/// Append-only sink for findings produced during one walk.
pub struct FindingCollector<'a> {
    source: &'a SourceFile,
    findings: Vec<Finding>,
}

impl<'a> FindingCollector<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            source,
            findings: Vec::new(),
        }
    }

    /// Record a finding anchored at the start of `node`.
    pub fn record(&mut self, node: &Node, content: String, reason: Reason) -> &Finding {
        let idx = self.findings.len();
        self.findings.push(Finding {
            line: self.source.line_of(node.span.start),
            content,
            reason,
        });
        &self.findings[idx]
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}
