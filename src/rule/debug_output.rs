use crate::ast::{Node, NodeKind};
use crate::finding::Reason;
use crate::parse::source::SourceFile;
use crate::rule::{Rule, RuleMatch};

/// Callee names treated as debug output when no other list is given.
pub const DEFAULT_DEBUG_SINKS: &[&str] = &[
    "console.log",
    "console.debug",
    "console.info",
    "console.warn",
    "console.error",
    "console.trace",
];

/// Reported content for a `debugger` statement, which has no operand text.
pub const DEBUGGER_CONTENT: &str = "debugger";

/// Flags calls to console-style debug sinks and `debugger` statements.
///
/// Callee matching is a substring test on the callee's source text, so
/// `foo.console.log(x)` and `window.console.error(e)` are flagged too. False
/// positives are accepted here; a missed `console.log` is not.
pub struct DebugOutput {
    sinks: Vec<String>,
}

impl Default for DebugOutput {
    fn default() -> Self {
        Self::with_sinks(DEFAULT_DEBUG_SINKS.iter().copied())
    }
}

impl DebugOutput {
    /// Use a custom sink list. Empty names are dropped, since they would
    /// match every callee.
    pub fn with_sinks<I, S>(sinks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sinks: sinks
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn sinks(&self) -> &[String] {
        &self.sinks
    }

    pub fn is_debug_sink(&self, callee_text: &str) -> bool {
        self.sinks.iter().any(|sink| callee_text.contains(sink.as_str()))
    }
}

impl Rule for DebugOutput {
    fn name(&self) -> &'static str {
        "debug-output"
    }

    fn check_node(&self, source: &SourceFile, node: &Node) -> Option<RuleMatch> {
        match node.kind {
            NodeKind::Call => {
                let callee = node.callee()?.text(source)?;
                if self.is_debug_sink(callee) {
                    Some(RuleMatch::new(callee, Reason::DebugOutput))
                } else {
                    None
                }
            }
            NodeKind::Debugger => Some(RuleMatch::new(DEBUGGER_CONTENT, Reason::DebugOutput)),
            _ => None,
        }
    }
}
