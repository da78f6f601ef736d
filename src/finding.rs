use std::fmt;

/// Category of a reported smell. The label is what ends up in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    DebugOutput,
    MagicNumber,
}

impl Reason {
    pub fn label(&self) -> &'static str {
        match self {
            Reason::DebugOutput => "debug output",
            Reason::MagicNumber => "magic number",
        }
    }

    pub fn from_label(s: &str) -> Option<Reason> {
        match s {
            "debug output" => Some(Reason::DebugOutput),
            "magic number" => Some(Reason::MagicNumber),
            _ => None,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One rule match, anchored at the start line of the matched node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-indexed line number
    pub line: usize,
    /// Matched source text, or a fixed placeholder for operand-less constructs
    pub content: String,
    pub reason: Reason,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.line, self.reason, self.content)
    }
}
