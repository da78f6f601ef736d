use std::io::Write;

use anyhow::Result;

use crate::formatter::Formatter;
use crate::linter::LintResult;

/// One `path:line: reason: content` line per finding, then a summary.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_to(&self, result: &LintResult, out: &mut dyn Write) -> Result<()> {
        let path = result.path.display();
        for f in &result.findings {
            writeln!(out, "{path}:{}: {}: {}", f.line, f.reason, f.content)?;
        }
        let count = result.findings.len();
        let word = if count == 1 { "finding" } else { "findings" };
        writeln!(out, "\n{count} {word} in {path}")?;
        Ok(())
    }
}
