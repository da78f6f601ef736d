use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::formatter::Formatter;
use crate::linter::LintResult;

/// Pretty-printed JSON array of `{line, content, reason}` objects.
pub struct JsonFormatter;

#[derive(Serialize)]
struct Offense<'a> {
    line: usize,
    content: &'a str,
    reason: &'static str,
}

impl Formatter for JsonFormatter {
    fn format_to(&self, result: &LintResult, out: &mut dyn Write) -> Result<()> {
        let offenses: Vec<Offense<'_>> = result
            .findings
            .iter()
            .map(|f| Offense {
                line: f.line,
                content: &f.content,
                reason: f.reason.label(),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&offenses)?)?;
        Ok(())
    }
}
