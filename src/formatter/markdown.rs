use std::io::Write;

use anyhow::Result;

use crate::formatter::Formatter;
use crate::linter::LintResult;

pub const CLEAN_MESSAGE: &str = "✅ No debug code or best practice violations found.";

/// Review-report layout: one `### 📄 path (Lline)` section per finding with
/// the reason and the matched text in a fence tagged by file extension.
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format_to(&self, result: &LintResult, out: &mut dyn Write) -> Result<()> {
        if result.findings.is_empty() {
            writeln!(out, "{CLEAN_MESSAGE}")?;
            return Ok(());
        }

        let path = result.path.display();
        let ext = result
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        writeln!(out, "## 🐛 Debug Code / Best Practice Violations\n")?;
        for f in &result.findings {
            writeln!(out, "### 📄 {path} (L{})\n", f.line)?;
            writeln!(out, "- **Type**: {}\n", f.reason)?;
            writeln!(out, "```{ext}\n{}\n```\n", f.content)?;
        }
        Ok(())
    }
}
