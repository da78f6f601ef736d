pub mod json;
pub mod markdown;
pub mod text;

use std::io::Write;

use anyhow::Result;

use crate::linter::LintResult;

pub trait Formatter {
    fn format_to(&self, result: &LintResult, out: &mut dyn Write) -> Result<()>;

    fn print(&self, result: &LintResult) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.format_to(result, &mut lock)?;
        lock.flush()?;
        Ok(())
    }
}

pub fn create_formatter(format: &str) -> Box<dyn Formatter> {
    match format {
        "text" => Box::new(text::TextFormatter),
        "markdown" => Box::new(markdown::MarkdownFormatter),
        // "json" and any unknown value
        _ => Box::new(json::JsonFormatter),
    }
}
