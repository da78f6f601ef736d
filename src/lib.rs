pub mod ast;
pub mod cli;
pub mod finding;
pub mod formatter;
pub mod linter;
pub mod logging;
pub mod parse;
pub mod rule;

#[cfg(test)]
pub mod testutil;

use anyhow::Result;
use tracing::debug;

use cli::Args;
use formatter::create_formatter;
use linter::lint_file;
use rule::registry::RuleRegistry;

/// Scan the file named in `args` and print its findings. Returns the exit
/// code; errors are left to the caller.
pub fn run(args: Args) -> Result<i32> {
    let registry = RuleRegistry::default_registry();
    debug!(rules = ?registry.names(), "registry built");

    let result = lint_file(&args.path, &registry)?;
    let formatter = create_formatter(&args.format);
    formatter.print(&result)?;
    Ok(0)
}
