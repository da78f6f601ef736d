use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "smellscan",
    version,
    about = "Report debug output and magic numbers in a JavaScript or TypeScript file"
)]
pub struct Args {
    /// Source file to scan
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "json", value_parser = ["json", "text", "markdown"])]
    pub format: String,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}
