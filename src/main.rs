use std::process;

use clap::Parser;

use smellscan::cli::Args;

fn main() {
    let args = Args::parse();
    smellscan::logging::init(args.debug);
    match smellscan::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}
