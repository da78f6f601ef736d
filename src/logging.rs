//! Tracing initialization. Everything goes to stderr so stdout only ever
//! carries the report.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Directive used when `debug` is off.
pub const DEFAULT_DIRECTIVE: &str = "smellscan=warn";
/// Directive used under `--debug`.
pub const DEBUG_DIRECTIVE: &str = "smellscan=debug";

pub fn directive(debug: bool) -> &'static str {
    if debug { DEBUG_DIRECTIVE } else { DEFAULT_DIRECTIVE }
}

/// Install the global subscriber. Idempotent.
pub fn init(debug: bool) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(EnvFilter::new(directive(debug)))
            .init();
    });
}
