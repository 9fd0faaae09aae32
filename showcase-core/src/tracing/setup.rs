//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "SHOWCASE_LOG";

/// Initialize logging for the showcase binaries.
///
/// Reads `SHOWCASE_LOG` for per-module log levels, e.g.
/// `SHOWCASE_LOG=showcase_analysis::scanner=debug,showcase_cli=info`.
/// Falls back to `showcase=info` when unset or invalid. Safe to call more
/// than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("showcase=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
