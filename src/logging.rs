//! Tracing initialization

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "WORDLE_LOG";

/// Default filter for a verbosity level (`-v` count)
#[must_use]
pub const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "wordle_heuristics=warn",
        1 => "wordle_heuristics=info",
        2 => "wordle_heuristics=debug",
        _ => "wordle_heuristics=trace",
    }
}

/// Initialize the tracing subscriber
///
/// Reads `WORDLE_LOG` (e.g. `WORDLE_LOG=wordle_heuristics::solver=debug`) and
/// falls back to `fallback` if it is unset or invalid. Logs go to stderr so
/// reports on stdout stay clean. Only the first call has any effect.
pub fn init_tracing(fallback: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();

        // Only fails when another global subscriber is already installed
        if let Err(err) = installed {
            tracing::debug!(error = %err, "tracing subscriber already set");
        }
    });
}
