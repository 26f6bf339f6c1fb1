//! Tracing setup: diagnostics go to stderr so stdout carries only notes text.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the verbosity flags.
pub const LOG_ENV: &str = "NOTEBLOB_LOG";

/// Maps the `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "noteblob=warn",
        1 => "noteblob=info",
        2 => "noteblob=debug",
        _ => "noteblob=trace",
    }
}

/// Initialize the tracing subscriber.
///
/// Respects the `NOTEBLOB_LOG` environment variable for filtering, falling
/// back to a level derived from `verbosity`. Calling this twice is harmless.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
