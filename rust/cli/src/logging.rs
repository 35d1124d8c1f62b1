//! Logging setup for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "BLACKJACK_LOG";

/// Default filter for the given number of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber. `BLACKJACK_LOG` wins over `-v` flags.
///
/// Calling it again once a global subscriber exists is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(verbosity, "logging initialised");
    }
}
