//! Installs the `tracing` subscriber that writes engine logs to stderr.
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, fmt};

use crate::format::FormatterConfig;

/// Default filter directive for the given output settings.
///
/// `RUST_LOG`, when set, replaces it entirely.
pub fn default_directive(config: &FormatterConfig) -> &'static str {
    if config.quiet {
        "error"
    } else if config.verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs a global fmt subscriber on stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init(config: &FormatterConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.colors)
                .with_target(false),
        )
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
