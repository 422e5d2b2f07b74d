//! Logging setup built on `tracing-subscriber`.
//!
//! The `RUST_LOG` environment variable always takes precedence over the
//! filter passed in code.

use tracing_subscriber::EnvFilter;

/// Default filter directives used by [`init`].
pub const DEFAULT_FILTER: &str = "info,glassboard_ui=debug,glassboard=debug";

/// Install the global fmt subscriber with [`DEFAULT_FILTER`].
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install the global fmt subscriber with the given filter directives.
///
/// Calling this more than once is harmless; only the first subscriber wins.
pub fn init_with_filter(directives: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already installed, keeping it");
    }
}
