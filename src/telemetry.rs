//! telemetry
//!
//! Logging setup driven by the `--verbose` flag.
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG`, when set, takes
//! precedence over the level derived from the flag.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity flag.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Apply the invocation's verbosity to process logging.
///
/// Only the first call in a process installs a subscriber; later calls are
/// no-ops, so calling again with the same value is harmless.
pub fn set_verbosity(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(verbose)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "logging initialized");
    }
}
