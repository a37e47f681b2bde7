//! Diagnostic logging.
//!
//! Installs a `tracing` subscriber that writes to stderr so that stdout
//! only ever carries the greeting. The filter is read from
//! `BRAVE_HELLO_LOG`, then `RUST_LOG`, and defaults to `warn`. `--verbose`
//! sets the default level to `debug` on top of whichever filter applies.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "BRAVE_HELLO_LOG";

/// Builds the log filter from the environment.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Installs the global subscriber.
///
/// Returns false if one was already installed, which is expected when the
/// library is driven more than once in a process (tests).
pub fn init(verbose: bool) -> bool {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
