//! Logging bootstrap.
//!
//! The engine logs through the `log` facade; the fmt subscriber installed
//! here picks those records up through its `tracing-log` bridge.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_thread_names(verbose >= 3)
        .try_init();

    tracing::debug!("bulk_rewrite started with verbosity level: {verbose}");
}
