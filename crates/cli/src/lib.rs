// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::presentation::ConsoleReporter;
use bulk_rewrite_engine::{LogReporter, LowercaseTitle, RunSummary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status when the run finished but at least one file failed.
/// (`1` is fatal errors, `2` is clap's usage errors.)
pub const EXIT_PARTIAL_FAILURE: u8 = 3;

/// Rewrite `<title>` text under the configured root.
///
/// Console lines go to stdout/stderr unless `quiet`, in which case events
/// are only logged.
///
/// # Errors
/// Fatal engine errors, wrapped in [`error::AppError::Engine`].
pub fn execute(config: &Config, quiet: bool) -> error::Result<RunSummary> {
    let summary = if quiet {
        bulk_rewrite_engine::run(config, &LowercaseTitle, &LogReporter::new(&config.walk.root))?
    } else {
        bulk_rewrite_engine::run(
            config,
            &LowercaseTitle,
            &ConsoleReporter::new(&config.walk.root),
        )?
    };
    Ok(summary)
}
