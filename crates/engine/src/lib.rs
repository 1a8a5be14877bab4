// crates/engine/src/lib.rs
//! Parallel in-place file rewriting.
//!
//! [`run`] walks a directory tree, hands every file whose name ends with the
//! configured suffix to a fixed pool of worker threads, rewrites each one
//! through a [`FileTransform`] and reports progress through a [`Reporter`].
//! Failures on individual files are collected in the returned
//! [`RunSummary`]; only discovery and configuration problems abort the run.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod filter;
pub mod options;
pub mod pool;
pub mod processor;
pub mod report;
pub mod stats;
pub mod task;
pub mod transform;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filter::PathFilter;

pub use crate::report::{LogReporter, Reporter};
pub use crate::stats::{ItemReport, RunSummary};
pub use crate::task::{Task, TaskList};
pub use crate::transform::{FileTransform, LowercaseTitle, TransformError};

/// Run the rewrite over `config.walk.root`.
///
/// # Errors
///
/// Returns an error only for failures that stop the whole run: an invalid
/// configuration, a root that cannot be accessed, a traversal error under
/// [`options::WalkErrorPolicy::Abort`], or a worker thread that cannot be
/// spawned. Per-file errors are collected in [`RunSummary::failures`].
pub fn run<T, R>(config: &Config, transform: &T, reporter: &R) -> Result<RunSummary>
where
    T: FileTransform + ?Sized,
    R: Reporter + ?Sized,
{
    if config.pool.workers == 0 {
        return Err(EngineError::Config(
            "worker count must be at least 1".into(),
        ));
    }

    reporter.on_start(&config.walk.root);

    let filter = PathFilter::new(config.walk.suffix.clone());
    let tasks = filesystem::walk(&config.walk, &filter)?;
    reporter.on_discovered(tasks.len());

    let summary = pool::run_all(
        tasks,
        &config.pool,
        |task| processor::process_file(task, transform, &config.write),
        reporter,
    )?;

    reporter.summarize(&summary);
    Ok(summary)
}
