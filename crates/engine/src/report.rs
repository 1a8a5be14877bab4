//! Progress and summary reporting.

use crate::filesystem::display_path;
use crate::stats::{ItemReport, RunSummary};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Receives run events. Called concurrently from every worker, so
/// implementations must be thread safe and must not panic.
pub trait Reporter: Send + Sync {
    fn on_start(&self, _root: &Path) {}

    fn on_discovered(&self, _count: usize) {}

    fn report(&self, item: &ItemReport);

    /// Called once, after every worker has exited.
    fn summarize(&self, summary: &RunSummary);
}

/// Reporter writing through the `log` facade.
#[derive(Debug, Clone)]
pub struct LogReporter {
    root: PathBuf,
}

impl LogReporter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Reporter for LogReporter {
    fn on_start(&self, root: &Path) {
        info!("reading all files in dir {} to modify", root.display());
    }

    fn on_discovered(&self, count: usize) {
        info!("ready with {count} items");
    }

    fn report(&self, item: &ItemReport) {
        let rel = display_path(&self.root, &item.path);
        match &item.outcome {
            Ok(()) => info!("[{:.2}ms] processed {:?}", item.elapsed_ms(), rel),
            Err(err) => warn!("[{:.2}ms] failed {:?}: {err}", item.elapsed_ms(), rel),
        }
    }

    fn summarize(&self, summary: &RunSummary) {
        info!(
            "[{:.2}s] processed {} item(s): {} rewritten, {} failed",
            summary.elapsed.as_secs_f64(),
            summary.attempted,
            summary.succeeded,
            summary.failed
        );
    }
}
