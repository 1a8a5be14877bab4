use crate::error::EngineError;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one pass of the per-file pipeline.
#[derive(Debug)]
pub struct ItemReport {
    pub path: PathBuf,
    pub elapsed: Duration,
    pub outcome: Result<(), EngineError>,
}

impl ItemReport {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Aggregate of every item handled during a run.
///
/// `attempted` always equals `succeeded + failed`; the errors behind the
/// failures are kept in `failures` in the order workers recorded them.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed: Duration,
    pub failures: Vec<(PathBuf, EngineError)>,
}

impl RunSummary {
    pub fn record(&mut self, report: ItemReport) {
        self.attempted += 1;
        match report.outcome {
            Ok(()) => self.succeeded += 1,
            Err(err) => {
                self.failed += 1;
                self.failures.push((report.path, err));
            }
        }
    }

    /// Fold another partial summary (one worker's tally) into this one.
    pub fn merge(&mut self, other: Self) {
        self.attempted += other.attempted;
        self.succeeded += other.succeeded;
        self.failed += other.failed;
        self.failures.extend(other.failures);
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
