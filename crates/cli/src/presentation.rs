// crates/cli/src/presentation.rs
use bulk_rewrite_engine::filesystem::display_path;
use bulk_rewrite_engine::{ItemReport, Reporter, RunSummary};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Prints progress the way the original console tool did. Write errors
/// (closed pipe and the like) are ignored so reporting never takes a worker
/// down.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    root: PathBuf,
}

impl ConsoleReporter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Reporter for ConsoleReporter {
    fn on_start(&self, root: &Path) {
        let _ = writeln!(
            std::io::stdout().lock(),
            "[+] reading all files in dir \"{}\" to modify",
            root.display()
        );
    }

    fn on_discovered(&self, count: usize) {
        let _ = writeln!(std::io::stdout().lock(), "[+] ready with {count} items");
    }

    fn report(&self, item: &ItemReport) {
        let _ = match &item.outcome {
            Ok(()) => writeln!(std::io::stdout().lock(), "{}", item_line(&self.root, item)),
            Err(err) => writeln!(
                std::io::stderr().lock(),
                "{}: {err}",
                item_line(&self.root, item)
            ),
        };
    }

    fn summarize(&self, summary: &RunSummary) {
        let _ = writeln!(std::io::stdout().lock(), "{}", summary_line(summary));
    }
}

/// `[1.23ms] processed "dir/a.html"` or `[1.23ms] failed "dir/a.html"`.
pub fn item_line(root: &Path, item: &ItemReport) -> String {
    let verb = if item.is_success() { "processed" } else { "failed" };
    format!(
        "[{:.2}ms] {verb} \"{}\"",
        item.elapsed_ms(),
        display_path(root, &item.path).display()
    )
}

pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "[{:.2}s] processed all items, wrote {} updates ({} failed)",
        summary.elapsed.as_secs_f64(),
        summary.succeeded,
        summary.failed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulk_rewrite_engine::error::EngineError;
    use std::time::Duration;

    #[test]
    fn item_line_uses_path_relative_to_root() {
        let item = ItemReport {
            path: PathBuf::from("source/blog/a.html"),
            elapsed: Duration::from_micros(1500),
            outcome: Ok(()),
        };
        assert_eq!(
            item_line(Path::new("source"), &item),
            format!("[1.50ms] processed \"{}\"", Path::new("blog/a.html").display())
        );
    }

    #[test]
    fn item_line_falls_back_to_full_path() {
        let item = ItemReport {
            path: PathBuf::from("elsewhere/a.html"),
            elapsed: Duration::ZERO,
            outcome: Err(EngineError::Config("x".into())),
        };
        assert_eq!(
            item_line(Path::new("source"), &item),
            format!("[0.00ms] failed \"{}\"", Path::new("elsewhere/a.html").display())
        );
    }

    #[test]
    fn summary_line_separates_successes_and_failures() {
        let summary = RunSummary {
            attempted: 5,
            succeeded: 4,
            failed: 1,
            elapsed: Duration::from_millis(1250),
            failures: Vec::new(),
        };
        assert_eq!(
            summary_line(&summary),
            "[1.25s] processed all items, wrote 4 updates (1 failed)"
        );
    }
}
