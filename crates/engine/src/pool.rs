//! Fixed-size worker pool fed through a closable channel.
//!
//! The dispatching thread is the only sender. It pushes every task in order
//! (blocking while the channel is full) and then drops the sender, which is
//! the one and only end-of-work signal: each worker drains
//! `Receiver::iter()` until the channel is both empty and disconnected. The
//! surrounding `std::thread::scope` is the completion barrier, so no summary
//! exists before every worker has returned.

use crate::config::PoolOptions;
use crate::error::{EngineError, Result};
use crate::report::Reporter;
use crate::stats::{ItemReport, RunSummary};
use crate::task::{Task, TaskList};
use crossbeam_channel::Receiver;
use log::debug;
use std::thread;
use std::time::Instant;

/// Hand every task to exactly one of `options.workers` threads and wait for
/// all of them.
///
/// `handler` runs once per task; its report goes to `reporter` and into the
/// returned summary. Per-task failures never stop the pool.
///
/// # Errors
/// Returns [`EngineError::Config`] for a zero worker count and
/// [`EngineError::WorkerSpawn`] if the OS refuses a thread.
///
/// # Panics
/// A panic inside `handler` or `reporter` is re-raised on the calling thread
/// once the remaining workers have been joined.
pub fn run_all<H, R>(
    tasks: TaskList,
    options: &PoolOptions,
    handler: H,
    reporter: &R,
) -> Result<RunSummary>
where
    H: Fn(&Task) -> ItemReport + Sync,
    R: Reporter + ?Sized,
{
    if options.workers == 0 {
        return Err(EngineError::Config(
            "worker count must be at least 1".into(),
        ));
    }

    let start = Instant::now();
    let total = tasks.len();
    let handler = &handler;
    let (tx, rx) = crossbeam_channel::bounded::<Task>(options.queue_capacity);

    // The sender lives inside the scope closure so that an early return
    // disconnects the channel and lets already-spawned workers exit.
    let tallies = thread::scope(move |scope| -> Result<Vec<RunSummary>> {
        let mut workers = Vec::with_capacity(options.workers);
        for id in 0..options.workers {
            let rx = rx.clone();
            let handle = thread::Builder::new()
                .name(format!("bulk-rewrite-worker-{id}"))
                .spawn_scoped(scope, move || work(id, &rx, handler, reporter))
                .map_err(|source| EngineError::WorkerSpawn { id, source })?;
            workers.push(handle);
        }
        drop(rx);

        for task in tasks {
            // Only fails once every receiver is gone, i.e. all workers died.
            if tx.send(task).is_err() {
                break;
            }
        }
        drop(tx);

        let mut tallies = Vec::with_capacity(workers.len());
        for handle in workers {
            match handle.join() {
                Ok(tally) => tallies.push(tally),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        Ok(tallies)
    })?;

    let mut summary = RunSummary::default();
    for tally in tallies {
        summary.merge(tally);
    }
    summary.elapsed = start.elapsed();

    debug!(
        "pool of {} worker(s) finished {}/{} task(s)",
        options.workers, summary.attempted, total
    );
    Ok(summary)
}

fn work<H, R>(id: usize, rx: &Receiver<Task>, handler: &H, reporter: &R) -> RunSummary
where
    H: Fn(&Task) -> ItemReport + Sync,
    R: Reporter + ?Sized,
{
    debug!("worker {id} started");
    let mut tally = RunSummary::default();
    for task in rx.iter() {
        let report = handler(&task);
        reporter.report(&report);
        tally.record(report);
    }
    debug!("worker {id} done after {} task(s)", tally.attempted);
    tally
}
