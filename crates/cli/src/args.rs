// crates/cli/src/args.rs
use crate::options::WalkErrorPolicy;
use crate::parsers::FileModeArg;
use bulk_rewrite_engine::config::DEFAULT_QUEUE_CAPACITY;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "bulk_rewrite",
    version = crate::VERSION,
    about = "Lower-case every <title> of the matching files under a directory, in place and in parallel"
)]
pub struct Args {
    /// Directory that contains the files to rewrite
    #[arg(long, default_value = "source", value_hint = ValueHint::DirPath, help_heading = "Discovery")]
    pub source: PathBuf,

    /// Only files whose name ends with this suffix are rewritten
    #[arg(long, default_value = ".html", allow_hyphen_values = true, help_heading = "Discovery")]
    pub suffix: String,

    /// What to do when a directory cannot be listed
    #[arg(long, value_enum, default_value = "abort", help_heading = "Discovery")]
    pub on_walk_error: WalkErrorPolicy,

    /// Follow symbolic links while walking
    #[arg(long, help_heading = "Discovery")]
    pub follow_links: bool,

    /// Number of worker threads (default: number of logical CPUs)
    #[arg(short = 'j', long, help_heading = "Execution")]
    pub jobs: Option<usize>,

    /// Capacity of the queue between the dispatcher and the workers
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY, help_heading = "Execution")]
    pub queue_capacity: usize,

    /// Write through a temporary file and rename instead of truncating in place
    #[arg(long, help_heading = "Execution")]
    pub atomic: bool,

    /// Permission bits (octal) for files that have to be created
    #[arg(long, default_value = "644", help_heading = "Execution")]
    pub mode: FileModeArg,

    /// Do not print per-file lines; events go to the log instead
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
}
