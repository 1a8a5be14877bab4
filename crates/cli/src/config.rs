// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use bulk_rewrite_engine::config::{
    Config, ConfigBuilder, PoolOptions, PoolOptionsBuilder, WalkOptions, WalkOptionsBuilder,
    WriteOptions, WriteOptionsBuilder,
};
use bulk_rewrite_engine::options::{self as engine_options, WriteStrategy};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(&args)?;
        let pool = pool_options_from_args(&args)?;
        let write = write_options_from_args(&args)?;

        ConfigBuilder::default()
            .walk(walk)
            .pool(pool)
            .write(write)
            .build()
            .map_err(|e| AppError::InvalidArgument(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    let on_error: engine_options::WalkErrorPolicy = args.on_walk_error.into();

    WalkOptionsBuilder::default()
        .root(args.source.clone())
        .suffix(args.suffix.clone())
        .follow_links(args.follow_links)
        .on_error(on_error)
        .build()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))
}

fn pool_options_from_args(args: &Args) -> Result<PoolOptions, AppError> {
    let workers = args.jobs.unwrap_or_else(num_cpus::get);
    if workers == 0 {
        return Err(AppError::InvalidArgument(
            "--jobs must be at least 1".into(),
        ));
    }

    PoolOptionsBuilder::default()
        .workers(workers)
        .queue_capacity(args.queue_capacity)
        .build()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))
}

fn write_options_from_args(args: &Args) -> Result<WriteOptions, AppError> {
    let strategy = if args.atomic {
        WriteStrategy::Atomic
    } else {
        WriteStrategy::Truncate
    };

    WriteOptionsBuilder::default()
        .strategy(strategy)
        .file_mode(args.mode.0)
        .build()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::WalkErrorPolicy,
    engine_options::WalkErrorPolicy,
    Abort,
    Skip
);
