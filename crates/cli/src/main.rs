use bulk_rewrite_cli::args::Args;
use bulk_rewrite_cli::config::Config;
use bulk_rewrite_cli::error::AppError;
use bulk_rewrite_cli::{EXIT_PARTIAL_FAILURE, execute, logging};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose);
    let quiet = args.quiet;

    let result = Config::try_from(args).and_then(|config| execute(&config, quiet));

    match result {
        Ok(summary) if summary.has_failures() => {
            log::warn!("{} of {} file(s) failed", summary.failed, summary.attempted);
            ExitCode::from(EXIT_PARTIAL_FAILURE)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e @ AppError::InvalidArgument(_)) => {
            eprintln!("Argument Error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
