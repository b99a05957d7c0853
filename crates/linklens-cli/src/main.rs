use linklens_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Logging first; fall back to stderr when the state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("linklens error: {:#}", err);
        std::process::exit(1);
    }
}
