use pburl_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // The log file is best-effort; stderr keeps the CLI usable without it.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("pburl error: {:#}", err);
        std::process::exit(1);
    }
}
