use urlsan_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Logging first; falls back to stderr on an unwritable state dir.
    logging::init();

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("urlsan error: {:#}", err);
        std::process::exit(1);
    }
}
