//! Sprig: keyword-routed project scaffold generator.
//!
//! This is the main entry point for the `sprig` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod agents;
pub mod classifier;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod inference;
pub mod manager;
pub mod naming;
pub mod templates;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr, naming the
            // pipeline stage it came from.
            eprintln!("Error ({}): {}", err.stage(), err);

            // A filesystem fault may leave a partially written project behind;
            // list what made it to disk so the caller can clean up or resume.
            for path in err.written_paths() {
                eprintln!("  written before failure: {}", path.display());
            }

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
