//! Promptfill CLI entry point.
//!
//! Parses arguments, loads config, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

use promptfill::cli::Cli;
use promptfill::config::Config;
use promptfill::error::PromptError;
use promptfill::{commands, exit_codes, logging};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let result = std::env::current_dir()
        .map_err(|e| {
            PromptError::UserError(format!(
                "failed to determine current directory: {}",
                e
            ))
        })
        .and_then(|cwd| Config::discover(cli.config.as_deref(), &cwd))
        .and_then(|config| {
            debug!(?config, "resolved config");
            commands::dispatch(cli.command, &config)
        });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
