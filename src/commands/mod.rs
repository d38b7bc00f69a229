//! Command implementations for promptfill.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command has a `run_*` function that returns the
//! text to print, and a thin `cmd_*` wrapper that prints it.

mod check;
mod fields;
mod keys;
mod params;
mod reconcile;


use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Keys(args) => keys::cmd_keys(args, config),
        Command::Check(args) => check::cmd_check(args),
        Command::Highlight(args) => check::cmd_highlight(args, config),
        Command::Render(args) => check::cmd_render(args),
        Command::Reconcile(args) => reconcile::cmd_reconcile(args),
        Command::Fields(args) => fields::cmd_fields(args),
        Command::Params(args) => params::cmd_params(args, config),
    }
}

/// Print command output, avoiding a doubled trailing newline.
fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Pretty-print a serializable value as JSON.
fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        crate::error::PromptError::UserError(format!("failed to serialize output: {}", e))
    })
}
