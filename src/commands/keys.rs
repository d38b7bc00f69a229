//! Implementation of the `promptfill keys` command.

use crate::cli::KeysArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::read_template;
use crate::template::{scan, unique_keys};
use tracing::info;

/// Execute the `promptfill keys` command.
pub fn cmd_keys(args: KeysArgs, config: &Config) -> Result<()> {
    let template = read_template(args.source.template, args.source.file.as_ref())?;
    let unique = args.unique || config.unique_keys;

    let output = run_keys(&template, unique);
    if !output.is_empty() {
        super::emit(&output);
    }
    Ok(())
}

/// List keys one per line.
pub(super) fn run_keys(template: &str, unique: bool) -> String {
    let keys = if unique {
        unique_keys(template)
    } else {
        scan(template)
    };

    info!(count = keys.len(), unique, "scanned template");
    keys.join("\n")
}
