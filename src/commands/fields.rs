//! Implementation of the `promptfill fields` command.

use crate::cli::FieldsArgs;
use crate::error::{PromptError, Result};
use crate::input::{parse_field_map, parse_fields, read_source};
use crate::template::{to_body, to_fields};

/// Execute the `promptfill fields` command.
pub fn cmd_fields(args: FieldsArgs) -> Result<()> {
    let output = match (&args.body, &args.to_body) {
        (Some(path), None) => run_to_fields(&read_source(path)?)?,
        (None, Some(path)) => run_to_body(&read_source(path)?)?,
        _ => {
            return Err(PromptError::UserError(
                "pass exactly one of --body or --to-body".to_string(),
            ));
        }
    };

    super::emit(&output);
    Ok(())
}

pub(super) fn run_to_fields(text: &str) -> Result<String> {
    super::to_json(&to_fields(&parse_field_map(text)?))
}

pub(super) fn run_to_body(text: &str) -> Result<String> {
    super::to_json(&to_body(&parse_fields(text)?))
}
