//! Implementation of the `promptfill params` command.

use crate::cli::ParamsArgs;
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::input::{parse_body, read_source};
use crate::params::ParamSchema;
use std::path::PathBuf;
use tracing::info;

/// Execute the `promptfill params` command.
///
/// Without `--values`, only the schema is validated and its defaults are
/// printed.
pub fn cmd_params(args: ParamsArgs, config: &Config) -> Result<()> {
    let schema_path = args
        .schema
        .or_else(|| config.params_schema.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            PromptError::UserError(
                "no parameter schema given.\n\n\
                 Pass --schema or set params_schema in promptfill.yaml."
                    .to_string(),
            )
        })?;

    let schema = ParamSchema::load(&schema_path)?;
    if args.print_schema {
        super::emit(&run_print_schema(&schema)?);
        return Ok(());
    }

    let values = match &args.values {
        Some(path) => Some(read_source(path)?),
        None => None,
    };

    super::emit(&run_params(&schema, values.as_deref())?);
    Ok(())
}

pub(super) fn run_print_schema(schema: &ParamSchema) -> Result<String> {
    info!(declared = schema.params.len(), "printing parameter schema");
    schema.to_yaml()
}

pub(super) fn run_params(schema: &ParamSchema, values: Option<&str>) -> Result<String> {
    let resolved = match values {
        Some(text) => schema.resolve(&parse_body(text)?)?,
        None => schema.defaults(),
    };

    info!(
        declared = schema.params.len(),
        resolved = resolved.len(),
        "resolved parameters"
    );
    super::to_json(&resolved)
}
