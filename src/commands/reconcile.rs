//! Implementation of the `promptfill reconcile` command.

use crate::cli::ReconcileArgs;
use crate::error::Result;
use crate::input::{
    ensure_single_stdin, is_stdin, parse_fields, read_source, read_template, template_reads_stdin,
};
use crate::template::{Field, reconcile, scan};
use tracing::info;

/// Execute the `promptfill reconcile` command.
pub fn cmd_reconcile(args: ReconcileArgs) -> Result<()> {
    ensure_single_stdin(&[
        (
            "the template",
            template_reads_stdin(args.source.template.as_deref(), args.source.file.as_deref()),
        ),
        ("--fields", args.fields.as_deref().is_some_and(is_stdin)),
    ])?;

    let template = read_template(args.source.template, args.source.file.as_ref())?;
    let fields = match &args.fields {
        Some(path) => parse_fields(&read_source(path)?)?,
        None => Vec::new(),
    };

    super::emit(&run_reconcile(&template, &fields)?);
    Ok(())
}

pub(super) fn run_reconcile(template: &str, fields: &[Field]) -> Result<String> {
    let reconciled = reconcile(&scan(template), fields);
    info!(
        before = fields.len(),
        after = reconciled.len(),
        "reconciled fields"
    );
    super::to_json(&reconciled)
}
