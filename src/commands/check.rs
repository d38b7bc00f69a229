//! Implementation of the `check`, `highlight` and `render` commands.
//!
//! All three read a template plus a JSON body.

use crate::cli::BodyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{
    ensure_single_stdin, is_stdin, parse_body, read_source, read_template, template_reads_stdin,
};
use crate::template::{Body, Markup, highlight, render, validate};
use tracing::info;

/// Execute the `promptfill check` command.
///
/// Prints `ok` when the body satisfies every placeholder.
pub fn cmd_check(args: BodyArgs) -> Result<()> {
    let (template, body) = load(args)?;
    super::emit(&run_check(&template, body)?);
    Ok(())
}

/// Execute the `promptfill highlight` command.
pub fn cmd_highlight(args: BodyArgs, config: &Config) -> Result<()> {
    let (template, body) = load(args)?;
    super::emit(&run_highlight(&template, &body, &config.markup()));
    Ok(())
}

/// Execute the `promptfill render` command.
pub fn cmd_render(args: BodyArgs) -> Result<()> {
    let (template, body) = load(args)?;
    super::emit(&run_render(&template, &body)?);
    Ok(())
}

pub(super) fn run_check(template: &str, body: Body) -> Result<String> {
    let body = validate(template, body)?;
    info!(keys = body.len(), "body satisfies template");
    Ok("ok".to_string())
}

pub(super) fn run_highlight(template: &str, body: &Body, markup: &Markup) -> String {
    info!(keys = body.len(), tag = %markup.tag, "highlighting template");
    highlight(template, body, markup)
}

pub(super) fn run_render(template: &str, body: &Body) -> Result<String> {
    let rendered = render(template, body)?;
    info!(chars = rendered.chars().count(), "rendered prompt");
    Ok(rendered)
}

pub(super) fn load(args: BodyArgs) -> Result<(String, Body)> {
    ensure_single_stdin(&[
        (
            "the template",
            template_reads_stdin(args.source.template.as_deref(), args.source.file.as_deref()),
        ),
        ("--body", is_stdin(&args.body)),
    ])?;

    let template = read_template(args.source.template, args.source.file.as_ref())?;
    let body = parse_body(&read_source(&args.body)?)?;
    Ok((template, body))
}
