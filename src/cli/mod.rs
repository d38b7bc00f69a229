//! CLI argument parsing for promptfill.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Promptfill: placeholder tooling for prompt templates.
///
/// Templates mark inputs with `{{key}}` placeholders. Bodies are JSON
/// objects mapping keys to values. Any file argument may be `-` to read
/// standard input.
#[derive(Parser, Debug)]
#[command(name = "promptfill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: promptfill.yaml in the current directory, if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for promptfill.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the placeholder keys of a template.
    ///
    /// Prints one key per line, in order of appearance.
    Keys(KeysArgs),

    /// Check that a body supplies every placeholder.
    ///
    /// Exits with status 2 naming the first key that is missing or empty.
    Check(BodyArgs),

    /// Render a highlighted preview of a template.
    ///
    /// Values are substituted and wrapped in the configured markup.
    /// Unresolved placeholders are wrapped as their key.
    Highlight(BodyArgs),

    /// Render the plain prompt for execution.
    ///
    /// Fails like `check` when a placeholder has no value.
    Render(BodyArgs),

    /// Sync an input-field list with a template's placeholders.
    ///
    /// Drops fields for removed placeholders and adds empty fields for new
    /// ones. Prints the resulting JSON field list.
    Reconcile(ReconcileArgs),

    /// Convert between a string body and a field list.
    Fields(FieldsArgs),

    /// Validate model parameters against a parameter schema.
    ///
    /// Prints the resolved parameters, with defaults filled in, as JSON.
    Params(ParamsArgs),
}

/// Where the template comes from.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template text. Read from --file or stdin when omitted.
    pub template: Option<String>,

    /// Read the template from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `keys` command.
#[derive(Args, Debug)]
pub struct KeysArgs {
    #[command(flatten)]
    pub source: TemplateArgs,

    /// Print each key once, at its first appearance.
    #[arg(short, long)]
    pub unique: bool,
}

/// Arguments for commands that take a template and a body.
#[derive(Args, Debug)]
pub struct BodyArgs {
    #[command(flatten)]
    pub source: TemplateArgs,

    /// JSON object of placeholder values.
    #[arg(short, long)]
    pub body: PathBuf,
}

/// Arguments for the `reconcile` command.
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub source: TemplateArgs,

    /// Current JSON field list. Starts from no fields when omitted.
    #[arg(long)]
    pub fields: Option<PathBuf>,
}

/// Arguments for the `fields` command.
#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// JSON object of string values to convert into a field list.
    #[arg(short, long, conflicts_with = "to_body", required_unless_present = "to_body")]
    pub body: Option<PathBuf>,

    /// JSON field list to fold back into an object.
    #[arg(long)]
    pub to_body: Option<PathBuf>,
}

/// Arguments for the `params` command.
#[derive(Args, Debug)]
pub struct ParamsArgs {
    /// Parameter schema (YAML or JSON). Defaults to `params_schema` from config.
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// JSON object of parameter values. Only the schema is checked when omitted.
    #[arg(long, conflicts_with = "print_schema")]
    pub values: Option<PathBuf>,

    /// Print the validated schema as YAML instead of resolving values.
    #[arg(long)]
    pub print_schema: bool,
}
