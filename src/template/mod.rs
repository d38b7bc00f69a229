//! Prompt template interpolation.
//!
//! Templates are plain strings containing `{{key}}` placeholders, where
//! `key` is one or more non-whitespace characters:
//!
//! ```text
//! Write a {{tone}} poem about {{topic}}.
//! ```
//!
//! This module provides:
//!
//! - **Scanner**: extracts placeholder keys in order of appearance
//! - **Validator**: checks that a body supplies a truthy value for every key
//! - **Highlighter**: previews the interpolated template with marked-up values
//! - **Renderer**: produces the plain prompt sent for execution
//! - **Fields**: converts between bodies and ordered input-field lists
//!
//! All operations are pure and never mutate their inputs.

mod fields;
mod highlighter;
mod render;
mod scanner;
mod validator;
mod value;

#[cfg(test)]
mod tests;

pub use fields::{Field, FieldMap, reconcile, to_body, to_fields};
pub use highlighter::{Markup, highlight};
pub use render::render;
pub use scanner::{scan, unique_keys};
pub use validator::{TemplateError, validate};
pub use value::{is_truthy, stringify};

/// A caller-supplied set of placeholder values.
///
/// Key order is insertion order, which drives the order of highlight passes.
pub type Body = serde_json::Map<String, serde_json::Value>;
