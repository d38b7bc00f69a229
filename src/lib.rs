//! Promptfill: placeholder tooling for prompt templates.
//!
//! Prompt templates mark their inputs with `{{key}}` placeholders. This crate
//! extracts those keys, checks a body of values against them, renders
//! highlighted previews and execution prompts, keeps input-field lists in
//! sync as templates are edited, and validates model parameters against a
//! typed schema.
//!
//! ```
//! use promptfill::template::{Body, render, scan};
//! use serde_json::json;
//!
//! let template = "Write a {{tone}} poem about {{topic}}.";
//! assert_eq!(scan(template), vec!["tone", "topic"]);
//!
//! let mut body = Body::new();
//! body.insert("tone".to_string(), json!("calm"));
//! body.insert("topic".to_string(), json!("rivers"));
//! assert_eq!(render(template, &body).unwrap(), "Write a calm poem about rivers.");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod input;
pub mod logging;
pub mod params;
pub mod template;
