//! Configuration model for promptfill.
//!
//! This module defines the Config struct that represents `promptfill.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;


pub use model::{Config, DEFAULT_CONFIG_FILE};
