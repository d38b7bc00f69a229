//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "promptfill.yaml";

/// Configuration for promptfill.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Highlight settings
    // =========================================================================
    /// Element wrapping highlighted values (default: "span").
    #[serde(default = "default_highlight_tag")]
    pub highlight_tag: String,

    /// Class attribute of the wrapper; empty omits the attribute.
    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,

    /// Escape HTML special characters inside highlighted values.
    #[serde(default)]
    pub escape_html: bool,

    // =========================================================================
    // Key settings
    // =========================================================================
    /// Whether `keys` drops repeated placeholders by default.
    #[serde(default)]
    pub unique_keys: bool,

    // =========================================================================
    // Parameter settings
    // =========================================================================
    /// Parameter schema used by `params` when `--schema` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params_schema: Option<String>,
}

// Default value functions for serde
fn default_highlight_tag() -> String {
    "span".to_string()
}
fn default_highlight_class() -> String {
    "highlight".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight_tag: default_highlight_tag(),
            highlight_class: default_highlight_class(),
            escape_html: false,
            unique_keys: false,
            params_schema: None,
        }
    }
}
