//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{PromptError, Result};
use crate::template::Markup;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::UserError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config");
        Self::from_yaml(&content)
    }

    /// Resolve the config for a CLI invocation.
    ///
    /// An explicit path must exist. Otherwise `promptfill.yaml` in `dir` is
    /// used when present, falling back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                PromptError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `highlight_tag` must be a non-empty ASCII alphanumeric element name
    /// - `highlight_class` must not contain quotes or angle brackets
    pub fn validate(&self) -> Result<()> {
        if self.highlight_tag.is_empty() {
            return Err(PromptError::UserError(
                "config validation failed: highlight_tag must be non-empty".to_string(),
            ));
        }

        if !self
            .highlight_tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(PromptError::UserError(format!(
                "config validation failed: highlight_tag '{}' is not a valid element name",
                self.highlight_tag
            )));
        }

        if self
            .highlight_class
            .chars()
            .any(|c| matches!(c, '"' | '\'' | '<' | '>'))
        {
            return Err(PromptError::UserError(format!(
                "config validation failed: highlight_class '{}' must not contain quotes or angle brackets",
                self.highlight_class
            )));
        }

        Ok(())
    }

    /// Markup described by the highlight settings.
    pub fn markup(&self) -> Markup {
        Markup {
            tag: self.highlight_tag.clone(),
            class: self.highlight_class.clone(),
            escape_html: self.escape_html,
        }
    }
}
