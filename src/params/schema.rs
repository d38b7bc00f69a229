//! Schema loading and value resolution.

use super::types::{ParamError, ParamSpec};
use crate::error::{PromptError, Result};
use crate::template::Body;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// The declared parameters of one provider model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSchema {
    /// Declarations in display order.
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

impl ParamSchema {
    /// Create a schema from declarations.
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    /// Load a schema from a YAML or JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read parameter schema '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a schema. JSON input is accepted as YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let schema: ParamSchema = serde_yaml::from_str(yaml).map_err(|e| {
            PromptError::UserError(format!("failed to parse parameter schema: {}", e))
        })?;

        schema.validate()?;
        Ok(schema)
    }

    /// Serialize the schema to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize parameter schema: {}", e))
        })
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|spec| spec.name == name)
    }

    /// Check every declaration, and that names are unique.
    pub fn validate(&self) -> std::result::Result<(), ParamError> {
        let mut seen = HashSet::new();
        for spec in &self.params {
            if !seen.insert(spec.name.as_str()) {
                return Err(ParamError::DuplicateParam {
                    name: spec.name.clone(),
                });
            }
            spec.validate()?;
        }
        Ok(())
    }

    /// Default values for every parameter that declares one.
    pub fn defaults(&self) -> Body {
        self.params
            .iter()
            .filter_map(|spec| {
                spec.default
                    .as_ref()
                    .map(|value| (spec.name.clone(), value.clone()))
            })
            .collect()
    }

    /// Resolve caller-supplied values against the schema.
    ///
    /// Unknown keys are rejected, supplied values must satisfy their
    /// declaration, and absent parameters take their default (or are left
    /// out when they have none). The result is in schema order.
    pub fn resolve(&self, values: &Body) -> std::result::Result<Body, ParamError> {
        if let Some(unknown) = values.keys().find(|name| self.get(name).is_none()) {
            return Err(ParamError::UnknownParam {
                name: unknown.clone(),
            });
        }

        let mut resolved = Body::new();
        for spec in &self.params {
            match values.get(&spec.name) {
                Some(value) => {
                    spec.kind.check(&spec.name, value)?;
                    resolved.insert(spec.name.clone(), value.clone());
                }
                None => {
                    if let Some(default) = &spec.default {
                        debug!(param = %spec.name, "using default value");
                        resolved.insert(spec.name.clone(), default.clone());
                    }
                }
            }
        }

        Ok(resolved)
    }
}
