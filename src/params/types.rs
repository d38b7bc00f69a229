//! Parameter declarations and their value checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error type for parameter schema and value failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A value was supplied for a parameter the schema does not declare.
    #[error("unknown parameter '{name}'")]
    UnknownParam { name: String },

    /// A value has the wrong JSON type for its parameter.
    #[error("parameter '{name}' expects {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A numeric value falls outside its declared bounds.
    #[error("parameter '{name}' value {value} is outside {range}")]
    OutOfRange {
        name: String,
        value: String,
        range: String,
    },

    /// A value is not one of the declared options.
    #[error("parameter '{name}' value '{value}' is not one of: {allowed}")]
    NotInEnum {
        name: String,
        value: String,
        allowed: String,
    },

    /// A text value exceeds its maximum length.
    #[error("parameter '{name}' exceeds {max_length} characters")]
    TooLong { name: String, max_length: usize },

    /// The schema declares the same parameter twice.
    #[error("parameter '{name}' is declared more than once")]
    DuplicateParam { name: String },

    /// A declaration is inconsistent with itself.
    #[error("invalid declaration for '{name}': {reason}")]
    InvalidSpec { name: String, reason: String },
}

/// The kind of value a parameter accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    /// Whole numbers, optionally bounded (inclusive).
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    /// Any number, optionally bounded (inclusive).
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    /// Free text.
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    /// One of a fixed set of strings.
    Enum { values: Vec<String> },
    /// `true` or `false`.
    Boolean,
    /// Any JSON array.
    Array,
    /// Any JSON object.
    Object,
}

impl ParamKind {
    /// Short name used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamKind::Integer { .. } => "integer",
            ParamKind::Number { .. } => "number",
            ParamKind::Text { .. } => "text",
            ParamKind::Enum { .. } => "enum",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
            ParamKind::Object => "object",
        }
    }

    /// Check that `value` is acceptable for parameter `name`.
    pub fn check(&self, name: &str, value: &Value) -> Result<(), ParamError> {
        let mismatch = |expected: &'static str| ParamError::TypeMismatch {
            name: name.to_string(),
            expected,
            found: json_type_name(value),
        };

        match self {
            ParamKind::Integer { min, max } => {
                let n = as_integer(value).ok_or_else(|| mismatch("integer"))?;
                if min.is_some_and(|lo| n < lo) || max.is_some_and(|hi| n > hi) {
                    return Err(ParamError::OutOfRange {
                        name: name.to_string(),
                        value: n.to_string(),
                        range: format_range(min, max),
                    });
                }
            }
            ParamKind::Number { min, max } => {
                let n = value.as_f64().ok_or_else(|| mismatch("number"))?;
                if min.is_some_and(|lo| n < lo) || max.is_some_and(|hi| n > hi) {
                    return Err(ParamError::OutOfRange {
                        name: name.to_string(),
                        value: n.to_string(),
                        range: format_range(min, max),
                    });
                }
            }
            ParamKind::Text { max_length } => {
                let s = value.as_str().ok_or_else(|| mismatch("text"))?;
                if let Some(limit) = *max_length {
                    if s.chars().count() > limit {
                        return Err(ParamError::TooLong {
                            name: name.to_string(),
                            max_length: limit,
                        });
                    }
                }
            }
            ParamKind::Enum { values } => {
                let s = value.as_str().ok_or_else(|| mismatch("enum"))?;
                if !values.iter().any(|allowed| allowed == s) {
                    return Err(ParamError::NotInEnum {
                        name: name.to_string(),
                        value: s.to_string(),
                        allowed: values.join(", "),
                    });
                }
            }
            ParamKind::Boolean => {
                if !value.is_boolean() {
                    return Err(mismatch("boolean"));
                }
            }
            ParamKind::Array => {
                if !value.is_array() {
                    return Err(mismatch("array"));
                }
            }
            ParamKind::Object => {
                if !value.is_object() {
                    return Err(mismatch("object"));
                }
            }
        }

        Ok(())
    }
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Key under which the value is sent to the provider.
    pub name: String,

    /// Human-readable label for the settings form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Accepted value kind and its constraints.
    #[serde(flatten)]
    pub kind: ParamKind,

    /// Value used when the caller supplies none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamSpec {
    /// Create a spec with no label or default.
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            default: None,
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Check the declaration is internally consistent.
    pub fn validate(&self) -> Result<(), ParamError> {
        let invalid = |reason: String| ParamError::InvalidSpec {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must be non-empty".to_string()));
        }

        match &self.kind {
            ParamKind::Integer {
                min: Some(lo),
                max: Some(hi),
            } if lo > hi => {
                return Err(invalid(format!("min {} is greater than max {}", lo, hi)));
            }
            ParamKind::Number {
                min: Some(lo),
                max: Some(hi),
            } if lo > hi => {
                return Err(invalid(format!("min {} is greater than max {}", lo, hi)));
            }
            ParamKind::Enum { values } if values.is_empty() => {
                return Err(invalid("enum must list at least one value".to_string()));
            }
            _ => {}
        }

        if let Some(default) = &self.default {
            self.kind
                .check(&self.name, default)
                .map_err(|e| invalid(format!("default rejected: {}", e)))?;
        }

        Ok(())
    }
}

/// Accept integers, and floats with no fractional part.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn format_range<T: std::fmt::Display>(min: &Option<T>, max: &Option<T>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{}..={}", lo, hi),
        (Some(lo), None) => format!("{}..", lo),
        (None, Some(hi)) => format!("..={}", hi),
        (None, None) => "..".to_string(),
    }
}
