//! Conversion between string bodies and ordered input-field lists.
//!
//! The authoring UI renders one input per placeholder. It keeps those inputs
//! as a list of [`Field`]s and folds them back into a map when a prompt is
//! executed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An insertion-ordered map of placeholder names to string values.
pub type FieldMap = IndexMap<String, String>;

/// One named input, resolved or pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Placeholder key this input supplies.
    pub name: String,
    /// Current value; empty when not yet filled in.
    #[serde(default)]
    pub value: String,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a field with an empty value.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }
}

/// One field per map entry, in map order.
pub fn to_fields(body: &FieldMap) -> Vec<Field> {
    body.iter()
        .map(|(name, value)| Field::new(name.clone(), value.clone()))
        .collect()
}

/// Fold fields into a map.
///
/// A later field with a repeated name overwrites the earlier value; the key
/// keeps the position of its first occurrence.
pub fn to_body(fields: &[Field]) -> FieldMap {
    let mut body = FieldMap::with_capacity(fields.len());
    for field in fields {
        body.insert(field.name.clone(), field.value.clone());
    }
    body
}

/// Bring a field list in line with the current set of placeholder keys.
///
/// Fields whose name is no longer a key are dropped and the survivors keep
/// their relative order. Keys with no field are then appended with empty
/// values, in `keys` order. The result holds exactly one field per distinct
/// key; repeated field names keep their first occurrence.
///
/// # Examples
///
/// ```
/// use promptfill::template::{Field, reconcile};
///
/// let keys = vec!["a".to_string(), "b".to_string()];
/// let fields = vec![Field::new("a", "x"), Field::new("c", "y")];
///
/// assert_eq!(
///     reconcile(&keys, &fields),
///     vec![Field::new("a", "x"), Field::empty("b")]
/// );
/// ```
pub fn reconcile(keys: &[String], fields: &[Field]) -> Vec<Field> {
    let declared: HashSet<&str> = keys.iter().map(String::as_str).collect();
    let mut present: HashSet<String> = HashSet::with_capacity(keys.len());
    let mut result = Vec::with_capacity(keys.len());

    for field in fields {
        if declared.contains(field.name.as_str()) && present.insert(field.name.clone()) {
            result.push(field.clone());
        }
    }

    for key in keys {
        if present.insert(key.clone()) {
            result.push(Field::empty(key.clone()));
        }
    }

    result
}
