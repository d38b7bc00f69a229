//! Body validation against a template's placeholders.

use super::Body;
use super::scanner::scan;
use super::value::is_truthy;
use thiserror::Error;
use tracing::debug;

/// Error type for template validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder has no value, or only a falsy one, in the body.
    #[error("missing value for key '{key}'")]
    MissingKey {
        /// The placeholder key that could not be resolved.
        key: String,
    },
}

/// Check that `body` supplies a value for every placeholder in `template`.
///
/// Keys are checked in scan order and the first absent or falsy one is
/// reported. `0`, `false`, `null` and `""` all count as missing.
///
/// # Returns
///
/// * `Ok(Body)` - The body, unchanged
/// * `Err(TemplateError::MissingKey)` - The first unresolved key
///
/// # Examples
///
/// ```
/// use promptfill::template::{Body, TemplateError, validate};
/// use serde_json::json;
///
/// let mut body = Body::new();
/// body.insert("x".to_string(), json!("v"));
/// assert_eq!(validate("{{x}}", body.clone()).unwrap(), body);
///
/// let err = validate("{{x}}", Body::new()).unwrap_err();
/// assert_eq!(err, TemplateError::MissingKey { key: "x".to_string() });
/// ```
pub fn validate(template: &str, body: Body) -> Result<Body, TemplateError> {
    check(template, &body)?;
    Ok(body)
}

/// Borrowing form of [`validate`].
pub(super) fn check(template: &str, body: &Body) -> Result<(), TemplateError> {
    for key in scan(template) {
        let supplied = body.get(&key).is_some_and(is_truthy);
        if !supplied {
            debug!(key = %key, "placeholder has no value");
            return Err(TemplateError::MissingKey { key });
        }
    }

    Ok(())
}
