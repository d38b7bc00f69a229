//! Plain prompt rendering for execution.

use super::Body;
use super::scanner::replace_placeholders;
use super::validator::{TemplateError, check};
use super::value::stringify;

/// Render the prompt text sent to a provider.
///
/// The body is validated first, so every placeholder resolves. Substitution
/// is a single pass over the template; values are inserted verbatim and are
/// not scanned again.
///
/// # Examples
///
/// ```
/// use promptfill::template::{Body, render};
/// use serde_json::json;
///
/// let mut body = Body::new();
/// body.insert("n".to_string(), json!("Bo"));
/// assert_eq!(render("Hi {{n}}", &body).unwrap(), "Hi Bo");
/// ```
pub fn render(template: &str, body: &Body) -> Result<String, TemplateError> {
    check(template, body)?;

    Ok(replace_placeholders(template, |key| {
        body.get(key).map(stringify).unwrap_or_default()
    }))
}
