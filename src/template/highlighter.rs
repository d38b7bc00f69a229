//! Highlighted preview rendering.
//!
//! The preview is produced in two passes:
//!
//! 1. Each body key, in insertion order, replaces every literal `{{key}}`
//!    with `{{value}}`. Passes run over the accumulating string, so a value
//!    that itself looks like `{{other}}` can be replaced by a later key.
//! 2. Every `{{ ... }}` left in the string is replaced with its inner text
//!    wrapped in the markup span. Unresolved placeholders are wrapped too.

use super::Body;
use super::value::stringify;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Lazy `{{ ... }}`; the inner text may span lines.
static DELIMITED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").expect("highlight pattern is a valid regex"));

/// Markup used to wrap highlighted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markup {
    /// Element name of the wrapper.
    pub tag: String,
    /// Class attribute of the wrapper. Omitted when empty.
    pub class: String,
    /// Escape HTML special characters in the wrapped text.
    pub escape_html: bool,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            tag: "span".to_string(),
            class: "highlight".to_string(),
            escape_html: false,
        }
    }
}

impl Markup {
    /// Wrap `inner` in this markup.
    pub fn wrap(&self, inner: &str) -> String {
        let inner = if self.escape_html {
            html_escape::encode_quoted_attribute(inner).into_owned()
        } else {
            inner.to_string()
        };

        if self.class.is_empty() {
            format!("<{tag}>{inner}</{tag}>", tag = self.tag)
        } else {
            format!(
                "<{tag} class=\"{class}\">{inner}</{tag}>",
                tag = self.tag,
                class = self.class
            )
        }
    }
}

/// Render a template preview with substituted values marked up.
///
/// Keys with no matching placeholder are ignored. Never fails.
///
/// # Examples
///
/// ```
/// use promptfill::template::{Body, Markup, highlight};
/// use serde_json::json;
///
/// let mut body = Body::new();
/// body.insert("name".to_string(), json!("World"));
///
/// let html = highlight("Hello {{name}}", &body, &Markup::default());
/// assert_eq!(html, "Hello <span class=\"highlight\">World</span>");
/// ```
pub fn highlight(template: &str, body: &Body, markup: &Markup) -> String {
    let mut text = template.to_string();

    for (key, value) in body {
        let placeholder = format!("{{{{{}}}}}", key);
        let replacement = format!("{{{{{}}}}}", stringify(value));
        text = text.replace(&placeholder, &replacement);
    }

    DELIMITED
        .replace_all(&text, |caps: &regex::Captures<'_>| markup.wrap(&caps[1]))
        .into_owned()
}
