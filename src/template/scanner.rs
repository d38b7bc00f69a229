//! Placeholder extraction.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// `{{`, one or more non-whitespace characters (lazy), `}}`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(\S+?)\}\}").expect("placeholder pattern is a valid regex")
});

/// Extract placeholder keys from a template.
///
/// Keys are returned left to right, one per non-overlapping match, with
/// repeats preserved. Malformed or partial brace sequences simply don't
/// match.
///
/// # Examples
///
/// ```
/// use promptfill::template::scan;
///
/// assert_eq!(scan("{{a}}-{{b}}-{{a}}"), vec!["a", "b", "a"]);
/// assert!(scan("no placeholders here").is_empty());
/// ```
pub fn scan(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extract placeholder keys with repeats removed, keeping first appearance.
pub fn unique_keys(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    scan(template)
        .into_iter()
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// Replace every placeholder match using `replacer`, which receives the key.
pub(super) fn replace_placeholders<F>(template: &str, mut replacer: F) -> String
where
    F: FnMut(&str) -> String,
{
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| replacer(&caps[1]))
        .into_owned()
}
