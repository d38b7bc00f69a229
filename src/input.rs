//! Reading templates and JSON documents for CLI commands.
//!
//! Every document argument is either a file path or `-` for stdin. Only one
//! argument per invocation can usefully read stdin.

use crate::error::{PromptError, Result};
use crate::template::{Body, Field, FieldMap};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument meaning "read standard input".
pub const STDIN_ARG: &str = "-";

/// Whether a path argument means stdin.
pub fn is_stdin(source: &Path) -> bool {
    source.as_os_str() == STDIN_ARG
}

/// Whether the template for a command will be read from stdin.
pub fn template_reads_stdin(inline: Option<&str>, file: Option<&Path>) -> bool {
    match (inline, file) {
        (None, None) => true,
        (None, Some(path)) => is_stdin(path),
        (Some(_), _) => false,
    }
}

/// Fail when more than one input would read stdin.
///
/// Each entry pairs an argument name with whether it reads stdin. Stdin
/// can only be consumed once, so the second reader would always see EOF.
pub fn ensure_single_stdin(readers: &[(&str, bool)]) -> Result<()> {
    let names: Vec<&str> = readers
        .iter()
        .filter(|(_, reads)| *reads)
        .map(|(name, _)| *name)
        .collect();

    if names.len() > 1 {
        return Err(PromptError::UserError(format!(
            "only one input can be read from stdin, but {} both would be.\n\n\
             Pass the template inline or with --file <path>.",
            names.join(" and ")
        )));
    }

    Ok(())
}

/// Read a document from a path, or from stdin for `-`.
pub fn read_source(source: &Path) -> Result<String> {
    if is_stdin(source) {
        return read_from(std::io::stdin().lock(), "stdin");
    }

    std::fs::read_to_string(source).map_err(|e| {
        PromptError::UserError(format!("failed to read '{}': {}", source.display(), e))
    })
}

/// Resolve the template for a command.
///
/// An inline template wins, then `--file`, then stdin.
pub fn read_template(inline: Option<String>, file: Option<&PathBuf>) -> Result<String> {
    match (inline, file) {
        (Some(_), Some(_)) => Err(PromptError::UserError(
            "pass the template inline or with --file, not both".to_string(),
        )),
        (Some(template), None) => Ok(template),
        (None, Some(path)) => read_source(path),
        (None, None) => read_from(std::io::stdin().lock(), "stdin"),
    }
}

/// Parse a body: a JSON object of placeholder values.
pub fn parse_body(text: &str) -> Result<Body> {
    match parse_json(text, "body")? {
        Value::Object(map) => Ok(map),
        other => Err(PromptError::UserError(format!(
            "body must be a JSON object, found {}",
            kind_of(&other)
        ))),
    }
}

/// Parse a JSON object whose values are all strings.
pub fn parse_field_map(text: &str) -> Result<FieldMap> {
    let body = parse_body(text)?;
    let mut map = FieldMap::with_capacity(body.len());

    for (name, value) in body {
        match value {
            Value::String(s) => {
                map.insert(name, s);
            }
            other => {
                return Err(PromptError::UserError(format!(
                    "value for '{}' must be a string, found {}",
                    name,
                    kind_of(&other)
                )));
            }
        }
    }

    Ok(map)
}

/// Parse a JSON array of `{"name": ..., "value": ...}` fields.
pub fn parse_fields(text: &str) -> Result<Vec<Field>> {
    serde_json::from_str(text)
        .map_err(|e| PromptError::UserError(format!("failed to parse fields JSON: {}", e)))
}

fn parse_json(text: &str, what: &str) -> Result<Value> {
    serde_json::from_str(text)
        .map_err(|e| PromptError::UserError(format!("failed to parse {} JSON: {}", what, e)))
}

fn read_from<R: Read>(mut reader: R, name: &str) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| PromptError::UserError(format!("failed to read {}: {}", name, e)))?;
    Ok(content)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_parse_body_keeps_key_order() {
        let body = parse_body(r#"{"z": 1, "a": "x", "m": null}"#).unwrap();
        let keys: Vec<&String> = body.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(body["a"], json!("x"));
    }

    #[test]
    fn test_parse_body_rejects_non_object() {
        let err = parse_body("[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "body must be a JSON object, found an array");
    }

    #[test]
    fn test_parse_body_rejects_malformed_json() {
        let err = parse_body("{not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse body JSON"));
    }

    #[test]
    fn test_parse_field_map() {
        let map = parse_field_map(r#"{"b": "2", "a": ""}"#).unwrap();
        assert_eq!(map.get_index(0), Some((&"b".to_string(), &"2".to_string())));
        assert_eq!(map.get("a"), Some(&String::new()));
    }

    #[test]
    fn test_parse_field_map_rejects_non_string() {
        let err = parse_field_map(r#"{"n": 3}"#).unwrap_err();
        assert_eq!(err.to_string(), "value for 'n' must be a string, found a number");
    }

    #[test]
    fn test_parse_fields() {
        let fields = parse_fields(r#"[{"name": "a", "value": "1"}, {"name": "b"}]"#).unwrap();
        assert_eq!(fields, vec![Field::new("a", "1"), Field::empty("b")]);
    }

    #[test]
    fn test_parse_fields_rejects_object() {
        assert!(parse_fields(r#"{"a": "1"}"#).is_err());
    }

    #[test]
    fn test_read_source_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.txt");
        std::fs::write(&path, "Hello {{name}}").unwrap();

        assert_eq!(read_source(&path).unwrap(), "Hello {{name}}");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/body.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read '/nonexistent/body.json'"));
    }

    #[test]
    fn test_read_template_prefers_inline() {
        let template = read_template(Some("{{x}}".to_string()), None).unwrap();
        assert_eq!(template, "{{x}}");
    }

    #[test]
    fn test_read_template_rejects_both_sources() {
        let path = PathBuf::from("t.txt");
        assert!(read_template(Some("{{x}}".to_string()), Some(&path)).is_err());
    }

    #[test]
    fn test_template_reads_stdin() {
        assert!(template_reads_stdin(None, None));
        assert!(template_reads_stdin(None, Some(Path::new("-"))));
        assert!(!template_reads_stdin(None, Some(Path::new("t.txt"))));
        assert!(!template_reads_stdin(Some("{{x}}"), None));
    }

    #[test]
    fn test_ensure_single_stdin_rejects_two_readers() {
        let err = ensure_single_stdin(&[("the template", true), ("--body", true)]).unwrap_err();
        assert!(matches!(err, PromptError::UserError(_)));
        assert!(
            err.to_string()
                .starts_with("only one input can be read from stdin, but the template and --body")
        );
    }

    #[test]
    fn test_ensure_single_stdin_allows_one_reader() {
        assert!(ensure_single_stdin(&[("the template", true), ("--body", false)]).is_ok());
        assert!(ensure_single_stdin(&[("the template", false), ("--body", true)]).is_ok());
        assert!(ensure_single_stdin(&[]).is_ok());
    }

    #[test]
    fn test_read_from_reader() {
        let text = read_from("from a reader".as_bytes(), "test").unwrap();
        assert_eq!(text, "from a reader");
    }
}
