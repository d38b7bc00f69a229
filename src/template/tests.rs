//! Tests for template interpolation.

use crate::template::{
    Body, Field, FieldMap, Markup, TemplateError, highlight, reconcile, render, scan, to_body,
    to_fields, unique_keys, validate,
};
use serde_json::{Value, json};

fn body(pairs: &[(&str, Value)]) -> Body {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn span(inner: &str) -> String {
    format!("<span class=\"highlight\">{}</span>", inner)
}

// ============================================================================
// Scanner
// ============================================================================

#[test]
fn test_scan_preserves_order_and_duplicates() {
    assert_eq!(scan("{{a}}-{{b}}-{{a}}"), keys(&["a", "b", "a"]));
}

#[test]
fn test_scan_no_placeholders() {
    assert!(scan("no placeholders here").is_empty());
    assert!(scan("").is_empty());
}

#[test]
fn test_scan_adjacent_placeholders() {
    assert_eq!(scan("{{a}}{{b}}"), keys(&["a", "b"]));
}

#[test]
fn test_scan_ignores_whitespace_keys() {
    assert!(scan("{{ a }}").is_empty());
    assert!(scan("{{first name}}").is_empty());
    assert!(scan("{{}}").is_empty());
}

#[test]
fn test_scan_ignores_partial_braces() {
    assert!(scan("{{open only").is_empty());
    assert!(scan("close only}}").is_empty());
    assert!(scan("{single}").is_empty());
    assert_eq!(scan("{{broken and {{ok}}"), keys(&["ok"]));
}

#[test]
fn test_scan_allows_punctuation_and_unicode() {
    assert_eq!(
        scan("{{user.name}} {{max-tokens}} {{名前}}"),
        keys(&["user.name", "max-tokens", "名前"])
    );
}

#[test]
fn test_scan_multiline_template() {
    let template = "# {{title}}\n\nWrite about {{topic}}.\n{{title}}";
    assert_eq!(scan(template), keys(&["title", "topic", "title"]));
}

#[test]
fn test_unique_keys_keeps_first_appearance() {
    assert_eq!(unique_keys("{{a}}{{b}}{{a}}{{c}}{{b}}"), keys(&["a", "b", "c"]));
}

// ============================================================================
// Validator
// ============================================================================

#[test]
fn test_validate_returns_body_unchanged() {
    let input = body(&[("x", json!("v"))]);
    assert_eq!(validate("{{x}}", input.clone()).unwrap(), input);
}

#[test]
fn test_validate_keeps_extra_keys() {
    let input = body(&[("x", json!("v")), ("unused", json!(""))]);
    assert_eq!(validate("{{x}}", input.clone()).unwrap(), input);
}

#[test]
fn test_validate_missing_key() {
    let err = validate("{{x}}", Body::new()).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingKey {
            key: "x".to_string()
        }
    );
}

#[test]
fn test_validate_empty_string_is_missing() {
    let err = validate("{{x}}", body(&[("x", json!(""))])).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingKey {
            key: "x".to_string()
        }
    );
}

#[test]
fn test_validate_falsy_values_are_missing() {
    for value in [json!(0), json!(false), json!(null), json!(0.0)] {
        let result = validate("{{x}}", body(&[("x", value.clone())]));
        assert!(result.is_err(), "{} should count as missing", value);
    }
}

#[test]
fn test_validate_truthy_non_strings() {
    for value in [json!(1), json!(true), json!([]), json!({}), json!("0")] {
        let result = validate("{{x}}", body(&[("x", value.clone())]));
        assert!(result.is_ok(), "{} should count as supplied", value);
    }
}

#[test]
fn test_validate_reports_first_missing_in_scan_order() {
    let input = body(&[("b", json!("set"))]);
    let err = validate("{{c}} {{b}} {{a}}", input).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingKey {
            key: "c".to_string()
        }
    );
}

#[test]
fn test_validate_template_without_placeholders() {
    assert_eq!(validate("plain", Body::new()).unwrap(), Body::new());
}

#[test]
fn test_missing_key_display() {
    let err = TemplateError::MissingKey {
        key: "topic".to_string(),
    };
    assert_eq!(err.to_string(), "missing value for key 'topic'");
}

// ============================================================================
// Highlighter
// ============================================================================

#[test]
fn test_highlight_substitutes_value() {
    let result = highlight(
        "Hello {{name}}",
        &body(&[("name", json!("World"))]),
        &Markup::default(),
    );
    assert_eq!(result, format!("Hello {}", span("World")));
}

#[test]
fn test_highlight_unresolved_placeholder_wrapped_as_literal() {
    let result = highlight(
        "{{a}} and {{b}}",
        &body(&[("a", json!("1"))]),
        &Markup::default(),
    );
    assert_eq!(result, format!("{} and {}", span("1"), span("b")));
}

#[test]
fn test_highlight_repeated_placeholder() {
    let result = highlight("{{x}}/{{x}}", &body(&[("x", json!("v"))]), &Markup::default());
    assert_eq!(result, format!("{}/{}", span("v"), span("v")));
}

#[test]
fn test_highlight_ignores_unused_keys() {
    let result = highlight("plain text", &body(&[("x", json!("v"))]), &Markup::default());
    assert_eq!(result, "plain text");
}

#[test]
fn test_highlight_stringifies_non_strings() {
    let result = highlight(
        "{{n}} {{flag}} {{list}}",
        &body(&[
            ("n", json!(3)),
            ("flag", json!(true)),
            ("list", json!(["a", "b"])),
        ]),
        &Markup::default(),
    );
    assert_eq!(
        result,
        format!("{} {} {}", span("3"), span("true"), span("a,b"))
    );
}

#[test]
fn test_highlight_empty_value_gives_empty_span() {
    let result = highlight("[{{x}}]", &body(&[("x", json!(""))]), &Markup::default());
    assert_eq!(result, format!("[{}]", span("")));
}

#[test]
fn test_highlight_multiline_value() {
    let result = highlight(
        "Text: {{x}}",
        &body(&[("x", json!("line1\nline2"))]),
        &Markup::default(),
    );
    assert_eq!(result, format!("Text: {}", span("line1\nline2")));
}

#[test]
fn test_highlight_passes_are_sequential() {
    // The value for `a` introduces a `{{b}}` placeholder that the later
    // pass for `b` then replaces.
    let input = body(&[("a", json!("{{b}}")), ("b", json!("B"))]);
    let result = highlight("{{a}}", &input, &Markup::default());
    assert_eq!(result, format!("{}}}}}", span("{{B")));
}

#[test]
fn test_highlight_later_keys_do_not_affect_earlier_passes() {
    // `b` is applied before `a`, so the `{{b}}` introduced by `a` survives.
    let input = body(&[("b", json!("B")), ("a", json!("{{b}}"))]);
    let result = highlight("{{a}}", &input, &Markup::default());
    assert_eq!(result, format!("{}}}}}", span("{{b")));
}

#[test]
fn test_highlight_custom_markup() {
    let markup = Markup {
        tag: "mark".to_string(),
        class: String::new(),
        escape_html: false,
    };
    let result = highlight("Hi {{n}}", &body(&[("n", json!("Al"))]), &markup);
    assert_eq!(result, "Hi <mark>Al</mark>");
}

#[test]
fn test_highlight_escapes_html_when_enabled() {
    let markup = Markup {
        escape_html: true,
        ..Markup::default()
    };
    let result = highlight(
        "{{x}}",
        &body(&[("x", json!("<b>\"a\" & b</b>"))]),
        &markup,
    );
    assert_eq!(result, span("&lt;b&gt;&quot;a&quot; &amp; b&lt;/b&gt;"));
}

#[test]
fn test_highlight_escapes_single_quotes() {
    let markup = Markup {
        escape_html: true,
        ..Markup::default()
    };
    let result = highlight("{{x}}", &body(&[("x", json!("it's"))]), &markup);
    assert!(result.starts_with("<span class=\"highlight\">it&"));
    assert!(!result.contains("it's"));
}

#[test]
fn test_highlight_raw_html_by_default() {
    let result = highlight("{{x}}", &body(&[("x", json!("<b>"))]), &Markup::default());
    assert_eq!(result, span("<b>"));
}

// ============================================================================
// Renderer
// ============================================================================

#[test]
fn test_render_substitutes_all_placeholders() {
    let input = body(&[("tone", json!("calm")), ("topic", json!("rivers"))]);
    let result = render("Write a {{tone}} poem about {{topic}}. Be {{tone}}.", &input).unwrap();
    assert_eq!(result, "Write a calm poem about rivers. Be calm.");
}

#[test]
fn test_render_requires_valid_body() {
    let err = render("Hi {{n}}", &Body::new()).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingKey {
            key: "n".to_string()
        }
    );
}

#[test]
fn test_render_does_not_rescan_values() {
    let input = body(&[("a", json!("{{b}}")), ("b", json!("B"))]);
    assert_eq!(render("{{a}}", &input).unwrap(), "{{b}}");
}

#[test]
fn test_render_stringifies_numbers() {
    let input = body(&[("n", json!(2.0))]);
    assert_eq!(render("count={{n}}", &input).unwrap(), "count=2");
}

#[test]
fn test_render_leaves_whitespace_braces_alone() {
    let input = body(&[("x", json!("v"))]);
    assert_eq!(render("{{x}} {{ y }}", &input).unwrap(), "v {{ y }}");
}

// ============================================================================
// Fields
// ============================================================================

#[test]
fn test_reconcile_drops_stale_and_adds_missing() {
    let fields = vec![Field::new("a", "x"), Field::new("c", "y")];
    assert_eq!(
        reconcile(&keys(&["a", "b"]), &fields),
        vec![Field::new("a", "x"), Field::empty("b")]
    );
}

#[test]
fn test_reconcile_preserves_field_order_for_retained() {
    let fields = vec![Field::new("b", "2"), Field::new("a", "1")];
    assert_eq!(
        reconcile(&keys(&["a", "b", "c"]), &fields),
        vec![Field::new("b", "2"), Field::new("a", "1"), Field::empty("c")]
    );
}

#[test]
fn test_reconcile_empty_keys_clears_fields() {
    let fields = vec![Field::new("a", "1")];
    assert!(reconcile(&[], &fields).is_empty());
}

#[test]
fn test_reconcile_from_scratch() {
    assert_eq!(
        reconcile(&keys(&["x", "y"]), &[]),
        vec![Field::empty("x"), Field::empty("y")]
    );
}

#[test]
fn test_reconcile_collapses_duplicates() {
    let fields = vec![Field::new("a", "first"), Field::new("a", "second")];
    assert_eq!(
        reconcile(&keys(&["a", "b", "a"]), &fields),
        vec![Field::new("a", "first"), Field::empty("b")]
    );
}

#[test]
fn test_reconcile_is_idempotent() {
    let k = keys(&["q", "a", "z"]);
    let fields = vec![
        Field::new("z", "1"),
        Field::new("stale", "2"),
        Field::new("q", "3"),
    ];
    let once = reconcile(&k, &fields);
    assert_eq!(reconcile(&k, &once), once);
}

#[test]
fn test_reconcile_idempotent_across_shapes() {
    let cases: Vec<(&str, Vec<String>, Vec<Field>)> = vec![
        ("empty keys and fields", keys(&[]), vec![]),
        ("empty keys", keys(&[]), vec![Field::new("a", "1")]),
        ("empty fields", keys(&["a", "b"]), vec![]),
        (
            "duplicate field names",
            keys(&["a"]),
            vec![Field::new("a", "1"), Field::new("a", "2")],
        ),
        (
            "duplicate keys",
            keys(&["a", "b", "a", "b"]),
            vec![Field::new("b", "x")],
        ),
        (
            "keys missing from every field",
            keys(&["x", "y"]),
            vec![Field::new("a", "1"), Field::new("b", "2")],
        ),
        (
            "mixed",
            keys(&["c", "a", "c"]),
            vec![
                Field::new("a", "1"),
                Field::new("stale", "2"),
                Field::new("a", "3"),
            ],
        ),
    ];

    for (name, k, fields) in cases {
        let once = reconcile(&k, &fields);
        assert_eq!(reconcile(&k, &once), once, "case: {}", name);

        // Exactly one field per distinct key, and nothing else.
        let mut names: Vec<&str> = once.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        let mut expected: Vec<&str> = k.iter().map(String::as_str).collect();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(names, expected, "case: {}", name);
    }
}

#[test]
fn test_reconcile_with_scanned_keys() {
    let template = "{{topic}} in {{style}}";
    let fields = vec![Field::new("topic", "cats"), Field::new("old", "x")];
    assert_eq!(
        reconcile(&scan(template), &fields),
        vec![Field::new("topic", "cats"), Field::empty("style")]
    );
}

#[test]
fn test_to_fields_preserves_map_order() {
    let mut map = FieldMap::new();
    map.insert("z".to_string(), "1".to_string());
    map.insert("a".to_string(), "2".to_string());
    assert_eq!(
        to_fields(&map),
        vec![Field::new("z", "1"), Field::new("a", "2")]
    );
}

#[test]
fn test_to_body_later_duplicates_overwrite() {
    let fields = vec![
        Field::new("a", "1"),
        Field::new("b", "2"),
        Field::new("a", "3"),
    ];
    let map = to_body(&fields);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&"3".to_string()));
    assert_eq!(map.get_index(0), Some((&"a".to_string(), &"3".to_string())));
}

#[test]
fn test_fields_roundtrip_preserves_body() {
    let mut map = FieldMap::new();
    map.insert("topic".to_string(), "cats".to_string());
    map.insert("style".to_string(), String::new());
    map.insert("tone".to_string(), "dry".to_string());
    assert_eq!(to_body(&to_fields(&map)), map);
}

#[test]
fn test_fields_roundtrip_across_shapes() {
    let cases: Vec<(&str, Vec<(&str, &str)>)> = vec![
        ("empty map", vec![]),
        ("single entry", vec![("only", "v")]),
        ("empty values", vec![("a", ""), ("b", "")]),
        ("non-alphabetical order", vec![("z", "1"), ("m", "2"), ("a", "3")]),
        ("unicode", vec![("名前", "太郎"), ("emoji", "🎉")]),
    ];

    for (name, pairs) in cases {
        let map: FieldMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let roundtrip = to_body(&to_fields(&map));
        assert_eq!(roundtrip, map, "case: {}", name);

        let order: Vec<&String> = roundtrip.keys().collect();
        let expected: Vec<&String> = map.keys().collect();
        assert_eq!(order, expected, "case: {}", name);
    }
}

#[test]
fn test_field_serde_shape() {
    let field = Field::new("a", "x");
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({"name": "a", "value": "x"})
    );

    let parsed: Field = serde_json::from_value(json!({"name": "b"})).unwrap();
    assert_eq!(parsed, Field::empty("b"));
}
