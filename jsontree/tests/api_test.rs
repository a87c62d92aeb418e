// Public API entry points: parse_text, tokenize + parse, FromStr

use jsontree::{parse, parse_text, tokenize, JsonNumber, Map, TokenKind, Value};

fn int(n: i64) -> Value {
    Value::Number(JsonNumber::Integer(n))
}

fn float(n: f64) -> Value {
    Value::Number(JsonNumber::Float(n))
}

#[test]
fn test_literals() {
    assert_eq!(parse_text("null").unwrap(), Value::Null);
    assert_eq!(parse_text("true").unwrap(), Value::Bool(true));
    assert_eq!(parse_text("false").unwrap(), Value::Bool(false));
    assert_eq!(parse_text("42").unwrap(), int(42));
    assert_eq!(parse_text("-7").unwrap(), int(-7));
    assert_eq!(parse_text("3.25").unwrap(), float(3.25));
    assert_eq!(parse_text("-1.5e3").unwrap(), float(-1500.0));
    assert_eq!(parse_text("1E2").unwrap(), float(100.0));
    assert_eq!(
        parse_text(r#""tab\there""#).unwrap(),
        Value::String("tab\there".to_string())
    );
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(parse_text("  \n\t[ 1 ]\r\n ").unwrap(), Value::Array(vec![int(1)]));
}

#[test]
fn test_integer_and_float_are_distinguishable() {
    let value = parse_text("[1, 1.0, 1e0]").unwrap();
    let items = value.as_array().unwrap();
    assert!(items[0].as_number().unwrap().is_integer());
    assert!(items[1].as_number().unwrap().is_float());
    assert!(items[2].as_number().unwrap().is_float());
    assert_eq!(items[0].as_i64(), Some(1));
    assert_eq!(items[1].as_i64(), None);
}

#[test]
fn test_large_integer_falls_back_to_float() {
    let value = parse_text("9223372036854775808").unwrap();
    assert_eq!(value, float(9223372036854775808.0));
    let value = parse_text("9223372036854775807").unwrap();
    assert_eq!(value, int(i64::MAX));
}

#[test]
fn test_mixed_array_scenario() {
    let value = parse_text(r#"{"x": [1, 2.5, "s", true, null]}"#).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(
        map["x"],
        Value::Array(vec![
            int(1),
            float(2.5),
            Value::String("s".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let value = parse_text(r#"{"a":1,"a":2}"#).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["a"], int(2));
}

#[test]
fn test_structure_mirrors_input() {
    let json = r#"
    {
        "name": "widget",
        "tags": ["a", "b"],
        "size": {"w": 10, "h": 2.5},
        "empty": {},
        "none": []
    }
    "#;
    let value = parse_text(json).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["name", "tags", "size", "empty", "none"]);
    assert_eq!(value.get("name").and_then(Value::as_str), Some("widget"));
    assert_eq!(
        value.get("tags"),
        Some(&Value::Array(vec!["a".into(), "b".into()]))
    );
    let size = value.get("size").unwrap();
    assert_eq!(size.get("w"), Some(&int(10)));
    assert_eq!(size.get("h"), Some(&float(2.5)));
    assert_eq!(value.get("empty"), Some(&Value::Object(Map::new())));
    assert_eq!(value.get("none"), Some(&Value::Array(Vec::new())));
}

#[test]
fn test_deep_nesting_mirrors_input() {
    let depth = 200;
    let json = format!("{}7{}", "[".repeat(depth), "]".repeat(depth));
    let mut value = &parse_text(&json).unwrap();
    for _ in 0..depth {
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        value = &items[0];
    }
    assert_eq!(value, &int(7));
}

// Renders a value in canonical form. Only strings without escapable
// characters are produced, so the output is always parseable.
fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(JsonNumber::Integer(n)) => n.to_string(),
        Value::Number(JsonNumber::Float(f)) => format!("{f:?}"),
        Value::String(s) => format!("\"{s}\""),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", parts.join(","))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("\"{k}\":{}", render(v)))
                .collect();
            format!("{{{}}}", parts.join(","))
        }
    }
}

#[test]
fn test_reparse_is_idempotent() {
    let mut inner = Map::new();
    inner.insert("k".to_string(), Value::Bool(false));
    inner.insert("f".to_string(), float(0.5));
    let mut outer = Map::new();
    outer.insert("list".to_string(), Value::Array(vec![int(-3), Value::Null]));
    outer.insert("inner".to_string(), Value::Object(inner));
    outer.insert("s".to_string(), Value::String("plain".to_string()));
    let original = Value::Object(outer);

    let text = render(&original);
    let parsed = parse_text(&text).unwrap();
    assert_eq!(parsed, original);
    assert_eq!(render(&parsed), text);
    assert_eq!(parse_text(&render(&parsed)).unwrap(), parsed);
}

#[test]
fn test_tokenize_exposes_tokens() {
    let tokens = tokenize("{\"a\":\n[1]}").unwrap();
    let kinds: Vec<&TokenKind> = tokens.iter().map(|t| &t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &TokenKind::LeftBrace,
            &TokenKind::String("a".to_string()),
            &TokenKind::Colon,
            &TokenKind::LeftBracket,
            &TokenKind::Number(JsonNumber::Integer(1)),
            &TokenKind::RightBracket,
            &TokenKind::RightBrace,
            &TokenKind::End,
        ]
    );
    assert!(tokens.iter().all(|t| t.line >= 1));
    assert_eq!(tokens.last().map(|t| t.line), Some(2));

    let value = parse(tokens).unwrap();
    assert_eq!(value.get("a"), Some(&Value::Array(vec![int(1)])));
}

#[test]
fn test_parse_via_from_str() {
    let value: Value = "[\"x\"]".parse().unwrap();
    assert_eq!(value.get_index(0).and_then(Value::as_str), Some("x"));
}

#[test]
fn test_escape_decoding_quirks() {
    // unsupported escapes stay as written
    assert_eq!(
        parse_text(r#""a\/b\rc""#).unwrap(),
        Value::String("a\\/b\\rc".to_string())
    );
    // an escaped backslash before `n` turns into backslash + newline
    assert_eq!(
        parse_text(r#""\\n""#).unwrap(),
        Value::String("\\\n".to_string())
    );
}

#[test]
fn test_parsing_from_threads() {
    let handles: Vec<_> = (0..4i64)
        .map(|i| std::thread::spawn(move || parse_text(&format!("[{i}]")).unwrap()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap();
        assert_eq!(value, Value::Array(vec![int(i as i64)]));
    }
}
