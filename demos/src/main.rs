// SPDX-License-Identifier: Apache-2.0

// Walkthrough of the jsontree API: tokens, values and errors.
// Run with RUST_LOG=trace to see the scanner and parser logging.

use jsontree::{parse_text, parse_text_with_config, tokenize, ParseFailure, ParserConfig, Value};

fn print_value(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            println!("{pad}object ({} keys)", map.len());
            for (key, item) in map {
                println!("{pad}  Key: {key:?}");
                print_value(item, indent + 2);
            }
        }
        Value::Array(items) => {
            println!("{pad}array ({} items)", items.len());
            for item in items {
                print_value(item, indent + 1);
            }
        }
        Value::Number(n) if n.is_integer() => println!("{pad}Integer: {n}"),
        Value::Number(n) => println!("{pad}Float: {n}"),
        Value::String(s) => println!("{pad}String: {s:?}"),
        Value::Bool(b) => println!("{pad}Bool: {b}"),
        Value::Null => println!("{pad}Null"),
    }
}

fn main() -> Result<(), ParseFailure> {
    env_logger::init();

    let json = r#"{"name": "widget", "sizes": [1, 2.5], "active": true, "parent": null}"#;
    println!("1. Tokens for {json}");
    for token in tokenize(json)? {
        println!("  line {}: {}", token.line, token.kind);
    }
    println!();

    println!("2. Value tree:");
    let value = parse_text(json)?;
    print_value(&value, 1);
    log::info!("document root is {}", value.type_name());
    println!();

    println!("3. Errors carry the line they were found on:");
    for bad in ["{\n  \"a\": 1,\n  \"b\" 2\n}", "[1, 2,]", "[\n\"open", "   "] {
        match parse_text(bad) {
            Ok(v) => println!("  unexpectedly parsed {v:?}"),
            Err(e) => println!("  {:<24} -> {e}", format!("{bad:?}")),
        }
    }
    println!();

    println!("4. Nesting limit:");
    let config = ParserConfig::new().with_max_depth(4);
    let deep = format!("{}{}", "[".repeat(5), "]".repeat(5));
    match parse_text_with_config(&deep, &config) {
        Ok(_) => println!("  {deep} parsed"),
        Err(e) => println!("  {deep} rejected: {e}"),
    }

    Ok(())
}
