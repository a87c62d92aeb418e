// SPDX-License-Identifier: Apache-2.0

//! A recursive-descent JSON parser producing an owned [`Value`] tree.
//!
//! Parsing runs in two passes: a scanner turns the text into a token
//! sequence, then the parser assembles values from those tokens. Every
//! error carries the 1-indexed line where it was detected.
//!
//! ```
//! use jsontree::{parse_text, JsonNumber, Value};
//!
//! let value = parse_text(r#"{"x": [1, 2.5, "s", true, null]}"#).unwrap();
//! let items = value.get("x").and_then(Value::as_array).unwrap();
//! assert_eq!(items[0], Value::Number(JsonNumber::Integer(1)));
//! assert_eq!(items[1], Value::Number(JsonNumber::Float(2.5)));
//! ```
//!
//! String escapes are decoded by a simplified processor that only handles
//! `\n`, `\t`, `\"` and `\\`; see [`EscapeProcessor`].

mod config;
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};

mod escape_processor;
pub use escape_processor::EscapeProcessor;

mod json_number;
pub use json_number::JsonNumber;

mod parse_error;
pub use parse_error::{LexError, LexErrorKind, ParseError, ParseErrorKind, ParseFailure};

mod parser;
mod scanner;

mod token;
pub use token::{Token, TokenKind};

mod value;
pub use value::{Map, Value};

use std::fs;
use std::io;
use std::path::Path;

/// Scan `text` into tokens. The sequence always ends with one
/// [`TokenKind::End`].
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    scanner::Scanner::new(text).tokenize()
}

/// Build a value from a token sequence using the default configuration.
pub fn parse(tokens: Vec<Token>) -> Result<Value, ParseError> {
    parse_with_config(tokens, &ParserConfig::default())
}

/// Build a value from a token sequence.
pub fn parse_with_config(tokens: Vec<Token>, config: &ParserConfig) -> Result<Value, ParseError> {
    parser::Parser::new(tokens, config).parse()
}

/// Parse a complete JSON document.
///
/// Fails with [`ParseFailure::EmptyInput`] if `text` is empty or only
/// whitespace.
pub fn parse_text(text: &str) -> Result<Value, ParseFailure> {
    parse_text_with_config(text, &ParserConfig::default())
}

/// Parse a complete JSON document with a custom [`ParserConfig`].
pub fn parse_text_with_config(text: &str, config: &ParserConfig) -> Result<Value, ParseFailure> {
    if text.trim().is_empty() {
        return Err(ParseFailure::EmptyInput);
    }
    let tokens = tokenize(text)?;
    Ok(parse_with_config(tokens, config)?)
}

/// Read a file fully and parse its contents.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Value, ParseFailure> {
    parse_file_with_config(path, &ParserConfig::default())
}

/// Read a file fully and parse its contents with a custom [`ParserConfig`].
pub fn parse_file_with_config(
    path: impl AsRef<Path>,
    config: &ParserConfig,
) -> Result<Value, ParseFailure> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ParseFailure::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ParseFailure::FileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_text_with_config(&text, config)
}
