// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Reasons the scanner rejects input.
#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    UnexpectedCharacter(char),
    /// Input ended inside a string literal.
    UnterminatedString,
    /// Number literal does not match the number grammar.
    InvalidNumber,
    /// Number literal matched the grammar but has no representable value.
    UnparsableNumber(String),
}

/// Error raised by the scanner, located at the line the cursor was on.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

impl LexError {
    pub fn new<T>(kind: LexErrorKind, line: usize) -> Result<T, Self> {
        Err(Self { kind, line })
    }

    /// The reason without location.
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter(c) => format!("Unexpected character '{c}'"),
            LexErrorKind::UnterminatedString => "Unterminated string".to_string(),
            LexErrorKind::InvalidNumber => "Invalid number".to_string(),
            LexErrorKind::UnparsableNumber(lexeme) => format!("Invalid number '{lexeme}'"),
        }
    }
}

impl core::fmt::Display for LexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at line {}", self.message(), self.line)
    }
}

impl std::error::Error for LexError {}

/// Grammar violations found by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Token cannot start a value.
    UnexpectedToken,
    ExpectedStringKey,
    ExpectedColon,
    ExpectedCommaOrBrace,
    ExpectedCommaOrBracket,
    /// A complete value was followed by more tokens.
    TrailingContent,
    /// Containers nested deeper than the configured limit.
    MaxDepthReached,
}

/// Error raised by the parser, located at the line of the offending token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
}

impl ParseError {
    pub fn new<T>(kind: ParseErrorKind, line: usize) -> Result<T, Self> {
        Err(Self { kind, line })
    }

    /// The reason without location.
    pub fn message(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken => "Unexpected token",
            ParseErrorKind::ExpectedStringKey => "Expected string key",
            ParseErrorKind::ExpectedColon => "Expected ':'",
            ParseErrorKind::ExpectedCommaOrBrace => "Expected ',' or '}'",
            ParseErrorKind::ExpectedCommaOrBracket => "Expected ',' or ']'",
            ParseErrorKind::TrailingContent => "Unexpected trailing content",
            ParseErrorKind::MaxDepthReached => "Maximum nesting depth exceeded",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at line {}", self.message(), self.line)
    }
}

impl std::error::Error for ParseError {}

/// Errors returned by the `parse_text` / `parse_file` entry points.
#[derive(Debug)]
pub enum ParseFailure {
    /// An error bubbled up from the scanner.
    Lex(LexError),
    /// An error bubbled up from the parser.
    Grammar(ParseError),
    /// Input was empty or whitespace only.
    EmptyInput,
    /// The file does not exist.
    FileNotFound { path: PathBuf },
    /// The file exists but could not be read as UTF-8 text.
    FileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ParseFailure {
    /// Line of the offending input, for lexical and grammar errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseFailure::Lex(e) => Some(e.line),
            ParseFailure::Grammar(e) => Some(e.line),
            _ => None,
        }
    }
}

impl From<LexError> for ParseFailure {
    fn from(err: LexError) -> Self {
        ParseFailure::Lex(err)
    }
}

impl From<ParseError> for ParseFailure {
    fn from(err: ParseError) -> Self {
        ParseFailure::Grammar(err)
    }
}

impl core::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseFailure::Lex(e) => write!(f, "JSON Parse Error: {e}"),
            ParseFailure::Grammar(e) => write!(f, "JSON Parse Error: {e}"),
            ParseFailure::EmptyInput => f.write_str("Empty JSON input"),
            ParseFailure::FileNotFound { path } => {
                write!(f, "File not found: {}", path.display())
            }
            ParseFailure::FileUnreadable { path, source } => {
                write!(f, "Unable to read file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ParseFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseFailure::Lex(e) => Some(e),
            ParseFailure::Grammar(e) => Some(e),
            ParseFailure::FileUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}
