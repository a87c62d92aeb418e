// SPDX-License-Identifier: Apache-2.0

//! Token model shared by the scanner and the parser.

use crate::JsonNumber;

/// Lexical category of a [`Token`], carrying the decoded payload for literals.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A string literal with its escapes already decoded.
    String(String),
    /// A number literal.
    Number(JsonNumber),
    /// `true` or `false`
    Boolean(bool),
    /// `null`
    Null,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// End of input. Always the last token of a scanned sequence.
    End,
}

impl TokenKind {
    /// The raw delimiter character for structural tokens.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenKind::LeftBrace => Some('{'),
            TokenKind::RightBrace => Some('}'),
            TokenKind::LeftBracket => Some('['),
            TokenKind::RightBracket => Some(']'),
            TokenKind::Comma => Some(','),
            TokenKind::Colon => Some(':'),
            _ => None,
        }
    }

    pub(crate) fn from_symbol(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            _ => None,
        }
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TokenKind::String(s) => write!(f, "string \"{s}\""),
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Boolean(b) => write!(f, "boolean {b}"),
            TokenKind::Null => f.write_str("null"),
            TokenKind::End => f.write_str("end of input"),
            other => match other.symbol() {
                Some(c) => write!(f, "'{c}'"),
                None => write!(f, "{other:?}"),
            },
        }
    }
}

/// A single token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Category and decoded payload.
    pub kind: TokenKind,
    /// 1-indexed source line.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Token { kind, line }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}
