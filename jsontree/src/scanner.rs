// SPDX-License-Identifier: Apache-2.0

use crate::escape_processor::EscapeProcessor;
use crate::parse_error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};
use crate::JsonNumber;

use log::{debug, trace};

/// Single-pass scanner turning text into a token sequence.
///
/// The cursor is a byte offset that only ever moves by whole characters.
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    /// 1-indexed, bumped when a newline is consumed
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Scanner {
            text,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input. The result always ends with exactly one
    /// [`TokenKind::End`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while self.pos < self.text.len() {
            self.skip_whitespace();
            let Some(c) = self.current_char() else {
                break;
            };

            if let Some(kind) = TokenKind::from_symbol(c) {
                let line = self.line;
                self.advance();
                self.emit(kind, line);
            } else if c == '"' {
                let (value, line) = self.read_string()?;
                self.emit(TokenKind::String(value), line);
            } else if c.is_ascii_digit() || c == '-' {
                let number = self.read_number()?;
                self.emit(TokenKind::Number(number), self.line);
            } else if let Some((kind, len)) = self.match_keyword() {
                // Prefix match only: `truex` scans as `true` and fails on `x`.
                self.pos += len;
                self.emit(kind, self.line);
            } else {
                return LexError::new(LexErrorKind::UnexpectedCharacter(c), self.line);
            }
        }

        self.emit(TokenKind::End, self.line);
        debug!(
            "scanned {} tokens over {} lines",
            self.tokens.len(),
            self.line
        );
        Ok(self.tokens)
    }

    fn emit(&mut self, kind: TokenKind, line: usize) {
        trace!("token {kind} at line {line}");
        self.tokens.push(Token::new(kind, line));
    }

    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            if c == '\n' {
                self.line += 1;
            }
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    fn match_keyword(&self) -> Option<(TokenKind, usize)> {
        let rest = self.text.get(self.pos..)?;
        if rest.starts_with("true") {
            Some((TokenKind::Boolean(true), 4))
        } else if rest.starts_with("false") {
            Some((TokenKind::Boolean(false), 5))
        } else if rest.starts_with("null") {
            Some((TokenKind::Null, 4))
        } else {
            None
        }
    }

    /// Reads a string literal starting at its opening quote.
    ///
    /// Returns the decoded value and the line the closing quote was found on.
    fn read_string(&mut self) -> Result<(String, usize), LexError> {
        self.advance();
        let start = self.pos;

        while let Some(c) = self.current_char() {
            if c == '"' {
                break;
            }
            if c == '\\' {
                self.advance();
                if let Some(escaped) = self.current_char() {
                    if !EscapeProcessor::is_recognized(escaped) {
                        debug!("escape \\{escaped} at line {} kept verbatim", self.line);
                    }
                }
            }
            self.advance();
        }

        if self.pos >= self.text.len() {
            return LexError::new(LexErrorKind::UnterminatedString, self.line);
        }

        let raw = self.text.get(start..self.pos).unwrap_or_default();
        let value = EscapeProcessor::decode(raw).into_owned();
        self.advance();
        Ok((value, self.line))
    }

    fn read_number(&mut self) -> Result<JsonNumber, LexError> {
        let start = self.pos;

        if self.current_char() == Some('-') {
            self.advance();
        }
        self.read_digits()?;

        if self.current_char() == Some('.') {
            self.advance();
            self.read_digits()?;
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.current_char(), Some('+' | '-')) {
                self.advance();
            }
            self.read_digits()?;
        }

        let lexeme = self.text.get(start..self.pos).unwrap_or_default();
        match JsonNumber::from_lexeme(lexeme) {
            Some(number) => Ok(number),
            None => LexError::new(
                LexErrorKind::UnparsableNumber(lexeme.to_string()),
                self.line,
            ),
        }
    }

    /// Consumes one or more ASCII digits.
    fn read_digits(&mut self) -> Result<(), LexError> {
        if !self.at_digit() {
            return LexError::new(LexErrorKind::InvalidNumber, self.line);
        }
        while self.at_digit() {
            self.advance();
        }
        Ok(())
    }

    fn at_digit(&self) -> bool {
        self.current_char().is_some_and(|c| c.is_ascii_digit())
    }
}
