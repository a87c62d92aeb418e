// SPDX-License-Identifier: Apache-2.0

use core::iter::Peekable;
use std::vec;

use crate::config::ParserConfig;
use crate::parse_error::{ParseError, ParseErrorKind};
use crate::token::{Token, TokenKind};
use crate::value::{Map, Value};

use log::{debug, trace};

/// Recursive-descent parser over a scanned token sequence.
///
/// Consumes tokens strictly left to right with one token of lookahead.
pub(crate) struct Parser {
    tokens: Peekable<vec::IntoIter<Token>>,
    /// Line of the last consumed token, used if the sequence lacks its End
    last_line: usize,
    /// Number of currently open containers
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, config: &ParserConfig) -> Self {
        Parser {
            tokens: tokens.into_iter().peekable(),
            last_line: 1,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Parse exactly one value followed by the end of input.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;

        let next = self.next_token();
        if !next.is_end() {
            return ParseError::new(ParseErrorKind::TrailingContent, next.line);
        }
        debug!("parsed {} document", value.type_name());
        Ok(value)
    }

    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.last_line = token.line;
                token
            }
            None => Token::new(TokenKind::End, self.last_line),
        }
    }

    fn peek_kind(&mut self) -> Option<&TokenKind> {
        self.tokens.peek().map(|token| &token.kind)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let token = self.next_token();
        match token.kind {
            TokenKind::LeftBrace => self.parse_object(token.line),
            TokenKind::LeftBracket => self.parse_array(token.line),
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::Number(n) => Ok(Value::Number(n)),
            TokenKind::Boolean(b) => Ok(Value::Bool(b)),
            TokenKind::Null => Ok(Value::Null),
            other => {
                trace!("no value starts with {other}");
                ParseError::new(ParseErrorKind::UnexpectedToken, token.line)
            }
        }
    }

    /// Called with the opening `{` already consumed.
    fn parse_object(&mut self, open_line: usize) -> Result<Value, ParseError> {
        self.enter(open_line)?;
        let mut map = Map::new();

        if self.peek_kind() == Some(&TokenKind::RightBrace) {
            self.next_token();
            self.exit();
            return Ok(Value::Object(map));
        }

        loop {
            let token = self.next_token();
            let key_line = token.line;
            let TokenKind::String(key) = token.kind else {
                return ParseError::new(ParseErrorKind::ExpectedStringKey, key_line);
            };

            let token = self.next_token();
            if token.kind != TokenKind::Colon {
                return ParseError::new(ParseErrorKind::ExpectedColon, token.line);
            }

            let value = self.parse_value()?;
            if map.insert(key, value).is_some() {
                debug!("duplicate key at line {key_line}, last value wins");
            }

            let token = self.next_token();
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::RightBrace => break,
                _ => return ParseError::new(ParseErrorKind::ExpectedCommaOrBrace, token.line),
            }
        }

        self.exit();
        Ok(Value::Object(map))
    }

    /// Called with the opening `[` already consumed.
    fn parse_array(&mut self, open_line: usize) -> Result<Value, ParseError> {
        self.enter(open_line)?;
        let mut items = Vec::new();

        if self.peek_kind() == Some(&TokenKind::RightBracket) {
            self.next_token();
            self.exit();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            let token = self.next_token();
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::RightBracket => break,
                _ => {
                    return ParseError::new(ParseErrorKind::ExpectedCommaOrBracket, token.line)
                }
            }
        }

        self.exit();
        Ok(Value::Array(items))
    }

    fn enter(&mut self, line: usize) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return ParseError::new(ParseErrorKind::MaxDepthReached, line);
        }
        self.depth += 1;
        trace!("enter container, depth {} at line {line}", self.depth);
        Ok(())
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
