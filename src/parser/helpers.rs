// FanC - A small statically typed language compiled to LLVM IR in one pass
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Parser helper methods for token stream navigation and error handling.
//!
//! This module provides utility methods for the parser including:
//! - Token stream navigation (peek, advance, check)
//! - Token matching and expectation
//! - Error creation

use super::Parser;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;

/// Trait for parser helper operations.
pub trait ParserHelpers<'a> {
    /// Check if we've reached the end of the token stream.
    fn is_at_end(&self) -> bool;

    /// Peek at the current token without advancing.
    fn peek(&self) -> Option<&Token>;

    /// Peek at the current token's span.
    fn peek_span(&self) -> Option<Span>;

    /// Peek at a token ahead by n positions.
    fn peek_ahead(&self, n: usize) -> Option<&Token>;

    /// Get the previous token's span (for error reporting).
    fn previous_span(&self) -> Span;

    /// Advance to the next token and return the current one.
    fn advance(&mut self) -> Option<(Token, Span)>;

    /// Check if the current token matches the expected type.
    fn check(&self, expected: &Token) -> bool;

    /// Consume the current token if it matches the expected type.
    fn match_token(&mut self, expected: &Token) -> bool;

    /// Expect the current token to match, or return an error.
    fn expect(&mut self, expected: &Token, context: &str) -> Result<Span, CompileError>;

    /// Expect an identifier and return its name and span.
    fn expect_identifier(&mut self, context: &str) -> Result<(String, Span), CompileError>;

    /// Create an error at the current position.
    fn error(&self, code: ErrorCode, message: impl Into<String>) -> CompileError;

    /// Create the error for an unexpected current token (or end of file).
    fn unexpected(&self, expected: &str) -> CompileError;
}

impl<'a> ParserHelpers<'a> for Parser<'a> {
    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(t, _)| t)
    }

    fn peek_span(&self) -> Option<Span> {
        self.tokens.get(self.position).map(|(_, s)| *s)
    }

    fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n).map(|(t, _)| t)
    }

    fn previous_span(&self) -> Span {
        if self.position > 0 {
            self.tokens[self.position - 1].1
        } else if let Some((_, span)) = self.tokens.first() {
            *span
        } else {
            Span::new(0, 0)
        }
    }

    fn advance(&mut self) -> Option<(Token, Span)> {
        let result = self.tokens.get(self.position).cloned();
        if result.is_some() {
            self.position += 1;
        }
        result
    }

    fn check(&self, expected: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    fn match_token(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token, context: &str) -> Result<Span, CompileError> {
        match self.advance_if(expected) {
            Some(span) => Ok(span),
            None => Err(self.unexpected(&format!("'{}' {}", expected, context))),
        }
    }

    fn expect_identifier(&mut self, context: &str) -> Result<(String, Span), CompileError> {
        if let Some(Token::Identifier(name)) = self.peek() {
            let name = name.clone();
            let span = self.peek_span().unwrap_or_default();
            self.position += 1;
            return Ok((name, span));
        }
        if self.is_at_end() {
            return Err(self.unexpected(&format!("identifier {}", context)));
        }
        Err(self.error(
            ErrorCode::ExpectedIdentifier,
            format!("Expected identifier {}, found '{}'", context, self.found()),
        ))
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>) -> CompileError {
        let span = self.peek_span().unwrap_or_else(|| self.previous_span());
        CompileError::new(code, message, span)
    }

    fn unexpected(&self, expected: &str) -> CompileError {
        if self.is_at_end() {
            let end = self.previous_span().end;
            return CompileError::new(
                ErrorCode::UnexpectedEndOfFile,
                format!("Expected {}, found end of file", expected),
                Span::new(end, end),
            );
        }
        self.error(
            ErrorCode::UnexpectedToken,
            format!("Expected {}, found '{}'", expected, self.found()),
        )
    }
}

impl<'a> Parser<'a> {
    fn advance_if(&mut self, expected: &Token) -> Option<Span> {
        if self.check(expected) {
            self.advance().map(|(_, span)| span)
        } else {
            None
        }
    }

    fn found(&self) -> String {
        self.peek()
            .map_or_else(|| "end of file".to_string(), |t| t.to_string())
    }
}
