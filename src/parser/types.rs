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

//! Type parsing for the parser.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::Type;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;

/// Extension trait for type parsing.
pub trait TypeParser {
    /// Parse a value type (`int`, `byte`, `bool`, `string`).
    fn parse_type(&mut self) -> Result<(Type, Span), CompileError>;

    /// Parse a return type, which may also be `void`.
    fn parse_return_type(&mut self) -> Result<(Type, Span), CompileError>;
}

/// Map a type keyword to its type.
pub fn token_to_type(token: &Token) -> Option<Type> {
    match token {
        Token::Int => Some(Type::Int),
        Token::Byte => Some(Type::Byte),
        Token::Bool => Some(Type::Bool),
        Token::StringType => Some(Type::String),
        _ => None,
    }
}

impl<'a> TypeParser for Parser<'a> {
    fn parse_type(&mut self) -> Result<(Type, Span), CompileError> {
        if let Some(ty) = self.peek().and_then(token_to_type) {
            let span = self.peek_span().unwrap_or_default();
            self.advance();
            return Ok((ty, span));
        }
        if self.check(&Token::Void) {
            return Err(self
                .error(ErrorCode::ExpectedType, "'void' is not a valid value type")
                .with_hint("Only functions may return void"));
        }
        if self.is_at_end() {
            return Err(self.unexpected("type"));
        }
        Err(self.error(
            ErrorCode::ExpectedType,
            format!(
                "Expected type, found '{}'",
                self.peek().map(|t| t.to_string()).unwrap_or_default()
            ),
        ))
    }

    fn parse_return_type(&mut self) -> Result<(Type, Span), CompileError> {
        if self.check(&Token::Void) {
            let span = self.peek_span().unwrap_or_default();
            self.advance();
            return Ok((Type::Void, span));
        }
        self.parse_type()
    }
}
