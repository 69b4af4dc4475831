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

//! Lexer module for the FanC compiler.
//!
//! Tokenization is driven by a `logos` state machine; this module turns its
//! output into `(Token, Span)` pairs and maps lexical failures onto error
//! codes.

mod tokens;

pub use tokens::{LexError, Token};

use crate::error::{CompileError, ErrorCode, Span};
use logos::Logos;

/// Tokenize source code into a vector of tokens with spans.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, CompileError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(Token::UnterminatedString) => {
                return Err(lex_error(LexError::UnterminatedString, lexer.slice(), span));
            }
            Ok(token) => tokens.push((token, span)),
            Err(error) => return Err(lex_error(error, lexer.slice(), span)),
        }
    }

    Ok(tokens)
}

fn lex_error(error: LexError, slice: &str, span: Span) -> CompileError {
    match error {
        LexError::InvalidCharacter => CompileError::new(
            ErrorCode::InvalidCharacter,
            format!("Invalid character '{}'", slice),
            span,
        ),
        LexError::UnterminatedString => CompileError::new(
            ErrorCode::UnterminatedString,
            "Unterminated string literal",
            span,
        )
        .with_hint("String literals must be closed on the same line"),
        LexError::InvalidEscapeSequence => CompileError::new(
            ErrorCode::InvalidEscapeSequence,
            format!("Invalid escape sequence in {}", slice),
            span,
        )
        .with_hint("Supported escapes are \\n \\t \\r \\0 \\\" and \\\\"),
        LexError::IntegerTooLarge => CompileError::new(
            ErrorCode::IntegerTooLarge,
            format!("Integer literal '{}' is too large", slice),
            span,
        ),
    }
}
