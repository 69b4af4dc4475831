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

//! Parser module for the FanC compiler.
//!
//! This module parses a token stream into an Abstract Syntax Tree (AST).
//! It uses recursive descent parsing with one function per precedence level
//! for expressions.
//!
//! # Module Structure
//!
//! - `control_flow` - Control flow statement parsing (ControlFlowParser trait)
//! - `expressions` - Expression parsing (ExpressionParser trait)
//! - `functions` - Function declaration parsing (FunctionParser trait)
//! - `helpers` - Token stream navigation and error handling (ParserHelpers trait)
//! - `statements` - Statement parsing (StatementParser trait)
//! - `types` - Type parsing (TypeParser trait)

// Submodules
pub mod control_flow;
pub mod expressions;
pub mod functions;
pub mod helpers;
pub mod statements;
pub mod types;

// Internal imports from submodules
use functions::FunctionParser;
use helpers::ParserHelpers;

use crate::ast::Program;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;

/// The parser state.
pub struct Parser<'a> {
    /// The token stream to parse.
    pub(crate) tokens: &'a [(Token, Span)],
    /// Current position in the token stream.
    pub(crate) position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    // ========================================
    // Program Parsing
    // ========================================

    /// Parse the complete program.
    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let starts_function = matches!(self.peek(), Some(Token::Override | Token::Void))
                || self.peek().is_some_and(|t| t.is_type());
            if !starts_function {
                let message = format!(
                    "Expected function declaration, found '{}'",
                    self.peek().map(|t| t.to_string()).unwrap_or_default()
                );
                return Err(self
                    .error(ErrorCode::UnexpectedToken, message)
                    .with_hint("A program is a sequence of function declarations"));
            }
            program.functions.push(self.parse_function_def()?);
        }

        Ok(program)
    }
}

/// Parse a token stream into a program AST.
pub fn parse(tokens: &[(Token, Span)]) -> Result<Program, CompileError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StatementKind;
    use crate::lexer::tokenize;

    /// Helper to parse source code directly.
    fn parse_source(source: &str) -> Result<Program, CompileError> {
        let tokens = tokenize(source)?;
        parse(&tokens)
    }

    // ========================================
    // Parser Creation Tests
    // ========================================

    #[test]
    fn test_parser_creation() {
        let tokens = vec![];
        let parser = Parser::new(&tokens);
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_parser_peek() {
        let tokens = vec![
            (Token::Integer(42), Span::new(0, 2)),
            (Token::Plus, Span::new(3, 4)),
        ];
        let parser = Parser::new(&tokens);
        assert_eq!(parser.peek(), Some(&Token::Integer(42)));
        assert_eq!(parser.peek_ahead(1), Some(&Token::Plus));
    }

    #[test]
    fn test_parser_advance() {
        let tokens = vec![
            (Token::Integer(42), Span::new(0, 2)),
            (Token::Plus, Span::new(3, 4)),
        ];
        let mut parser = Parser::new(&tokens);
        let first = parser.advance();
        assert!(matches!(first, Some((Token::Integer(42), _))));
        assert_eq!(parser.peek(), Some(&Token::Plus));
    }

    // ========================================
    // Program Parsing Tests
    // ========================================

    #[test]
    fn test_empty_program() {
        let program = parse_source("").unwrap();
        assert!(program.functions.is_empty());
    }

    #[test]
    fn test_multiple_functions() {
        let source = "int f(int x) { return x * 2; }\nvoid main() { printi(f(21)); }";
        let program = parse_source(source).unwrap();
        assert_eq!(program.functions.len(), 2);
        assert!(program.function("f").is_some());

        let main = program.function("main").unwrap();
        assert!(matches!(main.body[0].kind, StatementKind::Call(_)));
    }

    #[test]
    fn test_program_display() {
        let program = parse_source("void main() { int x = 1; }").unwrap();
        assert_eq!(program.to_string(), "void main() { int x = 1; }");
    }

    #[test]
    fn test_statement_at_top_level_rejected() {
        let err = parse_source("x = 1;").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_unclosed_function_body() {
        let err = parse_source("void main() { int x;").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedEndOfFile);
    }
}
