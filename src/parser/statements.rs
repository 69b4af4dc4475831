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

//! Statement parsing for the parser.
//!
//! This module provides statement parsing functionality:
//! - Variable declarations
//! - Assignments and call statements
//! - Braced blocks
//! - Dispatch to control flow parsing

use super::control_flow::ControlFlowParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{Assignment, Statement, StatementKind, VarDecl};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for statement parsing.
pub trait StatementParser {
    /// Parse a single statement.
    fn parse_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse statements until the closing brace (which is not consumed).
    fn parse_statement_list(&mut self) -> Result<Vec<Statement>, CompileError>;

    /// Parse a braced block statement.
    fn parse_block_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a variable declaration.
    fn parse_var_decl(&mut self) -> Result<Statement, CompileError>;

    /// Parse a statement starting with an identifier (assignment or call).
    fn parse_identifier_statement(&mut self) -> Result<Statement, CompileError>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_statement(&mut self) -> Result<Statement, CompileError> {
        match self.peek() {
            Some(Token::LeftBrace) => self.parse_block_statement(),
            Some(t) if t.is_type() => self.parse_var_decl(),
            Some(Token::Void) => Err(self
                .error(ErrorCode::ExpectedType, "Variables cannot have type 'void'")
                .with_hint("Use int, byte or bool")),
            Some(Token::Identifier(_)) => self.parse_identifier_statement(),
            Some(Token::Return) => self.parse_return_statement(),
            Some(Token::If) => self.parse_if_statement(),
            Some(Token::While) => self.parse_while_statement(),
            Some(Token::Break) => self.parse_break_statement(),
            Some(Token::Continue) => self.parse_continue_statement(),
            Some(other) => {
                let message = format!("Expected statement, found '{}'", other);
                Err(self.error(ErrorCode::ExpectedStatement, message))
            }
            None => Err(self.unexpected("statement")),
        }
    }

    fn parse_statement_list(&mut self) -> Result<Vec<Statement>, CompileError> {
        let mut statements = Vec::new();
        while !self.is_at_end() && !self.check(&Token::RightBrace) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_block_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::LeftBrace, "to open block")?;
        let statements = self.parse_statement_list()?;
        let end = self.expect(&Token::RightBrace, "to close block")?;
        Ok(Statement::new(
            StatementKind::Block(statements),
            start.merge(&end),
        ))
    }

    fn parse_var_decl(&mut self) -> Result<Statement, CompileError> {
        let (var_type, start) = self.parse_type()?;
        let (name, _) = self.expect_identifier("in variable declaration")?;

        let initializer = if self.match_token(&Token::Equal) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let end = self.expect(&Token::Semicolon, "after variable declaration")?;
        let span = start.merge(&end);
        Ok(Statement::new(
            StatementKind::VarDecl(VarDecl {
                name,
                var_type,
                initializer,
                span,
            }),
            span,
        ))
    }

    fn parse_identifier_statement(&mut self) -> Result<Statement, CompileError> {
        let (name, start) = self.expect_identifier("at statement start")?;

        if self.check(&Token::LeftParen) {
            let call = self.parse_call(name, start)?;
            let end = self.expect(&Token::Semicolon, "after call")?;
            return Ok(Statement::new(StatementKind::Call(call), start.merge(&end)));
        }

        if self.match_token(&Token::Equal) {
            let value = self.parse_expression()?;
            let end = self.expect(&Token::Semicolon, "after assignment")?;
            let span = start.merge(&end);
            return Ok(Statement::new(
                StatementKind::Assignment(Assignment { name, value, span }),
                span,
            ));
        }

        Err(self.unexpected(&format!("'=' or '(' after '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ExprKind, Type};
    use crate::lexer::tokenize;

    fn parse_stmt(source: &str) -> Result<Statement, CompileError> {
        let tokens = tokenize(source)?;
        let mut parser = Parser::new(&tokens);
        parser.parse_statement()
    }

    #[test]
    fn test_var_decl() {
        let stmt = parse_stmt("int x;").unwrap();
        match stmt.kind {
            StatementKind::VarDecl(decl) => {
                assert_eq!(decl.name, "x");
                assert_eq!(decl.var_type, Type::Int);
                assert!(decl.initializer.is_none());
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_var_decl_with_initializer() {
        let stmt = parse_stmt("byte b = 3b;").unwrap();
        match stmt.kind {
            StatementKind::VarDecl(decl) => {
                assert_eq!(decl.var_type, Type::Byte);
                assert!(matches!(
                    decl.initializer.map(|e| e.kind),
                    Some(ExprKind::ByteLiteral(3))
                ));
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_void_variable_rejected() {
        let err = parse_stmt("void v;").unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedType);
    }

    #[test]
    fn test_assignment_and_call() {
        assert!(matches!(
            parse_stmt("x = x + 1;").unwrap().kind,
            StatementKind::Assignment(_)
        ));
        assert!(matches!(
            parse_stmt("printi(3);").unwrap().kind,
            StatementKind::Call(_)
        ));
    }

    #[test]
    fn test_bare_identifier_rejected() {
        let err = parse_stmt("x;").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_nested_blocks() {
        let stmt = parse_stmt("{ int a; { a = 1; } }").unwrap();
        assert_eq!(stmt.to_string(), "{ int a; { a = 1; } }");
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse_stmt("int x = 1").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedEndOfFile);
    }

    #[test]
    fn test_unexpected_statement_token() {
        let err = parse_stmt("+ 1;").unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedStatement);
    }
}
