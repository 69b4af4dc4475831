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

//! Control flow statement parsing for the parser.
//!
//! This module provides control flow statement parsing:
//! - If/else statements
//! - While loops
//! - Return, break and continue

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::Parser;
use crate::ast::{Expr, IfStatement, Statement, StatementKind, WhileStatement};
use crate::error::CompileError;
use crate::lexer::Token;

/// Extension trait for control flow parsing.
pub trait ControlFlowParser {
    /// Parse an if statement.
    fn parse_if_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a while statement.
    fn parse_while_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a return statement.
    fn parse_return_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a break statement.
    fn parse_break_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a continue statement.
    fn parse_continue_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a parenthesized condition.
    fn parse_condition(&mut self, keyword: &str) -> Result<Expr, CompileError>;
}

impl<'a> ControlFlowParser for Parser<'a> {
    fn parse_if_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::If, "")?;
        let condition = self.parse_condition("if")?;
        let then_branch = self.parse_statement()?;

        // A dangling else binds to the nearest if
        let else_branch = if self.match_token(&Token::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        let end = else_branch
            .as_ref()
            .map_or(then_branch.span, |branch| branch.span);
        Ok(Statement::new(
            StatementKind::If(IfStatement {
                condition,
                then_branch: Box::new(then_branch),
                else_branch,
            }),
            start.merge(&end),
        ))
    }

    fn parse_while_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::While, "")?;
        let condition = self.parse_condition("while")?;
        let body = self.parse_statement()?;
        let span = start.merge(&body.span);
        Ok(Statement::new(
            StatementKind::While(WhileStatement {
                condition,
                body: Box::new(body),
            }),
            span,
        ))
    }

    fn parse_return_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::Return, "")?;
        let value = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let end = self.expect(&Token::Semicolon, "after return")?;
        Ok(Statement::new(
            StatementKind::Return(value),
            start.merge(&end),
        ))
    }

    fn parse_break_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::Break, "")?;
        let end = self.expect(&Token::Semicolon, "after 'break'")?;
        Ok(Statement::new(StatementKind::Break, start.merge(&end)))
    }

    fn parse_continue_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::Continue, "")?;
        let end = self.expect(&Token::Semicolon, "after 'continue'")?;
        Ok(Statement::new(StatementKind::Continue, start.merge(&end)))
    }

    fn parse_condition(&mut self, keyword: &str) -> Result<Expr, CompileError> {
        self.expect(&Token::LeftParen, &format!("after '{}'", keyword))?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen, "after condition")?;
        Ok(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::lexer::tokenize;

    fn parse_stmt(source: &str) -> Result<Statement, CompileError> {
        let tokens = tokenize(source)?;
        let mut parser = Parser::new(&tokens);
        parser.parse_statement()
    }

    #[test]
    fn test_if_without_else() {
        let stmt = parse_stmt("if (x < 3) x = 1;").unwrap();
        match stmt.kind {
            StatementKind::If(if_stmt) => {
                assert_eq!(if_stmt.condition.to_string(), "(x < 3)");
                assert!(if_stmt.else_branch.is_none());
            }
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_else_binds_inner() {
        let stmt = parse_stmt("if (a) if (b) x = 1; else x = 2;").unwrap();
        assert_eq!(stmt.to_string(), "if (a) if (b) x = 1; else x = 2;");
        match stmt.kind {
            StatementKind::If(outer) => {
                assert!(outer.else_branch.is_none());
                assert!(matches!(
                    outer.then_branch.kind,
                    StatementKind::If(IfStatement {
                        else_branch: Some(_),
                        ..
                    })
                ));
            }
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_while_with_block() {
        let stmt = parse_stmt("while (i < 10) { i = i + 1; break; }").unwrap();
        assert_eq!(stmt.to_string(), "while ((i < 10)) { i = (i + 1); break; }");
    }

    #[test]
    fn test_return_forms() {
        assert!(matches!(
            parse_stmt("return;").unwrap().kind,
            StatementKind::Return(None)
        ));
        assert!(matches!(
            parse_stmt("return 1 + 2;").unwrap().kind,
            StatementKind::Return(Some(_))
        ));
    }

    #[test]
    fn test_continue_requires_semicolon() {
        let err = parse_stmt("continue }").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_condition_requires_parentheses() {
        let err = parse_stmt("while x { }").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
    }
}
