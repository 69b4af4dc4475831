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

//! Expression parsing for the parser.
//!
//! This module provides expression parsing functionality:
//! - Precedence climbing for `or`, `and`, equality and arithmetic operators
//! - Non-associative relational comparisons
//! - Prefix `not` and numeric casts
//! - Primary expressions (literals, identifiers, calls, grouping)

use super::helpers::ParserHelpers;
use super::types::token_to_type;
use super::Parser;
use crate::ast::{BinaryOp, Call, Expr, ExprKind, LogicalOp, RelOp};
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;

/// Extension trait for expression parsing.
pub trait ExpressionParser {
    /// Parse an expression.
    fn parse_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an 'or' expression.
    fn parse_or_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an 'and' expression.
    fn parse_and_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an equality expression (`==`, `!=`).
    fn parse_equality_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a relational expression (`<`, `>`, `<=`, `>=`).
    fn parse_relational_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an additive expression.
    fn parse_additive_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a multiplicative expression.
    fn parse_multiplicative_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a unary expression (`not`, casts).
    fn parse_unary_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a primary expression.
    fn parse_primary_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a call after its name: `( args )`.
    fn parse_call(&mut self, name: String, name_span: Span) -> Result<Call, CompileError>;
}

fn logical(left: Expr, op: LogicalOp, right: Expr) -> Expr {
    let span = left.span.merge(&right.span);
    Expr::new(
        ExprKind::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

fn relational(left: Expr, op: RelOp, right: Expr) -> Expr {
    let span = left.span.merge(&right.span);
    Expr::new(
        ExprKind::Relational {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let span = left.span.merge(&right.span);
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expression(&mut self) -> Result<Expr, CompileError> {
        self.parse_or_expression()
    }

    fn parse_or_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_and_expression()?;

        while self.match_token(&Token::Or) {
            let right = self.parse_and_expression()?;
            left = logical(left, LogicalOp::Or, right);
        }

        Ok(left)
    }

    fn parse_and_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_equality_expression()?;

        while self.match_token(&Token::And) {
            let right = self.parse_equality_expression()?;
            left = logical(left, LogicalOp::And, right);
        }

        Ok(left)
    }

    fn parse_equality_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_relational_expression()?;

        loop {
            let op = match self.peek() {
                Some(Token::EqualEqual) => RelOp::Equal,
                Some(Token::BangEqual) => RelOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_relational_expression()?;
            left = relational(left, op, right);
        }

        Ok(left)
    }

    fn parse_relational_expression(&mut self) -> Result<Expr, CompileError> {
        let left = self.parse_additive_expression()?;

        let op = match self.peek() {
            Some(Token::Less) => RelOp::Less,
            Some(Token::Greater) => RelOp::Greater,
            Some(Token::LessEqual) => RelOp::LessEqual,
            Some(Token::GreaterEqual) => RelOp::GreaterEqual,
            _ => return Ok(left),
        };
        self.advance();
        let right = self.parse_additive_expression()?;

        if matches!(
            self.peek(),
            Some(Token::Less | Token::Greater | Token::LessEqual | Token::GreaterEqual)
        ) {
            return Err(self
                .error(
                    ErrorCode::UnexpectedToken,
                    "Relational operators cannot be chained",
                )
                .with_hint("Combine comparisons with 'and'"));
        }

        Ok(relational(left, op, right))
    }

    fn parse_additive_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_multiplicative_expression()?;

        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative_expression()?;
            left = binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_unary_expression()?;

        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary_expression()?;
            left = binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> Result<Expr, CompileError> {
        let start = self.peek_span().unwrap_or_else(|| self.previous_span());

        if self.match_token(&Token::Not) {
            let operand = self.parse_unary_expression()?;
            let span = start.merge(&operand.span);
            return Ok(Expr::new(ExprKind::Not(Box::new(operand)), span));
        }

        // `(` followed by a type keyword is a cast
        if self.check(&Token::LeftParen) {
            if let Some(target_type) = self.peek_ahead(1).and_then(token_to_type) {
                self.advance();
                self.advance();
                self.expect(&Token::RightParen, "after cast type")?;
                let operand = self.parse_unary_expression()?;
                let span = start.merge(&operand.span);
                return Ok(Expr::new(
                    ExprKind::TypeCast {
                        target_type,
                        expr: Box::new(operand),
                    },
                    span,
                ));
            }
        }

        self.parse_primary_expression()
    }

    fn parse_primary_expression(&mut self) -> Result<Expr, CompileError> {
        let Some((token, span)) = self.advance() else {
            return Err(self.unexpected("expression"));
        };

        let kind = match token {
            Token::Integer(n) => ExprKind::IntegerLiteral(n),
            Token::ByteLiteral(n) => ExprKind::ByteLiteral(n),
            Token::String(s) => ExprKind::StringLiteral(s),
            Token::True => ExprKind::BoolLiteral(true),
            Token::False => ExprKind::BoolLiteral(false),
            Token::Identifier(name) => {
                if self.check(&Token::LeftParen) {
                    let call = self.parse_call(name, span)?;
                    let span = call.span;
                    return Ok(Expr::new(ExprKind::Call(call), span));
                }
                ExprKind::Identifier(name)
            }
            Token::LeftParen => {
                let inner = self.parse_expression()?;
                let end = self.expect(&Token::RightParen, "after expression")?;
                return Ok(Expr::new(
                    ExprKind::Grouped(Box::new(inner)),
                    span.merge(&end),
                ));
            }
            other => {
                return Err(CompileError::new(
                    ErrorCode::ExpectedExpression,
                    format!("Expected expression, found '{}'", other),
                    span,
                ));
            }
        };

        Ok(Expr::new(kind, span))
    }

    fn parse_call(&mut self, name: String, name_span: Span) -> Result<Call, CompileError> {
        self.expect(&Token::LeftParen, "after function name")?;

        let mut args = Vec::new();
        if !self.check(&Token::RightParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
        }

        let end = self.expect(&Token::RightParen, "after arguments")?;
        Ok(Call {
            name,
            args,
            span: name_span.merge(&end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_expr(source: &str) -> Result<Expr, CompileError> {
        let tokens = tokenize(source)?;
        let mut parser = Parser::new(&tokens);
        parser.parse_expression()
    }

    fn render(source: &str) -> String {
        parse_expr(source).unwrap().to_string()
    }

    #[test]
    fn test_arithmetic_precedence() {
        assert_eq!(render("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(render("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(render("8 / 4 * 2"), "((8 / 4) * 2)");
    }

    #[test]
    fn test_logical_precedence() {
        assert_eq!(render("a or b and c"), "(a or (b and c))");
        assert_eq!(render("not a and b"), "((not a) and b)");
        assert_eq!(render("a || b && !c"), "(a or (b and (not c)))");
    }

    #[test]
    fn test_relational_binds_tighter_than_equality() {
        assert_eq!(render("a < b == c > d"), "((a < b) == (c > d))");
        assert_eq!(render("x + 1 <= y * 2"), "((x + 1) <= (y * 2))");
    }

    #[test]
    fn test_chained_relational_rejected() {
        let err = parse_expr("a < b < c").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_cast_and_grouping() {
        assert_eq!(render("(byte) x + 1"), "(((byte) x) + 1)");
        assert_eq!(render("(int)(a + b)"), "((int) (a + b))");
        assert_eq!(render("(a + b) * c"), "((a + b) * c)");
    }

    #[test]
    fn test_calls() {
        assert_eq!(render("f()"), "f()");
        assert_eq!(render("g(1, x, h(2b))"), "g(1, x, h(2b))");
        let expr = parse_expr("f(1, 2)").unwrap();
        assert_eq!(expr.span, Span::new(0, 7));
    }

    #[test]
    fn test_literals() {
        assert!(matches!(
            parse_expr("true").unwrap().kind,
            ExprKind::BoolLiteral(true)
        ));
        assert!(matches!(
            parse_expr("255b").unwrap().kind,
            ExprKind::ByteLiteral(255)
        ));
        assert!(matches!(
            parse_expr("\"hi\"").unwrap().kind,
            ExprKind::StringLiteral(ref s) if s == "hi"
        ));
    }

    #[test]
    fn test_missing_operand() {
        let err = parse_expr("1 +").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedEndOfFile);

        let err = parse_expr("1 + ;").unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedExpression);
    }
}
