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

//! Function declaration parsing for the parser.
//!
//! A function is `[override] RetType Name ( Formals ) { Statements }`.

use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{FunctionDef, Parameter};
use crate::error::CompileError;
use crate::lexer::Token;

/// Extension trait for function parsing.
pub trait FunctionParser {
    /// Parse a function definition.
    fn parse_function_def(&mut self) -> Result<FunctionDef, CompileError>;

    /// Parse the formal parameter list (without parentheses).
    fn parse_parameters(&mut self) -> Result<Vec<Parameter>, CompileError>;

    /// Parse a single formal parameter.
    fn parse_parameter(&mut self) -> Result<Parameter, CompileError>;
}

impl<'a> FunctionParser for Parser<'a> {
    fn parse_function_def(&mut self) -> Result<FunctionDef, CompileError> {
        let start = self.peek_span().unwrap_or_else(|| self.previous_span());
        let is_override = self.match_token(&Token::Override);
        let (return_type, _) = self.parse_return_type()?;
        let (name, _) = self.expect_identifier("for function name")?;

        self.expect(&Token::LeftParen, "after function name")?;
        let params = self.parse_parameters()?;
        let end = self.expect(&Token::RightParen, "after parameters")?;

        self.expect(&Token::LeftBrace, "to open function body")?;
        let body = self.parse_statement_list()?;
        self.expect(&Token::RightBrace, "to close function body")?;

        Ok(FunctionDef {
            is_override,
            name,
            return_type,
            params,
            body,
            span: start.merge(&end),
        })
    }

    fn parse_parameters(&mut self) -> Result<Vec<Parameter>, CompileError> {
        let mut params = Vec::new();
        if self.check(&Token::RightParen) {
            return Ok(params);
        }

        loop {
            params.push(self.parse_parameter()?);
            if !self.match_token(&Token::Comma) {
                break;
            }
        }

        Ok(params)
    }

    fn parse_parameter(&mut self) -> Result<Parameter, CompileError> {
        let (param_type, start) = self.parse_type()?;
        let (name, end) = self.expect_identifier("for parameter name")?;
        Ok(Parameter {
            name,
            param_type,
            span: start.merge(&end),
        })
    }
}
