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

//! Control flow analysis for the semantic analyzer.
//!
//! This module provides control flow statement analysis:
//! - If and if/else statements
//! - While loops with break and continue
//! - Return statements

use super::expressions::ExpressionAnalyzer;
use super::statements::StatementAnalyzer;
use super::type_check::TypeChecker;
use super::Analyzer;
use crate::ast::{Expr, IfStatement, Type, WhileStatement};
use crate::codegen::{ControlFlowEmitter, EmitHelpers, FunctionEmitter, LabelManager, StmtAttr};
use crate::error::{CompileError, ErrorCode, Result, Span};

/// Extension trait for control flow analysis.
pub trait ControlFlowAnalyzer {
    /// Analyze an if statement.
    fn analyze_if_statement(&mut self, if_stmt: &IfStatement) -> Result<StmtAttr>;

    /// Analyze a while statement.
    fn analyze_while_statement(&mut self, while_stmt: &WhileStatement) -> Result<StmtAttr>;

    /// Analyze a return statement.
    fn analyze_return_statement(&mut self, value: Option<&Expr>, span: Span) -> Result<StmtAttr>;

    /// Analyze a break statement.
    fn analyze_break(&mut self, span: Span) -> Result<StmtAttr>;

    /// Analyze a continue statement.
    fn analyze_continue(&mut self, span: Span) -> Result<StmtAttr>;
}

impl ControlFlowAnalyzer for Analyzer {
    fn analyze_if_statement(&mut self, if_stmt: &IfStatement) -> Result<StmtAttr> {
        let cond = self.analyze_condition(&if_stmt.condition)?;
        let then_label = self.codegen.marker();
        let then = self.analyze_scoped(&if_stmt.then_branch)?;

        let Some(else_branch) = &if_stmt.else_branch else {
            return Ok(self.codegen.lower_if(cond, &then_label, then));
        };

        let skip = self.codegen.emit_jump();
        let else_label = self.codegen.marker();
        let otherwise = self.analyze_scoped(else_branch)?;
        Ok(self
            .codegen
            .lower_if_else(cond, &then_label, then, skip, &else_label, otherwise))
    }

    fn analyze_while_statement(&mut self, while_stmt: &WhileStatement) -> Result<StmtAttr> {
        let cond_label = self.codegen.marker();
        let cond = self.analyze_condition(&while_stmt.condition)?;
        let body_label = self.codegen.marker();

        self.context.loop_depth += 1;
        let body = self.analyze_scoped(&while_stmt.body);
        self.context.loop_depth -= 1;

        Ok(self
            .codegen
            .lower_while(&cond_label, cond, &body_label, body?))
    }

    fn analyze_return_statement(&mut self, value: Option<&Expr>, span: Span) -> Result<StmtAttr> {
        let return_type = self.context.return_type.unwrap_or(Type::Void);
        match value {
            None => {
                self.check_return(None, span)?;
                self.codegen.emit_return(None, return_type);
            }
            Some(expr) => {
                let attr = self.analyze_value(expr)?;
                self.check_return(Some(attr.ty), span)?;
                self.codegen
                    .emit_return(Some((attr.operand_name(), attr.ty)), return_type);
            }
        }
        Ok(StmtAttr::empty())
    }

    fn analyze_break(&mut self, span: Span) -> Result<StmtAttr> {
        if !self.context.in_loop() {
            return Err(CompileError::new(
                ErrorCode::BreakOutsideLoop,
                "'break' can only be used inside a loop",
                span,
            ));
        }
        Ok(self.codegen.emit_break())
    }

    fn analyze_continue(&mut self, span: Span) -> Result<StmtAttr> {
        if !self.context.in_loop() {
            return Err(CompileError::new(
                ErrorCode::ContinueOutsideLoop,
                "'continue' can only be used inside a loop",
                span,
            ));
        }
        Ok(self.codegen.emit_continue())
    }
}
