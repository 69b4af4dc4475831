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

//! Operator analysis for the semantic analyzer.
//!
//! This module checks and lowers operator expressions:
//! - Arithmetic (`+ - * /`) with byte to int widening
//! - Comparisons, which produce booleans in branch form
//! - Short-circuit `and` / `or` and `not`
//! - Explicit numeric conversions

use super::expressions::ExpressionAnalyzer;
use super::type_check::TypeChecker;
use super::Analyzer;
use crate::ast::{BinaryOp, Expr, LogicalOp, RelOp, Type};
use crate::codegen::{
    BinaryOpEmitter, ComparisonEmitter, ControlFlowEmitter, ConversionEmitter, ExprAttr,
    LabelManager,
};
use crate::error::{Result, Span};

/// Extension trait for operator analysis.
pub trait OperatorAnalyzer {
    /// Analyze an arithmetic expression.
    fn analyze_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr, span: Span)
        -> Result<ExprAttr>;

    /// Analyze a comparison.
    fn analyze_relational(&mut self, left: &Expr, op: RelOp, right: &Expr, span: Span)
        -> Result<ExprAttr>;

    /// Analyze a short-circuit `and` / `or`.
    fn analyze_logical(
        &mut self,
        left: &Expr,
        op: LogicalOp,
        right: &Expr,
        span: Span,
    ) -> Result<ExprAttr>;

    /// Analyze a logical negation.
    fn analyze_not(&mut self, operand: &Expr, span: Span) -> Result<ExprAttr>;

    /// Analyze an explicit conversion.
    fn analyze_cast(&mut self, target: Type, operand: &Expr, span: Span) -> Result<ExprAttr>;
}

impl OperatorAnalyzer for Analyzer {
    fn analyze_binary(
        &mut self,
        left: &Expr,
        op: BinaryOp,
        right: &Expr,
        span: Span,
    ) -> Result<ExprAttr> {
        let lhs = self.analyze_expression(left)?;
        let rhs = self.analyze_expression(right)?;
        let result_type = self.check_arithmetic(op, lhs.ty, rhs.ty, span)?;

        let value = self.codegen.emit_binary(
            op,
            (lhs.operand_name(), lhs.ty),
            (rhs.operand_name(), rhs.ty),
        );
        Ok(ExprAttr::operand(result_type, value))
    }

    fn analyze_relational(
        &mut self,
        left: &Expr,
        op: RelOp,
        right: &Expr,
        span: Span,
    ) -> Result<ExprAttr> {
        let lhs = self.analyze_expression(left)?;
        let rhs = self.analyze_expression(right)?;
        self.check_relational(op, lhs.ty, rhs.ty, span)?;

        let lists = self.codegen.emit_relop(
            op,
            (lhs.operand_name(), lhs.ty),
            (rhs.operand_name(), rhs.ty),
        );
        Ok(ExprAttr::branches(lists))
    }

    fn analyze_logical(
        &mut self,
        left: &Expr,
        op: LogicalOp,
        right: &Expr,
        span: Span,
    ) -> Result<ExprAttr> {
        let lhs = self.analyze_expression(left)?;
        let mid = self.codegen.marker();
        let rhs = self.analyze_expression(right)?;
        self.check_logical(op.as_str(), lhs.ty, span)?;
        self.check_logical(op.as_str(), rhs.ty, span)?;

        let (lhs, rhs) = (lhs.into_branches(), rhs.into_branches());
        let lists = match op {
            LogicalOp::And => self.codegen.lower_and(lhs, &mid, rhs),
            LogicalOp::Or => self.codegen.lower_or(lhs, &mid, rhs),
        };
        Ok(ExprAttr::branches(lists))
    }

    fn analyze_not(&mut self, operand: &Expr, span: Span) -> Result<ExprAttr> {
        let value = self.analyze_expression(operand)?;
        self.check_logical("not", value.ty, span)?;
        Ok(ExprAttr::branches(value.into_branches().negate()))
    }

    fn analyze_cast(&mut self, target: Type, operand: &Expr, span: Span) -> Result<ExprAttr> {
        let value = self.analyze_expression(operand)?;
        self.check_cast(value.ty, target, span)?;
        let converted = self
            .codegen
            .emit_cast(value.operand_name(), value.ty, target);
        Ok(ExprAttr::operand(target, converted))
    }
}
