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

//! Expression analysis for the semantic analyzer.
//!
//! This module provides expression analysis functionality:
//! - Literals and variable references
//! - Dispatch of operators and calls
//! - The three forms an expression is consumed in: raw, as a value and as
//!   a condition
//!
//! Boolean expressions come out in branch form. `analyze_value` joins them
//! into an `i1` operand where a stored value is needed.

use super::functions::FunctionAnalyzer;
use super::operators::OperatorAnalyzer;
use super::type_check::TypeChecker;
use super::Analyzer;
use crate::ast::{Expr, ExprKind, Type};
use crate::codegen::{
    BranchLists, ControlFlowEmitter, EmitHelpers, ExprAttr, ExprValue, StringEmitter,
    VariableEmitter,
};
use crate::error::{CompileError, ErrorCode, Result};

/// Extension trait for expression analysis.
pub trait ExpressionAnalyzer {
    /// Analyze an expression, leaving booleans in branch form.
    fn analyze_expression(&mut self, expr: &Expr) -> Result<ExprAttr>;

    /// Analyze an expression whose value is stored or passed on.
    fn analyze_value(&mut self, expr: &Expr) -> Result<ExprAttr>;

    /// Analyze the condition of an `if` or `while`.
    fn analyze_condition(&mut self, expr: &Expr) -> Result<BranchLists>;
}

impl ExpressionAnalyzer for Analyzer {
    fn analyze_expression(&mut self, expr: &Expr) -> Result<ExprAttr> {
        match &expr.kind {
            ExprKind::IntegerLiteral(value) => {
                let operand = self.codegen.emit_assign(format!("add i32 0, {}", value));
                Ok(ExprAttr::operand(Type::Int, operand))
            }
            ExprKind::ByteLiteral(value) => {
                self.check_byte_literal(*value, expr.span)?;
                let operand = self.codegen.emit_assign(format!("add i8 0, {}", value));
                Ok(ExprAttr::operand(Type::Byte, operand))
            }
            ExprKind::StringLiteral(text) => {
                let operand = self.codegen.emit_string(text);
                Ok(ExprAttr::operand(Type::String, operand))
            }
            ExprKind::BoolLiteral(value) => {
                Ok(ExprAttr::branches(self.codegen.emit_bool_literal(*value)))
            }
            ExprKind::Identifier(name) => {
                let Some(symbol) = self.symbols.lookup_variable(name) else {
                    return Err(CompileError::new(
                        ErrorCode::Undeclared,
                        format!("Variable '{}' is not declared", name),
                        expr.span,
                    ));
                };
                let (offset, Some(ty)) = (symbol.offset, symbol.var_type()) else {
                    unreachable!("variable lookup returned a function");
                };
                let loaded = self.codegen.emit_load(offset, ty);
                if ty == Type::Bool {
                    Ok(ExprAttr::branches(self.codegen.emit_bool_test(&loaded)))
                } else {
                    Ok(ExprAttr::operand(ty, loaded))
                }
            }
            ExprKind::Binary { left, op, right } => {
                self.analyze_binary(left, *op, right, expr.span)
            }
            ExprKind::Relational { left, op, right } => {
                self.analyze_relational(left, *op, right, expr.span)
            }
            ExprKind::Logical { left, op, right } => {
                self.analyze_logical(left, *op, right, expr.span)
            }
            ExprKind::Not(operand) => self.analyze_not(operand, expr.span),
            ExprKind::Call(call) => {
                let result = self.analyze_call(call)?;
                if let (Type::Bool, ExprValue::Operand(value)) = (result.ty, &result.value) {
                    return Ok(ExprAttr::branches(self.codegen.emit_bool_test(value)));
                }
                Ok(result)
            }
            ExprKind::TypeCast { target_type, expr: operand } => {
                self.analyze_cast(*target_type, operand, expr.span)
            }
            ExprKind::Grouped(inner) => self.analyze_expression(inner),
        }
    }

    fn analyze_value(&mut self, expr: &Expr) -> Result<ExprAttr> {
        let attr = self.analyze_expression(expr)?;
        if !matches!(attr.value, ExprValue::Branches(_)) {
            return Ok(attr);
        }
        let value = self.codegen.materialize(attr.into_branches());
        Ok(ExprAttr::operand(Type::Bool, value))
    }

    fn analyze_condition(&mut self, expr: &Expr) -> Result<BranchLists> {
        let attr = self.analyze_expression(expr)?;
        if attr.ty != Type::Bool {
            return Err(CompileError::new(
                ErrorCode::TypeMismatch,
                format!("Condition must be bool, found '{}'", attr.ty),
                expr.span,
            ));
        }
        Ok(attr.into_branches())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;

    fn compile_body(body: &str) -> crate::error::Result<String> {
        crate::compile(&format!("void main() {{ {} }}", body))
    }

    #[test]
    fn test_literals_are_materialized_with_add() {
        let ir = compile_body("int i = 7; byte b = 7b;").unwrap();
        assert!(ir.contains("= add i32 0, 7"));
        assert!(ir.contains("= add i8 0, 7"));
    }

    #[test]
    fn test_byte_literal_overflow() {
        let err = compile_body("byte b = 256b;").unwrap_err();
        assert_eq!(err.code, ErrorCode::ByteOverflow);
    }

    #[test]
    fn test_byte_overflow_reported_before_type_check() {
        let err = compile_body("bool b = 300b;").unwrap_err();
        assert_eq!(err.code, ErrorCode::ByteOverflow);
    }

    #[test]
    fn test_undeclared_variable() {
        let err = compile_body("int x = y;").unwrap_err();
        assert_eq!(err.code, ErrorCode::Undeclared);
    }

    #[test]
    fn test_bool_variable_is_tested_on_load() {
        let ir = compile_body("bool a = true; bool b = a;").unwrap();
        assert!(ir.contains("icmp eq i1 1, %t"));
        assert_eq!(ir.matches("phi i1").count(), 2);
    }

    #[test]
    fn test_condition_must_be_bool() {
        let err = compile_body("if (1) { }").unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_string_literal_becomes_global() {
        let ir = compile_body("print(\"hi\");").unwrap();
        assert!(ir.contains("@.str0 = internal constant [3 x i8] c\"hi\\00\""));
        assert!(ir.contains("call void @print0(i8* %t"));
    }
}
