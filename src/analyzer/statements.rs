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

//! Statement analysis for the semantic analyzer.
//!
//! This module provides statement analysis functionality:
//! - Statement sequencing with a label before every statement but the first
//! - Blocks and the implicit scopes around branch and loop bodies
//! - Variable declarations and assignments
//! - Statement dispatch to appropriate handlers

use super::control_flow::ControlFlowAnalyzer;
use super::expressions::ExpressionAnalyzer;
use super::functions::FunctionAnalyzer;
use super::type_check::TypeChecker;
use super::Analyzer;
use crate::ast::{Assignment, Statement, StatementKind, Type, VarDecl};
use crate::codegen::{ControlFlowEmitter, LabelManager, StmtAttr, VariableEmitter};
use crate::error::{CompileError, ErrorCode, Result};

/// Extension trait for statement analysis.
pub trait StatementAnalyzer {
    /// Analyze a sequence of statements in the current scope.
    fn analyze_statements(&mut self, statements: &[Statement]) -> Result<StmtAttr>;

    /// Analyze a statement.
    fn analyze_statement(&mut self, stmt: &Statement) -> Result<StmtAttr>;

    /// Analyze a statement inside a scope of its own.
    fn analyze_scoped(&mut self, stmt: &Statement) -> Result<StmtAttr>;

    /// Analyze a variable declaration.
    fn analyze_var_decl(&mut self, decl: &VarDecl) -> Result<StmtAttr>;

    /// Analyze an assignment statement.
    fn analyze_assignment(&mut self, assign: &Assignment) -> Result<StmtAttr>;
}

impl StatementAnalyzer for Analyzer {
    fn analyze_statements(&mut self, statements: &[Statement]) -> Result<StmtAttr> {
        let Some((first, rest)) = statements.split_first() else {
            return Ok(StmtAttr::empty());
        };

        let mut attr = self.analyze_statement(first)?;
        for stmt in rest {
            let label = self.codegen.marker();
            let next = self.analyze_statement(stmt)?;
            attr = self.codegen.lower_sequence(attr, &label, next);
        }
        Ok(attr)
    }

    fn analyze_statement(&mut self, stmt: &Statement) -> Result<StmtAttr> {
        match &stmt.kind {
            StatementKind::Block(statements) => {
                self.symbols.enter_scope();
                let attr = self.analyze_statements(statements)?;
                self.leave_scope();
                Ok(attr)
            }
            StatementKind::VarDecl(decl) => self.analyze_var_decl(decl),
            StatementKind::Assignment(assign) => self.analyze_assignment(assign),
            StatementKind::Call(call) => {
                self.analyze_call(call)?;
                Ok(StmtAttr::empty())
            }
            StatementKind::Return(value) => self.analyze_return_statement(value.as_ref(), stmt.span),
            StatementKind::If(if_stmt) => self.analyze_if_statement(if_stmt),
            StatementKind::While(while_stmt) => self.analyze_while_statement(while_stmt),
            StatementKind::Break => self.analyze_break(stmt.span),
            StatementKind::Continue => self.analyze_continue(stmt.span),
        }
    }

    fn analyze_scoped(&mut self, stmt: &Statement) -> Result<StmtAttr> {
        self.symbols.enter_scope();
        let attr = self.analyze_statement(stmt)?;
        self.leave_scope();
        Ok(attr)
    }

    fn analyze_var_decl(&mut self, decl: &VarDecl) -> Result<StmtAttr> {
        let value = match &decl.initializer {
            Some(init) => Some(self.analyze_value(init)?),
            None => None,
        };

        self.check_storable(decl.var_type, &decl.name, decl.span)?;
        if self.symbols.lookup_variable(&decl.name).is_some()
            || !self.symbols.lookup_all_by_name(&decl.name).is_empty()
        {
            return Err(CompileError::new(
                ErrorCode::AlreadyDeclared,
                format!("'{}' is already declared", decl.name),
                decl.span,
            ));
        }
        if let (Some(value), Some(init)) = (&value, &decl.initializer) {
            self.check_assignable(value.ty, decl.var_type, init.span)?;
        }

        let offset = self.symbols.add_variable(&decl.name, decl.var_type);
        match &value {
            Some(value) => self
                .codegen
                .emit_store(offset, value.ty, value.operand_name()),
            None => self.codegen.emit_store(offset, Type::Int, "0"),
        }
        Ok(StmtAttr::empty())
    }

    fn analyze_assignment(&mut self, assign: &Assignment) -> Result<StmtAttr> {
        let value = self.analyze_value(&assign.value)?;

        let Some(symbol) = self.symbols.lookup_variable(&assign.name) else {
            return Err(CompileError::new(
                ErrorCode::Undeclared,
                format!("Variable '{}' is not declared", assign.name),
                assign.span,
            ));
        };
        let (offset, Some(target)) = (symbol.offset, symbol.var_type()) else {
            unreachable!("variable lookup returned a function");
        };
        self.check_assignable(value.ty, target, assign.value.span)?;

        self.codegen
            .emit_store(offset, value.ty, value.operand_name());
        Ok(StmtAttr::empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;
    use test_case::test_case;

    fn compile_body(body: &str) -> crate::error::Result<String> {
        crate::compile(&format!("void main() {{ {} }}", body))
    }

    #[test_case("int x; int x;" ; "same scope")]
    #[test_case("int x; { int x; }" ; "nested scope")]
    #[test_case("int printi;" ; "builtin name")]
    #[test_case("int main;" ; "own function name")]
    fn test_redeclaration_rejected(body: &str) {
        let err = compile_body(body).unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyDeclared);
    }

    #[test]
    fn test_sibling_scopes_may_reuse_names() {
        assert!(compile_body("{ int x = 1; } { bool x = true; }").is_ok());
    }

    #[test]
    fn test_byte_widens_into_int() {
        let ir = compile_body("byte b = 3b; int i = b;").unwrap();
        assert!(ir.contains("zext i8"));
    }

    #[test]
    fn test_int_does_not_narrow_into_byte() {
        let err = compile_body("int i = 3; byte b = i;").unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_uninitialized_variable_stores_zero() {
        let ir = compile_body("int x;").unwrap();
        assert!(ir.contains("store i32 0, i32* %t"));
    }

    #[test]
    fn test_assignment_checks() {
        let err = compile_body("x = 1;").unwrap_err();
        assert_eq!(err.code, ErrorCode::Undeclared);
        let err = compile_body("bool b; b = 1;").unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_string_variable_rejected() {
        let err = compile_body("string s = \"a\";").unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_parameter_can_be_reassigned() {
        let ir = crate::compile("void f(int a) { a = a + 1; } void main() { f(1); }").unwrap();
        assert!(ir.contains("define void @f0(i32 %arg1) {"));
    }
}
