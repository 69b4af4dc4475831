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

//! Abstract Syntax Tree (AST) definitions for the FanC compiler.
//!
//! This module defines the data structures that represent a parsed FanC program.

mod expr;
mod stmt;
mod types;

pub use expr::*;
pub use stmt::*;
pub use types::*;

use crate::error::Span;

/// A complete FanC program: a sequence of function declarations.
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// The functions in source order.
    pub functions: Vec<FunctionDef>,
}

impl Program {
    /// Create a new empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the first function with the given name.
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// A function definition.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// Whether the declaration carries the `override` qualifier.
    pub is_override: bool,
    /// The function name.
    pub name: String,
    /// The return type.
    pub return_type: Type,
    /// The formal parameters.
    pub params: Vec<Parameter>,
    /// The body statements.
    pub body: Vec<Statement>,
    /// The span of the signature (qualifier through closing parenthesis).
    pub span: Span,
}

impl FunctionDef {
    /// The parameter types in declaration order.
    pub fn param_types(&self) -> Vec<Type> {
        self.params.iter().map(|p| p.param_type).collect()
    }
}

/// A formal parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// The parameter type.
    pub param_type: Type,
    /// The source span.
    pub span: Span,
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, func) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", func)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_override {
            write!(f, "override ")?;
        }
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", param.param_type, param.name)?;
        }
        write!(f, ") {{")?;
        for stmt in &self.body {
            write!(f, " {}", stmt)?;
        }
        write!(f, " }}")
    }
}
