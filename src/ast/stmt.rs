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

//! Statement AST nodes for the FanC compiler.

use crate::error::Span;

use super::{Call, Expr, Type};

/// A statement in the FanC language.
#[derive(Debug, Clone)]
pub struct Statement {
    /// The kind of statement.
    pub kind: StatementKind,
    /// The source span of this statement.
    pub span: Span,
}

impl Statement {
    /// Create a new statement.
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of statement.
#[derive(Debug, Clone)]
pub enum StatementKind {
    /// A braced block, which opens its own scope.
    Block(Vec<Statement>),

    /// A variable declaration.
    VarDecl(VarDecl),

    /// An assignment to an existing variable.
    Assignment(Assignment),

    /// A call used as a statement.
    Call(Call),

    /// A return statement.
    Return(Option<Expr>),

    /// An if statement.
    If(IfStatement),

    /// A while loop.
    While(WhileStatement),

    /// A break statement.
    Break,

    /// A continue statement.
    Continue,
}

/// A variable declaration.
#[derive(Debug, Clone)]
pub struct VarDecl {
    /// The variable name.
    pub name: String,
    /// The declared type.
    pub var_type: Type,
    /// Optional initial value.
    pub initializer: Option<Expr>,
    /// The source span.
    pub span: Span,
}

/// An assignment statement.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// The target variable name.
    pub name: String,
    /// The assigned value.
    pub value: Expr,
    /// The source span.
    pub span: Span,
}

/// An if statement with an optional else branch.
#[derive(Debug, Clone)]
pub struct IfStatement {
    /// The condition.
    pub condition: Expr,
    /// The statement run when the condition holds.
    pub then_branch: Box<Statement>,
    /// The optional else statement.
    pub else_branch: Option<Box<Statement>>,
}

/// A while loop.
#[derive(Debug, Clone)]
pub struct WhileStatement {
    /// The loop condition.
    pub condition: Expr,
    /// The loop body.
    pub body: Box<Statement>,
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StatementKind::Block(statements) => {
                write!(f, "{{ ")?;
                for stmt in statements {
                    write!(f, "{} ", stmt)?;
                }
                write!(f, "}}")
            }
            StatementKind::VarDecl(decl) => match &decl.initializer {
                Some(init) => write!(f, "{} {} = {};", decl.var_type, decl.name, init),
                None => write!(f, "{} {};", decl.var_type, decl.name),
            },
            StatementKind::Assignment(assign) => write!(f, "{} = {};", assign.name, assign.value),
            StatementKind::Call(call) => write!(f, "{};", call),
            StatementKind::Return(Some(value)) => write!(f, "return {};", value),
            StatementKind::Return(None) => write!(f, "return;"),
            StatementKind::If(if_stmt) => {
                write!(f, "if ({}) {}", if_stmt.condition, if_stmt.then_branch)?;
                if let Some(else_branch) = &if_stmt.else_branch {
                    write!(f, " else {}", else_branch)?;
                }
                Ok(())
            }
            StatementKind::While(while_stmt) => {
                write!(f, "while ({}) {}", while_stmt.condition, while_stmt.body)
            }
            StatementKind::Break => write!(f, "break;"),
            StatementKind::Continue => write!(f, "continue;"),
        }
    }
}
