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

//! Expression AST nodes for the FanC compiler.

use crate::error::Span;

use super::Type;

/// An expression in the FanC language.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source span of this expression.
    pub span: Span,
}

impl Expr {
    /// Create a new expression.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of expression.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// An integer literal.
    IntegerLiteral(u64),

    /// A byte literal (`42b`), range-checked during analysis.
    ByteLiteral(u64),

    /// A string literal (escapes already decoded).
    StringLiteral(String),

    /// A boolean literal.
    BoolLiteral(bool),

    /// A variable reference.
    Identifier(String),

    /// Arithmetic: `+ - * /`.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// Comparison: `== != < > <= >=`.
    Relational {
        left: Box<Expr>,
        op: RelOp,
        right: Box<Expr>,
    },

    /// Short-circuit `and` / `or`.
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },

    /// Logical negation.
    Not(Box<Expr>),

    /// A function call.
    Call(Call),

    /// An explicit numeric conversion (e.g., `(byte) x`).
    TypeCast {
        target_type: Type,
        expr: Box<Expr>,
    },

    /// A parenthesized expression.
    Grouped(Box<Expr>),
}

/// A function call, used both as an expression and as a statement.
#[derive(Debug, Clone)]
pub struct Call {
    /// The callee name.
    pub name: String,
    /// The arguments in source order.
    pub args: Vec<Expr>,
    /// The source span of the call.
    pub span: Span,
}

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Get a string representation of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// A relational operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl RelOp {
    /// Check if this is `==` or `!=`.
    pub fn is_equality(&self) -> bool {
        matches!(self, RelOp::Equal | RelOp::NotEqual)
    }

    /// Get a string representation of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelOp::Equal => "==",
            RelOp::NotEqual => "!=",
            RelOp::Less => "<",
            RelOp::Greater => ">",
            RelOp::LessEqual => "<=",
            RelOp::GreaterEqual => ">=",
        }
    }
}

/// A short-circuit boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Get a string representation of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::IntegerLiteral(n) => write!(f, "{}", n),
            ExprKind::ByteLiteral(n) => write!(f, "{}b", n),
            ExprKind::StringLiteral(s) => write!(f, "{:?}", s),
            ExprKind::BoolLiteral(b) => write!(f, "{}", b),
            ExprKind::Identifier(name) => write!(f, "{}", name),
            ExprKind::Binary { left, op, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }
            ExprKind::Relational { left, op, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }
            ExprKind::Logical { left, op, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }
            ExprKind::Not(operand) => write!(f, "(not {})", operand),
            ExprKind::Call(call) => write!(f, "{}", call),
            ExprKind::TypeCast { target_type, expr } => write!(f, "(({}) {})", target_type, expr),
            ExprKind::Grouped(inner) => write!(f, "{}", inner),
        }
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
