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

//! Type checking utilities for the semantic analyzer.
//!
//! This module provides the checks behind every semantic action:
//! - Operand types of arithmetic, comparisons and logical operators
//! - Explicit conversions
//! - Byte literal ranges
//! - Assignment and return compatibility
//!
//! Each check either passes or returns the diagnostic that ends compilation.

use super::Analyzer;
use crate::ast::{BinaryOp, RelOp, Type};
use crate::error::{CompileError, ErrorCode, Result, Span};

/// Largest value a byte literal may have.
pub const BYTE_MAX: u64 = 255;

/// Extension trait for type checking utilities.
pub trait TypeChecker {
    /// Check arithmetic operands and return the widened result type.
    fn check_arithmetic(&self, op: BinaryOp, left: Type, right: Type, span: Span) -> Result<Type>;

    /// Check that both operands of a comparison are numeric.
    fn check_relational(&self, op: RelOp, left: Type, right: Type, span: Span) -> Result<()>;

    /// Check that an operand of `and`, `or` or `not` is a bool.
    fn check_logical(&self, operator: &str, operand: Type, span: Span) -> Result<()>;

    /// Check an explicit conversion between numeric types.
    fn check_cast(&self, from: Type, to: Type, span: Span) -> Result<()>;

    /// Check that a byte literal fits in a byte.
    fn check_byte_literal(&self, value: u64, span: Span) -> Result<()>;

    /// Check that a value of type `value` may be stored into `target`.
    fn check_assignable(&self, value: Type, target: Type, span: Span) -> Result<()>;

    /// Check that a variable or parameter may have this type.
    fn check_storable(&self, ty: Type, name: &str, span: Span) -> Result<()>;

    /// Check a return statement against the enclosing function.
    fn check_return(&self, value: Option<Type>, span: Span) -> Result<()>;
}

fn mismatch(message: String, span: Span) -> CompileError {
    CompileError::new(ErrorCode::TypeMismatch, message, span)
}

impl TypeChecker for Analyzer {
    fn check_arithmetic(&self, op: BinaryOp, left: Type, right: Type, span: Span) -> Result<Type> {
        Type::widen(left, right).ok_or_else(|| {
            mismatch(
                format!(
                    "Operator '{}' cannot be applied to '{}' and '{}'",
                    op.as_str(),
                    left,
                    right
                ),
                span,
            )
            .with_hint("Arithmetic needs int or byte operands")
        })
    }

    fn check_relational(&self, op: RelOp, left: Type, right: Type, span: Span) -> Result<()> {
        if left.is_numeric() && right.is_numeric() {
            return Ok(());
        }
        Err(mismatch(
            format!(
                "Cannot compare '{}' and '{}' with '{}'",
                left,
                right,
                op.as_str()
            ),
            span,
        )
        .with_hint("Comparisons need int or byte operands"))
    }

    fn check_logical(&self, operator: &str, operand: Type, span: Span) -> Result<()> {
        if operand == Type::Bool {
            return Ok(());
        }
        Err(mismatch(
            format!("Operator '{}' expects bool, found '{}'", operator, operand),
            span,
        ))
    }

    fn check_cast(&self, from: Type, to: Type, span: Span) -> Result<()> {
        if from.is_numeric() && to.is_numeric() {
            return Ok(());
        }
        Err(mismatch(
            format!("Cannot convert '{}' to '{}'", from, to),
            span,
        )
        .with_hint("Only int and byte can be converted"))
    }

    fn check_byte_literal(&self, value: u64, span: Span) -> Result<()> {
        if value <= BYTE_MAX {
            return Ok(());
        }
        Err(CompileError::new(
            ErrorCode::ByteOverflow,
            format!("Byte literal {} is out of range", value),
            span,
        )
        .with_hint(format!("Byte values range from 0 to {}", BYTE_MAX)))
    }

    fn check_assignable(&self, value: Type, target: Type, span: Span) -> Result<()> {
        if value.is_assignable_to(target) {
            return Ok(());
        }
        Err(mismatch(
            format!("Cannot assign '{}' to '{}'", value, target),
            span,
        ))
    }

    fn check_storable(&self, ty: Type, name: &str, span: Span) -> Result<()> {
        if ty.is_storable() {
            return Ok(());
        }
        Err(mismatch(
            format!("'{}' cannot have type '{}'", name, ty),
            span,
        )
        .with_hint("Strings can only be passed to print"))
    }

    fn check_return(&self, value: Option<Type>, span: Span) -> Result<()> {
        let expected = self.context.return_type.unwrap_or(Type::Void);
        let function = self.context.function_name.as_deref().unwrap_or("?");
        match value {
            None if expected == Type::Void => Ok(()),
            None => Err(mismatch(
                format!("Function '{}' must return a value of type '{}'", function, expected),
                span,
            )),
            Some(_) if expected == Type::Void => Err(mismatch(
                format!("Void function '{}' cannot return a value", function),
                span,
            )),
            Some(ty) if ty.is_assignable_to(expected) => Ok(()),
            Some(ty) => Err(mismatch(
                format!(
                    "Function '{}' returns '{}', found '{}'",
                    function, expected, ty
                ),
                span,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span::new(0, 1)
    }

    #[test]
    fn test_arithmetic_widens() {
        let analyzer = Analyzer::new();
        assert_eq!(
            analyzer
                .check_arithmetic(BinaryOp::Add, Type::Byte, Type::Int, span())
                .ok(),
            Some(Type::Int)
        );
        assert_eq!(
            analyzer
                .check_arithmetic(BinaryOp::Mul, Type::Byte, Type::Byte, span())
                .ok(),
            Some(Type::Byte)
        );
        let err = analyzer
            .check_arithmetic(BinaryOp::Sub, Type::Bool, Type::Int, span())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_relational_needs_numbers() {
        let analyzer = Analyzer::new();
        assert!(analyzer
            .check_relational(RelOp::Less, Type::Int, Type::Byte, span())
            .is_ok());
        assert!(analyzer
            .check_relational(RelOp::Equal, Type::Bool, Type::Bool, span())
            .is_err());
    }

    #[test]
    fn test_byte_literal_range() {
        let analyzer = Analyzer::new();
        assert!(analyzer.check_byte_literal(255, span()).is_ok());
        let err = analyzer.check_byte_literal(256, span()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ByteOverflow);
    }

    #[test]
    fn test_cast_between_numbers_only() {
        let analyzer = Analyzer::new();
        assert!(analyzer.check_cast(Type::Int, Type::Byte, span()).is_ok());
        assert!(analyzer.check_cast(Type::Bool, Type::Int, span()).is_err());
        assert!(analyzer.check_cast(Type::Int, Type::Bool, span()).is_err());
    }

    #[test]
    fn test_storable() {
        let analyzer = Analyzer::new();
        assert!(analyzer.check_storable(Type::Bool, "b", span()).is_ok());
        let err = analyzer
            .check_storable(Type::String, "s", span())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_return_rules() {
        let mut analyzer = Analyzer::new();
        analyzer.context.return_type = Some(Type::Void);
        assert!(analyzer.check_return(None, span()).is_ok());
        assert!(analyzer.check_return(Some(Type::Int), span()).is_err());

        analyzer.context.return_type = Some(Type::Int);
        assert!(analyzer.check_return(None, span()).is_err());
        assert!(analyzer.check_return(Some(Type::Byte), span()).is_ok());
        assert!(analyzer.check_return(Some(Type::Bool), span()).is_err());
    }
}
