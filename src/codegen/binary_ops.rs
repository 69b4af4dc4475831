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

//! Arithmetic code generation.
//!
//! Operands of mixed width are widened to `i32`; two byte operands stay
//! `i8` and wrap. Division is guarded by a zero check that calls the
//! `@divByZero` runtime routine.

use super::conversions::ConversionEmitter;
use super::emit::EmitHelpers;
use super::labels::LabelManager;
use super::types::llvm_type;
use super::CodeGenerator;
use crate::ast::{BinaryOp, Type};

/// Extension trait for arithmetic emission.
pub trait BinaryOpEmitter {
    /// Emit `left op right` and return the result operand.
    ///
    /// Both operand types must be numeric; the result has type
    /// `Type::widen(left, right)`.
    fn emit_binary(&mut self, op: BinaryOp, left: (&str, Type), right: (&str, Type)) -> String;

    /// Emit the zero check on a divisor.
    fn emit_div_by_zero_check(&mut self, divisor: &str, ty: Type);
}

fn opcode(op: BinaryOp, result: Type) -> &'static str {
    match (op, result) {
        (BinaryOp::Add, _) => "add",
        (BinaryOp::Sub, _) => "sub",
        (BinaryOp::Mul, _) => "mul",
        (BinaryOp::Div, Type::Byte) => "udiv",
        (BinaryOp::Div, _) => "sdiv",
    }
}

impl BinaryOpEmitter for CodeGenerator {
    fn emit_binary(&mut self, op: BinaryOp, left: (&str, Type), right: (&str, Type)) -> String {
        let result = if left.1 == Type::Byte && right.1 == Type::Byte {
            Type::Byte
        } else {
            Type::Int
        };

        if op == BinaryOp::Div {
            self.emit_div_by_zero_check(right.0, right.1);
        }

        let lhs = self.coerce(left.0, left.1, result);
        let rhs = self.coerce(right.0, right.1, result);
        self.emit_assign(format!(
            "{} {} {}, {}",
            opcode(op, result),
            llvm_type(result),
            lhs,
            rhs
        ))
    }

    fn emit_div_by_zero_check(&mut self, divisor: &str, ty: Type) {
        let is_zero = self.emit_assign(format!("icmp eq {} 0, {}", llvm_type(ty), divisor));
        let lists = self.emit_branch(&is_zero);

        let trap = self.gen_label();
        self.emit("call void @divByZero()");
        self.emit("unreachable");
        self.bpatch(lists.true_list, &trap);

        let resume = self.gen_label();
        self.bpatch(lists.false_list, &resume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_int_addition() {
        let mut gen = CodeGenerator::new();
        let result = gen.emit_binary(BinaryOp::Add, ("%a", Type::Int), ("%b", Type::Int));
        assert_eq!(result, "%t0");
        assert_eq!(gen.finish(), "    %t0 = add i32 %a, %b\n");
    }

    #[test]
    fn test_mixed_operands_widen() {
        let mut gen = CodeGenerator::new();
        gen.emit_binary(BinaryOp::Mul, ("%a", Type::Int), ("%b", Type::Byte));
        assert_eq!(
            gen.finish(),
            "    %t0 = zext i8 %b to i32\n    %t1 = mul i32 %a, %t0\n"
        );
    }

    #[test]
    fn test_byte_arithmetic_stays_narrow() {
        let mut gen = CodeGenerator::new();
        gen.emit_binary(BinaryOp::Sub, ("%a", Type::Byte), ("%b", Type::Byte));
        assert_eq!(gen.finish(), "    %t0 = sub i8 %a, %b\n");
    }

    #[test]
    fn test_division_checks_divisor() {
        let mut gen = CodeGenerator::new();
        gen.emit_binary(BinaryOp::Div, ("%a", Type::Int), ("%b", Type::Int));
        assert_eq!(
            gen.finish(),
            "    %t0 = icmp eq i32 0, %b\n    br i1 %t0, label %label_2, label %label_5\nlabel_2:\n    call void @divByZero()\n    unreachable\nlabel_5:\n    %t1 = sdiv i32 %a, %b\n"
        );
    }

    #[test]
    fn test_byte_division_is_unsigned() {
        let mut gen = CodeGenerator::new();
        gen.emit_binary(BinaryOp::Div, ("%a", Type::Byte), ("%b", Type::Byte));
        let ir = gen.finish();
        assert!(ir.contains("icmp eq i8 0, %b"));
        assert!(ir.contains("%t1 = udiv i8 %a, %b"));
    }
}
