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

//! Relational operator code generation.
//!
//! A comparison is emitted as `icmp` followed by a conditional branch whose
//! two targets become the true and false lists of the result.

use super::attributes::BranchLists;
use super::conversions::ConversionEmitter;
use super::emit::EmitHelpers;
use super::CodeGenerator;
use crate::ast::{RelOp, Type};

/// Extension trait for comparison emission.
pub trait ComparisonEmitter {
    /// Compare two numeric operands and return the branch lists.
    fn emit_relop(&mut self, op: RelOp, left: (&str, Type), right: (&str, Type)) -> BranchLists;
}

/// The `icmp` predicate for an operator; byte/byte comparisons are unsigned.
pub fn predicate(op: RelOp, unsigned: bool) -> &'static str {
    match (op, unsigned) {
        (RelOp::Equal, _) => "eq",
        (RelOp::NotEqual, _) => "ne",
        (RelOp::Less, false) => "slt",
        (RelOp::Greater, false) => "sgt",
        (RelOp::LessEqual, false) => "sle",
        (RelOp::GreaterEqual, false) => "sge",
        (RelOp::Less, true) => "ult",
        (RelOp::Greater, true) => "ugt",
        (RelOp::LessEqual, true) => "ule",
        (RelOp::GreaterEqual, true) => "uge",
    }
}

impl ComparisonEmitter for CodeGenerator {
    fn emit_relop(&mut self, op: RelOp, left: (&str, Type), right: (&str, Type)) -> BranchLists {
        let both_bytes = left.1 == Type::Byte && right.1 == Type::Byte;
        let cond = if both_bytes {
            self.emit_assign(format!(
                "icmp {} i8 {}, {}",
                predicate(op, true),
                left.0,
                right.0
            ))
        } else {
            let lhs = self.coerce(left.0, left.1, Type::Int);
            let rhs = self.coerce(right.0, right.1, Type::Int);
            self.emit_assign(format!("icmp {} i32 {}, {}", predicate(op, false), lhs, rhs))
        };
        self.emit_branch(&cond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{BranchSlot, LabelManager};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_int_comparison() {
        let mut gen = CodeGenerator::new();
        let lists = gen.emit_relop(RelOp::Less, ("%a", Type::Int), ("%b", Type::Int));
        assert_eq!(lists.true_list.entries(), &[(1, BranchSlot::First)]);
        assert_eq!(lists.false_list.entries(), &[(1, BranchSlot::Second)]);
        assert_eq!(gen.buffer().len(), 2);
    }

    #[test]
    fn test_byte_comparison_is_unsigned() {
        let mut gen = CodeGenerator::new();
        let lists = gen.emit_relop(RelOp::GreaterEqual, ("%a", Type::Byte), ("%b", Type::Byte));
        let yes = gen.gen_label();
        gen.bpatch(lists.true_list.merge(lists.false_list), &yes);
        assert_eq!(
            gen.finish(),
            "    %t0 = icmp uge i8 %a, %b\n    br i1 %t0, label %label_2, label %label_2\nlabel_2:\n"
        );
    }

    #[test]
    fn test_mixed_comparison_widens() {
        let mut gen = CodeGenerator::new();
        gen.emit_relop(RelOp::NotEqual, ("%a", Type::Byte), ("%b", Type::Int));
        assert_eq!(gen.buffer().len(), 3);
    }

    #[test]
    fn test_predicates() {
        assert_eq!(predicate(RelOp::Equal, true), "eq");
        assert_eq!(predicate(RelOp::LessEqual, false), "sle");
        assert_eq!(predicate(RelOp::Greater, true), "ugt");
    }
}
