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

//! Control flow code generation by backpatching.
//!
//! Booleans are carried as true/false patch lists until a value is needed,
//! and statements as next/break/continue lists until their successor is
//! known. Each lowering consumes its children's lists: they are either
//! resolved here or moved into the result.

use super::attributes::{BranchLists, StmtAttr};
use super::emit::EmitHelpers;
use super::labels::{Label, LabelManager, PatchList};
use super::CodeGenerator;

/// Extension trait for boolean and statement lowering.
pub trait ControlFlowEmitter {
    /// A constant `true` or `false`: one jump on the matching list.
    fn emit_bool_literal(&mut self, value: bool) -> BranchLists;

    /// Turn an `i1` value into branch form.
    fn emit_bool_test(&mut self, value: &str) -> BranchLists;

    /// `left and right`, where `mid` starts the code of `right`.
    fn lower_and(&mut self, left: BranchLists, mid: &Label, right: BranchLists) -> BranchLists;

    /// `left or right`, where `mid` starts the code of `right`.
    fn lower_or(&mut self, left: BranchLists, mid: &Label, right: BranchLists) -> BranchLists;

    /// Join the true and false exits into an `i1` value with a `phi`.
    fn materialize(&mut self, lists: BranchLists) -> String;

    /// `if (cond) then`.
    fn lower_if(&mut self, cond: BranchLists, then_label: &Label, then: StmtAttr) -> StmtAttr;

    /// `if (cond) then else otherwise`.
    ///
    /// `skip` is the jump emitted after the then branch over the else branch.
    fn lower_if_else(
        &mut self,
        cond: BranchLists,
        then_label: &Label,
        then: StmtAttr,
        skip: PatchList,
        else_label: &Label,
        otherwise: StmtAttr,
    ) -> StmtAttr;

    /// `while (cond) body`; emits the back edge to `cond_label`.
    fn lower_while(
        &mut self,
        cond_label: &Label,
        cond: BranchLists,
        body_label: &Label,
        body: StmtAttr,
    ) -> StmtAttr;

    /// `first second`, where `label` starts the code of `second`.
    fn lower_sequence(&mut self, first: StmtAttr, label: &Label, second: StmtAttr) -> StmtAttr;

    /// A `break` jump, resolved by the enclosing loop.
    fn emit_break(&mut self) -> StmtAttr;

    /// A `continue` jump, resolved by the enclosing loop.
    fn emit_continue(&mut self) -> StmtAttr;
}

impl ControlFlowEmitter for CodeGenerator {
    fn emit_bool_literal(&mut self, value: bool) -> BranchLists {
        let jump = self.emit_jump();
        if value {
            BranchLists::new(jump, PatchList::empty())
        } else {
            BranchLists::new(PatchList::empty(), jump)
        }
    }

    fn emit_bool_test(&mut self, value: &str) -> BranchLists {
        let cond = self.emit_assign(format!("icmp eq i1 1, {}", value));
        self.emit_branch(&cond)
    }

    fn lower_and(&mut self, left: BranchLists, mid: &Label, right: BranchLists) -> BranchLists {
        self.bpatch(left.true_list, mid);
        BranchLists::new(right.true_list, left.false_list.merge(right.false_list))
    }

    fn lower_or(&mut self, left: BranchLists, mid: &Label, right: BranchLists) -> BranchLists {
        self.bpatch(left.false_list, mid);
        BranchLists::new(left.true_list.merge(right.true_list), right.false_list)
    }

    fn materialize(&mut self, lists: BranchLists) -> String {
        let dest = self.fresh_temp();

        let on_true = self.gen_label();
        let from_true = self.emit_jump();
        let on_false = self.gen_label();
        let from_false = self.emit_jump();

        let join = self.gen_label();
        self.emit(format!(
            "{} = phi i1 [1, %{}], [0, %{}]",
            dest, on_true, on_false
        ));

        self.bpatch(lists.true_list, &on_true);
        self.bpatch(lists.false_list, &on_false);
        self.bpatch(from_true.merge(from_false), &join);
        dest
    }

    fn lower_if(&mut self, cond: BranchLists, then_label: &Label, then: StmtAttr) -> StmtAttr {
        self.bpatch(cond.true_list, then_label);
        StmtAttr {
            next_list: cond.false_list.merge(then.next_list),
            break_list: then.break_list,
            continue_list: then.continue_list,
        }
    }

    fn lower_if_else(
        &mut self,
        cond: BranchLists,
        then_label: &Label,
        then: StmtAttr,
        skip: PatchList,
        else_label: &Label,
        otherwise: StmtAttr,
    ) -> StmtAttr {
        self.bpatch(cond.true_list, then_label);
        self.bpatch(cond.false_list, else_label);
        StmtAttr {
            next_list: then.next_list.merge(skip).merge(otherwise.next_list),
            break_list: then.break_list.merge(otherwise.break_list),
            continue_list: then.continue_list.merge(otherwise.continue_list),
        }
    }

    fn lower_while(
        &mut self,
        cond_label: &Label,
        cond: BranchLists,
        body_label: &Label,
        body: StmtAttr,
    ) -> StmtAttr {
        self.bpatch(body.next_list, cond_label);
        self.bpatch(body.continue_list, cond_label);
        self.bpatch(cond.true_list, body_label);
        self.emit_jump_to(cond_label);
        StmtAttr::with_next(cond.false_list.merge(body.break_list))
    }

    fn lower_sequence(&mut self, first: StmtAttr, label: &Label, second: StmtAttr) -> StmtAttr {
        self.bpatch(first.next_list, label);
        StmtAttr {
            next_list: second.next_list,
            break_list: first.break_list.merge(second.break_list),
            continue_list: first.continue_list.merge(second.continue_list),
        }
    }

    fn emit_break(&mut self) -> StmtAttr {
        StmtAttr {
            break_list: self.emit_jump(),
            ..StmtAttr::empty()
        }
    }

    fn emit_continue(&mut self) -> StmtAttr {
        StmtAttr {
            continue_list: self.emit_jump(),
            ..StmtAttr::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::BranchSlot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bool_literals() {
        let mut gen = CodeGenerator::new();
        let t = gen.emit_bool_literal(true);
        let f = gen.emit_bool_literal(false);
        assert_eq!(t.true_list.entries(), &[(0, BranchSlot::First)]);
        assert!(t.false_list.is_empty());
        assert!(f.true_list.is_empty());
        assert_eq!(f.false_list.entries(), &[(1, BranchSlot::First)]);
    }

    #[test]
    fn test_and_patches_left_true_to_mid() {
        let mut gen = CodeGenerator::new();
        let left = gen.emit_branch("%a");
        let mid = gen.gen_label();
        let right = gen.emit_branch("%b");
        let result = gen.lower_and(left, &mid, right);

        assert_eq!(result.true_list.entries(), &[(2, BranchSlot::First)]);
        assert_eq!(
            result.false_list.entries(),
            &[(0, BranchSlot::Second), (2, BranchSlot::Second)]
        );

        let end = gen.gen_label();
        gen.bpatch(result.true_list.merge(result.false_list), &end);
        assert_eq!(
            gen.finish(),
            "    br i1 %a, label %label_1, label %label_3\n\
             label_1:\n\
             \x20   br i1 %b, label %label_3, label %label_3\n\
             label_3:\n"
        );
    }

    #[test]
    fn test_or_patches_left_false_to_mid() {
        let mut gen = CodeGenerator::new();
        let left = gen.emit_branch("%a");
        let mid = gen.gen_label();
        let right = gen.emit_branch("%b");
        let result = gen.lower_or(left, &mid, right);

        assert_eq!(
            result.true_list.entries(),
            &[(0, BranchSlot::First), (2, BranchSlot::First)]
        );
        assert_eq!(result.false_list.entries(), &[(2, BranchSlot::Second)]);
    }

    #[test]
    fn test_materialize_emits_phi() {
        let mut gen = CodeGenerator::new();
        let lists = gen.emit_bool_literal(true);
        let value = gen.materialize(lists);
        assert_eq!(value, "%t0");
        assert_eq!(
            gen.finish(),
            "    br label %label_1\n\
             label_1:\n\
             \x20   br label %label_5\n\
             label_3:\n\
             \x20   br label %label_5\n\
             label_5:\n\
             \x20   %t0 = phi i1 [1, %label_1], [0, %label_3]\n"
        );
    }

    #[test]
    fn test_while_resolves_break_to_exit() {
        let mut gen = CodeGenerator::new();
        let cond_label = gen.marker();
        let cond = gen.emit_bool_literal(true);
        let body_label = gen.marker();
        let body = gen.emit_break();
        let result = gen.lower_while(&cond_label, cond, &body_label, body);

        // only the break at address 5 leaves the loop
        assert_eq!(result.next_list.entries(), &[(5, BranchSlot::First)]);
        assert!(result.break_list.is_empty());

        let exit = gen.gen_label();
        gen.bpatch(result.next_list, &exit);
        assert_eq!(
            gen.finish(),
            "    br label %label_1\n\
             label_1:\n\
             \x20   br label %label_4\n\
             \x20   br label %label_4\n\
             label_4:\n\
             \x20   br label %label_7\n\
             \x20   br label %label_1\n\
             label_7:\n"
        );
    }

    #[test]
    fn test_if_merges_false_exit_with_next() {
        let mut gen = CodeGenerator::new();
        let cond = gen.emit_branch("%c");
        let then_label = gen.marker();
        let then = StmtAttr::with_next(gen.emit_jump());
        let result = gen.lower_if(cond, &then_label, then);
        assert_eq!(
            result.next_list.entries(),
            &[(0, BranchSlot::Second), (3, BranchSlot::First)]
        );
    }

    #[test]
    fn test_if_else_merges_three_exits() {
        let mut gen = CodeGenerator::new();
        let cond = gen.emit_branch("%c");
        let then_label = gen.marker();
        let then = gen.emit_continue();
        let skip = gen.emit_jump();
        let else_label = gen.marker();
        let otherwise = gen.emit_break();
        let result = gen.lower_if_else(cond, &then_label, then, skip, &else_label, otherwise);

        assert_eq!(result.next_list.entries(), &[(4, BranchSlot::First)]);
        assert_eq!(result.continue_list.entries(), &[(3, BranchSlot::First)]);
        assert_eq!(result.break_list.entries(), &[(7, BranchSlot::First)]);
    }

    #[test]
    fn test_sequence_patches_first_next() {
        let mut gen = CodeGenerator::new();
        let first = StmtAttr::with_next(gen.emit_jump());
        let label = gen.gen_label();
        let second = gen.emit_break();
        let result = gen.lower_sequence(first, &label, second);
        assert!(result.next_list.is_empty());
        assert_eq!(result.break_list.entries(), &[(2, BranchSlot::First)]);
    }
}
