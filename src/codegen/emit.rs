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

//! Emit helper methods for code generation.
//!
//! This module provides the low-level emission utilities the other
//! generator traits build on:
//! - Fresh temporary names
//! - Instruction and global emission
//! - Branch emission returning patch lists

use super::attributes::BranchLists;
use super::labels::{BranchSlot, Label, PatchList};
use super::CodeGenerator;

/// Extension trait for low-level code emission.
///
/// This trait provides methods for emitting instructions and branches to the
/// code buffer. It is implemented for `CodeGenerator` and separates emission
/// logic from the main code generator.
pub trait EmitHelpers {
    /// Reserve a fresh temporary name (`%tN`).
    fn fresh_temp(&mut self) -> String;

    /// Emit an instruction and return its address.
    fn emit(&mut self, text: impl Into<String>) -> usize;

    /// Append a line to the global section.
    fn emit_global(&mut self, text: impl Into<String>);

    /// Emit `dest = <text>` into a fresh temporary and return its name.
    fn emit_assign(&mut self, text: impl AsRef<str>) -> String;

    /// Emit an unconditional branch with an open target.
    fn emit_jump(&mut self) -> PatchList;

    /// Emit an unconditional branch to a known label.
    fn emit_jump_to(&mut self, label: &Label);

    /// Emit a conditional branch on `cond` and split its targets.
    fn emit_branch(&mut self, cond: &str) -> BranchLists;
}

impl EmitHelpers for CodeGenerator {
    fn fresh_temp(&mut self) -> String {
        let name = format!("%t{}", self.temp_counter);
        self.temp_counter += 1;
        name
    }

    fn emit(&mut self, text: impl Into<String>) -> usize {
        self.buffer.emit(text)
    }

    fn emit_global(&mut self, text: impl Into<String>) {
        self.buffer.emit_global(text);
    }

    fn emit_assign(&mut self, text: impl AsRef<str>) -> String {
        let dest = self.fresh_temp();
        self.buffer.emit(format!("{} = {}", dest, text.as_ref()));
        dest
    }

    fn emit_jump(&mut self) -> PatchList {
        let address = self.buffer.emit_jump();
        PatchList::single(address, BranchSlot::First)
    }

    fn emit_jump_to(&mut self, label: &Label) {
        self.buffer.emit_jump_to(label);
    }

    fn emit_branch(&mut self, cond: &str) -> BranchLists {
        let address = self.buffer.emit_cond_jump(cond);
        BranchLists::new(
            PatchList::single(address, BranchSlot::First),
            PatchList::single(address, BranchSlot::Second),
        )
    }
}
