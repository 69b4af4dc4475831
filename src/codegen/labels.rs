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

//! Label and branch management for code generation.
//!
//! This module handles:
//! - Labels (named basic-block entry points)
//! - Branch slots and patch lists (branches whose target is not known yet)
//! - LabelManager trait for label creation and backpatching

use super::CodeGenerator;
use tracing::trace;

/// A label naming the start of a basic block (`label_N`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Create the label for a buffer address.
    pub fn at(address: usize) -> Self {
        Self(format!("label_{}", address))
    }

    /// The label name without the `%` sigil.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One target slot of a branch instruction.
///
/// Unconditional branches only have `First`. Conditional branches take
/// `First` when the condition holds and `Second` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSlot {
    First,
    Second,
}

impl BranchSlot {
    /// Index into a conditional branch's target pair.
    pub fn index(self) -> usize {
        match self {
            BranchSlot::First => 0,
            BranchSlot::Second => 1,
        }
    }
}

/// Branch slots waiting for the same target label.
///
/// A patch list is moved, never copied: merging consumes both inputs and
/// backpatching consumes the list, so a resolved list cannot be read again.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PatchList {
    entries: Vec<(usize, BranchSlot)>,
}

impl PatchList {
    /// An empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A list holding one slot of the branch at `address`.
    pub fn single(address: usize, slot: BranchSlot) -> Self {
        Self {
            entries: vec![(address, slot)],
        }
    }

    /// Concatenate two lists (no deduplication).
    #[must_use]
    pub fn merge(mut self, mut other: PatchList) -> PatchList {
        self.entries.append(&mut other.entries);
        self
    }

    /// Check whether the list has no pending slots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pending slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The pending slots in merge order.
    pub fn entries(&self) -> &[(usize, BranchSlot)] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<(usize, BranchSlot)> {
        self.entries
    }
}

/// Extension trait for label management.
pub trait LabelManager {
    /// Emit a fresh label definition and return it.
    fn gen_label(&mut self) -> Label;

    /// Point every slot of `list` at `label`.
    fn bpatch(&mut self, list: PatchList, label: &Label);

    /// Close the current block with a jump into a fresh label and return it.
    ///
    /// Used wherever a label must appear between two emitted regions, so
    /// that every block ends with a terminator.
    fn marker(&mut self) -> Label;
}

impl LabelManager for CodeGenerator {
    fn gen_label(&mut self) -> Label {
        let label = self.buffer.gen_label();
        trace!(label = %label, "generated label");
        label
    }

    fn bpatch(&mut self, list: PatchList, label: &Label) {
        self.buffer.bpatch(list, label);
    }

    fn marker(&mut self) -> Label {
        let jump = self.buffer.emit_jump();
        let label = self.gen_label();
        self.bpatch(PatchList::single(jump, BranchSlot::First), &label);
        label
    }
}
