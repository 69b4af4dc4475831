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

//! Scope frames for the semantic analyzer.
//!
//! A scope does not own its symbols. It records where its bindings start in
//! the symbol arena and the next free local slot, so closing it is a
//! truncation of the arena.

/// One active scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeFrame {
    /// Arena index of the first binding declared in this scope.
    pub start: usize,
    /// Next free local slot.
    pub next_offset: i32,
}

impl ScopeFrame {
    /// Create a frame starting at `start` that continues slot numbering
    /// at `next_offset`.
    pub fn new(start: usize, next_offset: i32) -> Self {
        Self { start, next_offset }
    }

    /// Reserve the next local slot and return it.
    pub fn allocate(&mut self) -> i32 {
        let offset = self.next_offset;
        self.next_offset += 1;
        offset
    }
}
