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

//! The IR emission buffer.
//!
//! Code is kept as typed lines so branch targets can be filled in after the
//! fact. A line's index in the buffer is its address.

use super::labels::{BranchSlot, Label, PatchList};

/// A single line of the code section.
#[derive(Debug)]
enum Line {
    /// An instruction, rendered indented.
    Instr(String),
    /// Unindented text (`define ...`, `}`).
    Raw(String),
    /// A label definition.
    Label(Label),
    /// `br label %target`.
    Jump(Option<Label>),
    /// `br i1 cond, label %t, label %f`.
    CondJump {
        cond: String,
        targets: [Option<Label>; 2],
    },
    /// The stack frame of a function, sized when the function closes.
    Frame { dest: String, slots: Option<usize> },
}

/// Append-only buffer of global definitions and function code.
#[derive(Debug, Default)]
pub struct CodeBuffer {
    globals: Vec<String>,
    lines: Vec<Line>,
}

impl CodeBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the next emitted line will get.
    pub fn next_address(&self) -> usize {
        self.lines.len()
    }

    /// Emit an instruction and return its address.
    pub fn emit(&mut self, text: impl Into<String>) -> usize {
        self.push(Line::Instr(text.into()))
    }

    /// Emit an unindented line (function header or closing brace).
    pub fn emit_raw(&mut self, text: impl Into<String>) -> usize {
        self.push(Line::Raw(text.into()))
    }

    /// Emit an unconditional branch with an open target slot.
    pub fn emit_jump(&mut self) -> usize {
        self.push(Line::Jump(None))
    }

    /// Emit an unconditional branch to a known label.
    pub fn emit_jump_to(&mut self, label: &Label) -> usize {
        self.push(Line::Jump(Some(label.clone())))
    }

    /// Emit a conditional branch with two open target slots.
    pub fn emit_cond_jump(&mut self, cond: impl Into<String>) -> usize {
        self.push(Line::CondJump {
            cond: cond.into(),
            targets: [None, None],
        })
    }

    /// Emit a frame allocation whose size is set later with [`Self::set_frame_slots`].
    pub fn emit_frame(&mut self, dest: impl Into<String>) -> usize {
        self.push(Line::Frame {
            dest: dest.into(),
            slots: None,
        })
    }

    /// Size the frame allocated at `address`.
    ///
    /// # Panics
    ///
    /// Panics if `address` is not a frame line.
    pub fn set_frame_slots(&mut self, address: usize, count: usize) {
        match self.lines.get_mut(address) {
            Some(Line::Frame { slots, .. }) => *slots = Some(count),
            other => panic!("line {} is not a frame allocation: {:?}", address, other),
        }
    }

    /// Allocate a label, emit its definition and return it.
    pub fn gen_label(&mut self) -> Label {
        let label = Label::at(self.lines.len());
        self.lines.push(Line::Label(label.clone()));
        label
    }

    /// Append a line to the global section.
    pub fn emit_global(&mut self, text: impl Into<String>) {
        self.globals.push(text.into());
    }

    /// Resolve every slot in `list` to `label`.
    ///
    /// # Panics
    ///
    /// Panics if a slot was already resolved or does not exist on its line.
    pub fn bpatch(&mut self, list: PatchList, label: &Label) {
        for (address, slot) in list.into_entries() {
            let target = match (self.lines.get_mut(address), slot) {
                (Some(Line::Jump(target)), BranchSlot::First) => target,
                (Some(Line::CondJump { targets, .. }), slot) => &mut targets[slot.index()],
                (line, slot) => panic!(
                    "no branch slot {:?} at address {}: {:?}",
                    slot, address, line
                ),
            };
            if let Some(existing) = target {
                panic!(
                    "branch slot {:?} at address {} already targets {}",
                    slot, address, existing
                );
            }
            *target = Some(label.clone());
        }
    }

    /// Number of code lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check whether no code has been emitted.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the global section followed by the code section.
    ///
    /// # Panics
    ///
    /// Panics if a branch target or a frame size is still open.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for global in &self.globals {
            out.push_str(global);
            out.push('\n');
        }
        if !self.globals.is_empty() && !self.lines.is_empty() {
            out.push('\n');
        }
        for (address, line) in self.lines.iter().enumerate() {
            render_line(&mut out, address, line);
            out.push('\n');
        }
        out
    }

    fn push(&mut self, line: Line) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }
}

fn target(address: usize, label: &Option<Label>) -> &Label {
    match label {
        Some(label) => label,
        None => panic!("unresolved branch target at address {}", address),
    }
}

fn render_line(out: &mut String, address: usize, line: &Line) {
    use std::fmt::Write;

    // Writing into a String cannot fail.
    let _ = match line {
        Line::Instr(text) => write!(out, "    {}", text),
        Line::Raw(text) => write!(out, "{}", text),
        Line::Label(label) => write!(out, "{}:", label),
        Line::Jump(label) => write!(out, "    br label %{}", target(address, label)),
        Line::CondJump { cond, targets } => write!(
            out,
            "    br i1 {}, label %{}, label %{}",
            cond,
            target(address, &targets[0]),
            target(address, &targets[1])
        ),
        Line::Frame { dest, slots } => match slots {
            Some(n) => write!(out, "    {} = alloca i32, i32 {}", dest, n),
            None => panic!("frame at address {} was never sized", address),
        },
    };
}
