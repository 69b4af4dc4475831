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

//! Code generation module for the FanC compiler.
//!
//! This module generates LLVM textual IR while the analyzer walks the AST.
//! It handles:
//! - The emission buffer and backpatching of branch targets
//! - Stack frames, locals and parameters
//! - Arithmetic, comparisons and conversions
//! - Short-circuit booleans and structured control flow
//! - Functions, calls and the runtime prologue
//!
//! # Module Structure
//!
//! - `attributes` - Synthesized expression and statement attributes
//! - `binary_ops` - Arithmetic with the division-by-zero check (BinaryOpEmitter trait)
//! - `buffer` - The typed line buffer (CodeBuffer)
//! - `comparisons` - Relational operators (ComparisonEmitter trait)
//! - `control_flow` - Backpatching of booleans and statements (ControlFlowEmitter trait)
//! - `conversions` - Widening, narrowing and casts (ConversionEmitter trait)
//! - `emit` - Low-level emission (EmitHelpers trait)
//! - `functions` - Definitions, calls and returns (FunctionEmitter trait)
//! - `labels` - Labels and patch lists (LabelManager trait)
//! - `runtime` - The fixed prologue of helper routines
//! - `strings` - String constants (StringEmitter trait)
//! - `types` - IR type names
//! - `variables` - Frames, loads and stores (VariableEmitter trait)

pub mod attributes;
pub mod binary_ops;
pub mod buffer;
pub mod comparisons;
pub mod control_flow;
pub mod conversions;
pub mod emit;
pub mod functions;
pub mod labels;
pub mod runtime;
pub mod strings;
pub mod types;
pub mod variables;

pub use attributes::{BranchLists, ExprAttr, ExprValue, StmtAttr};
pub use binary_ops::BinaryOpEmitter;
pub use buffer::CodeBuffer;
pub use comparisons::ComparisonEmitter;
pub use control_flow::ControlFlowEmitter;
pub use conversions::ConversionEmitter;
pub use emit::EmitHelpers;
pub use functions::FunctionEmitter;
pub use labels::{BranchSlot, Label, LabelManager, PatchList};
pub use runtime::RuntimeEmitter;
pub use strings::StringEmitter;
pub use variables::VariableEmitter;

/// Storage of the function currently being generated.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    /// Pointer to the local slots.
    pub(crate) locals: String,
    /// Address of the frame allocation line.
    pub(crate) address: usize,
    /// Pointer to the spilled arguments, if the function has parameters.
    pub(crate) args: Option<String>,
}

/// The IR code generator.
///
/// Owns the emission buffer and the per-compilation name counters.
#[derive(Debug, Default)]
pub struct CodeGenerator {
    /// The emission buffer.
    pub(crate) buffer: CodeBuffer,
    /// Next temporary number.
    pub(crate) temp_counter: usize,
    /// Next string constant number.
    pub(crate) string_counter: usize,
    /// The frame of the function being generated.
    pub(crate) frame: Option<Frame>,
}

impl CodeGenerator {
    /// Create a new code generator with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the emission buffer.
    pub fn buffer(&self) -> &CodeBuffer {
        &self.buffer
    }

    /// Render the complete IR module.
    pub fn finish(self) -> String {
        self.buffer.render()
    }
}
