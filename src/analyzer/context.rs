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

//! Analysis context for the semantic analyzer.
//!
//! This module defines the context used during semantic analysis to track
//! the current state (loop nesting, enclosing function).

use crate::ast::Type;

/// Context for semantic analysis.
///
/// Tracks how many loops enclose the current statement and the return type
/// of the function being analyzed.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    /// Number of enclosing `while` loops (for break/continue validation).
    pub loop_depth: usize,
    /// The return type of the current function.
    pub return_type: Option<Type>,
    /// The current function name (for error messages).
    pub function_name: Option<String>,
}

impl AnalysisContext {
    /// Check whether a loop encloses the current statement.
    pub fn in_loop(&self) -> bool {
        self.loop_depth > 0
    }
}
