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

//! Semantic analyzer module for the FanC compiler.
//!
//! This module performs semantic analysis on the AST and drives IR
//! generation in the same pass:
//! - Symbol resolution (variables, functions, overloads)
//! - Type checking
//! - Error detection (the first error ends compilation)
//! - Control flow lowering by backpatching
//!
//! Every construct is handled in the order a bottom-up parser would reduce
//! it: children first, then the construct itself, with labels emitted at
//! the points where the grammar places its markers.
//!
//! # Module Structure
//!
//! - `builtins` - Built-in function registration (BuiltinRegistry trait)
//! - `context` - Analysis context (loop nesting, enclosing function)
//! - `control_flow` - If, while, break, continue and return (ControlFlowAnalyzer trait)
//! - `expressions` - Expression analysis (ExpressionAnalyzer trait)
//! - `functions` - Declarations, calls and the entry point (FunctionAnalyzer trait)
//! - `operators` - Operator analysis (OperatorAnalyzer trait)
//! - `scope` - Scope frames
//! - `statements` - Statement analysis (StatementAnalyzer trait)
//! - `symbol` - Symbol definitions
//! - `symbol_table` - The symbol arena
//! - `type_check` - Type checking utilities (TypeChecker trait)

mod builtins;
mod context;
mod control_flow;
mod expressions;
mod functions;
mod operators;
mod scope;
mod statements;
mod symbol;
mod symbol_table;
mod type_check;

pub use builtins::BuiltinRegistry;
pub use context::AnalysisContext;
pub use control_flow::ControlFlowAnalyzer;
pub use expressions::ExpressionAnalyzer;
pub use functions::{FunctionAnalyzer, ENTRY_POINT};
pub use operators::OperatorAnalyzer;
pub use scope::ScopeFrame;
pub use statements::StatementAnalyzer;
pub use symbol::{FunctionSig, Symbol, SymbolKind};
pub use symbol_table::SymbolTable;
pub use type_check::{TypeChecker, BYTE_MAX};

use crate::ast::Program;
use crate::codegen::{CodeGenerator, RuntimeEmitter};
use crate::error::Result;
use tracing::trace;

/// The semantic analyzer.
///
/// Owns all per-compilation state: the symbol table, the code generator
/// with its name counters, and the analysis context.
#[derive(Debug)]
pub struct Analyzer {
    /// The symbol table.
    pub symbols: SymbolTable,
    /// The IR generator.
    codegen: CodeGenerator,
    /// Analysis context.
    context: AnalysisContext,
}

impl Analyzer {
    /// Create a new analyzer with the builtins bound and the prologue emitted.
    pub fn new() -> Self {
        let mut analyzer = Self {
            symbols: SymbolTable::new(),
            codegen: CodeGenerator::new(),
            context: AnalysisContext::default(),
        };
        analyzer.register_builtins();
        analyzer.codegen.emit_prologue();
        analyzer
    }

    /// Analyze a program, generating IR for each function in source order.
    pub fn analyze(&mut self, program: &Program) -> Result<()> {
        for func in &program.functions {
            self.analyze_function(func)?;
        }
        self.check_entry_point()
    }

    /// Render the generated IR module.
    pub fn into_ir(self) -> String {
        self.codegen.finish()
    }

    /// Close the innermost scope, logging the bindings it drops.
    fn leave_scope(&mut self) {
        for symbol in self.symbols.top_scope() {
            trace!(depth = symbol.depth, "{}", symbol);
        }
        let closed = self.symbols.exit_scope();
        debug_assert!(closed, "unbalanced scope exit in the analyzer");
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a program and return its IR module.
pub fn analyze(program: &Program) -> Result<String> {
    let mut analyzer = Analyzer::new();
    analyzer.analyze(program)?;
    Ok(analyzer.into_ir())
}
