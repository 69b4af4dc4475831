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

//! Symbol table for the semantic analyzer.
//!
//! All bindings live in one arena in declaration order; each active scope
//! is a frame recording where its bindings start. Declaring pushes onto the
//! arena and closing a scope truncates it, so the most recent binding of a
//! name is always found by scanning from the end.

use super::scope::ScopeFrame;
use super::symbol::{FunctionSig, Symbol};
use crate::ast::Type;
use tracing::warn;

/// The symbol table for semantic analysis.
#[derive(Debug)]
pub struct SymbolTable {
    /// All visible bindings, oldest first.
    symbols: Vec<Symbol>,
    /// The scope stack (innermost scope last). Never empty.
    frames: Vec<ScopeFrame>,
    /// Largest local slot count reached since the last reset.
    high_water: i32,
}

impl SymbolTable {
    /// Create a new symbol table with a global scope.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            frames: vec![ScopeFrame::default()],
            high_water: 0,
        }
    }

    /// Get the current scope depth (0 for the global scope).
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    fn top(&mut self) -> &mut ScopeFrame {
        let index = self.frames.len() - 1;
        &mut self.frames[index]
    }

    /// Push a new scope that continues the current slot numbering.
    pub fn enter_scope(&mut self) {
        let next_offset = self.top().next_offset;
        self.frames
            .push(ScopeFrame::new(self.symbols.len(), next_offset));
    }

    /// Pop the current scope, dropping its bindings.
    ///
    /// The global scope is never popped; attempting it returns `false`.
    pub fn exit_scope(&mut self) -> bool {
        if self.frames.len() == 1 {
            warn!("refusing to exit the global scope");
            return false;
        }
        if let Some(frame) = self.frames.pop() {
            self.symbols.truncate(frame.start);
        }
        true
    }

    /// Bind a local variable in the current scope and return its slot.
    pub fn add_variable(&mut self, name: &str, var_type: Type) -> i32 {
        let depth = self.depth();
        let offset = self.top().allocate();
        self.high_water = self.high_water.max(offset + 1);
        self.symbols
            .push(Symbol::variable(name, var_type, depth, offset));
        offset
    }

    /// Bind a parameter with a caller-chosen (negative) offset.
    pub fn add_parameter(&mut self, name: &str, var_type: Type, offset: i32) {
        let depth = self.depth();
        self.symbols
            .push(Symbol::variable(name, var_type, depth, offset));
    }

    /// Bind a function in the current scope.
    pub fn add_function(&mut self, name: &str, sig: FunctionSig) {
        let depth = self.depth();
        self.symbols.push(Symbol::function(name, sig, depth));
    }

    /// Find the most recent visible variable with this name.
    pub fn lookup_variable(&self, name: &str) -> Option<&Symbol> {
        self.symbols
            .iter()
            .rev()
            .find(|s| !s.is_function() && s.name == name)
    }

    /// Every function with this name whose parameters accept `arg_types`.
    pub fn lookup_callable(&self, name: &str, arg_types: &[Type]) -> Vec<&Symbol> {
        self.symbols
            .iter()
            .filter(|s| s.name == name)
            .filter(|s| {
                s.signature()
                    .is_some_and(|sig| Type::args_compatible(&sig.params, arg_types))
            })
            .collect()
    }

    /// Every function with this name, in declaration order.
    pub fn lookup_all_by_name(&self, name: &str) -> Vec<&Symbol> {
        self.symbols
            .iter()
            .filter(|s| s.is_function() && s.name == name)
            .collect()
    }

    /// The bindings of the innermost scope in declaration order.
    pub fn top_scope(&self) -> &[Symbol] {
        let start = self.frames.last().map_or(0, |f| f.start);
        &self.symbols[start..]
    }

    /// Largest number of local slots in use since the last reset.
    pub fn high_water(&self) -> usize {
        self.high_water as usize
    }

    /// Start tracking slot usage for a new function.
    pub fn reset_high_water(&mut self) {
        self.high_water = 0;
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(params: Vec<Type>, is_override: bool, discriminator: usize) -> FunctionSig {
        FunctionSig {
            params,
            return_type: Type::Void,
            is_override,
            discriminator,
        }
    }

    #[test]
    fn test_new_table_is_global() {
        let table = SymbolTable::new();
        assert_eq!(table.depth(), 0);
        assert!(table.top_scope().is_empty());
    }

    #[test]
    fn test_exit_global_scope_refused() {
        let mut table = SymbolTable::new();
        table.add_function("f", sig(vec![], false, 0));
        assert!(!table.exit_scope());
        assert_eq!(table.depth(), 0);
        assert_eq!(table.lookup_all_by_name("f").len(), 1);
    }

    #[test]
    fn test_offsets_continue_into_nested_scope() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        assert_eq!(table.add_variable("a", Type::Int), 0);
        table.enter_scope();
        assert_eq!(table.add_variable("b", Type::Int), 1);
        table.exit_scope();
        // sibling scope reuses the slot of `b`
        table.enter_scope();
        assert_eq!(table.add_variable("c", Type::Int), 1);
        assert_eq!(table.high_water(), 2);
    }

    #[test]
    fn test_parameters_do_not_take_slots() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.add_parameter("p", Type::Int, -1);
        assert_eq!(table.add_variable("x", Type::Int), 0);
        assert_eq!(table.lookup_variable("p").map(|s| s.offset), Some(-1));
    }

    #[test]
    fn test_shadow_and_restore() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.add_variable("x", Type::Int);
        table.enter_scope();
        table.add_variable("x", Type::Bool);
        assert_eq!(
            table.lookup_variable("x").and_then(Symbol::var_type),
            Some(Type::Bool)
        );
        assert!(table.exit_scope());
        assert_eq!(
            table.lookup_variable("x").and_then(Symbol::var_type),
            Some(Type::Int)
        );
    }

    #[test]
    fn test_lookup_variable_skips_functions() {
        let mut table = SymbolTable::new();
        table.add_function("f", sig(vec![], false, 0));
        assert!(table.lookup_variable("f").is_none());
    }

    #[test]
    fn test_lookup_callable_widens_arguments() {
        let mut table = SymbolTable::new();
        table.add_function("f", sig(vec![Type::Int], false, 0));
        table.add_function("f", sig(vec![Type::Byte], true, 1));
        table.add_function("g", sig(vec![Type::Int], false, 0));

        assert_eq!(table.lookup_callable("f", &[Type::Int]).len(), 1);
        assert_eq!(table.lookup_callable("f", &[Type::Byte]).len(), 2);
        assert!(table.lookup_callable("f", &[Type::Bool]).is_empty());
        assert_eq!(table.lookup_all_by_name("f").len(), 2);
    }

    #[test]
    fn test_top_scope_lists_innermost_bindings() {
        let mut table = SymbolTable::new();
        table.add_function("f", sig(vec![], false, 0));
        table.enter_scope();
        table.add_variable("a", Type::Int);
        table.add_variable("b", Type::Byte);
        let names: Vec<&str> = table.top_scope().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_reset_high_water() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.add_variable("a", Type::Int);
        table.exit_scope();
        table.reset_high_water();
        assert_eq!(table.high_water(), 0);
    }
}
