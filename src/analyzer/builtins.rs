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

//! Built-in function registration for the semantic analyzer.
//!
//! This module defines the built-in functions available in FanC. Their
//! bodies live in the runtime prologue; here they only get bindings so
//! calls resolve like calls to user functions.

use super::symbol::FunctionSig;
use super::Analyzer;
use crate::ast::Type;

/// Trait for registering built-in functions.
pub trait BuiltinRegistry {
    /// Register all built-in functions in the global scope.
    fn register_builtins(&mut self);

    /// Define a single built-in function returning `void`.
    fn define_builtin(&mut self, name: &str, params: Vec<Type>);
}

impl BuiltinRegistry for Analyzer {
    fn register_builtins(&mut self) {
        // print(text) - print a string and a newline
        self.define_builtin("print", vec![Type::String]);

        // printi(value) - print an integer and a newline
        self.define_builtin("printi", vec![Type::Int]);
    }

    fn define_builtin(&mut self, name: &str, params: Vec<Type>) {
        let sig = FunctionSig {
            params,
            return_type: Type::Void,
            is_override: false,
            discriminator: 0,
        };
        self.symbols.add_function(name, sig);
    }
}
