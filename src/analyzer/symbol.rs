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

//! Symbol definitions for the semantic analyzer.
//!
//! This module defines the symbol types used in the symbol table:
//! - `Symbol`: A binding with its name, scope depth and storage offset
//! - `SymbolKind`: Variable or function
//! - `FunctionSig`: The signature and override bookkeeping of a function

use crate::ast::{mangle, signature, Type};

/// Symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The symbol name.
    pub name: String,
    /// The scope depth the symbol was declared at.
    pub depth: usize,
    /// Storage offset: frame slot for locals, `-1, -2, ...` for parameters.
    /// Unused for functions.
    pub offset: i32,
    /// Variable or function.
    pub kind: SymbolKind,
}

/// The kind of a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    /// A local variable or parameter.
    Variable(Type),
    /// A function.
    Function(FunctionSig),
}

/// A function signature with its override bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSig {
    /// Parameter types in order.
    pub params: Vec<Type>,
    /// Return type.
    pub return_type: Type,
    /// Whether the declaration carried `override`.
    pub is_override: bool,
    /// Number of same-named functions declared before this one.
    pub discriminator: usize,
}

impl Symbol {
    /// Create a variable symbol.
    pub fn variable(name: impl Into<String>, var_type: Type, depth: usize, offset: i32) -> Self {
        Self {
            name: name.into(),
            depth,
            offset,
            kind: SymbolKind::Variable(var_type),
        }
    }

    /// Create a function symbol.
    pub fn function(name: impl Into<String>, sig: FunctionSig, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            offset: 0,
            kind: SymbolKind::Function(sig),
        }
    }

    /// Check if this symbol is a function.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function(_))
    }

    /// Get the type of a variable symbol.
    pub fn var_type(&self) -> Option<Type> {
        match &self.kind {
            SymbolKind::Variable(ty) => Some(*ty),
            SymbolKind::Function(_) => None,
        }
    }

    /// Get the signature of a function symbol.
    pub fn signature(&self) -> Option<&FunctionSig> {
        match &self.kind {
            SymbolKind::Variable(_) => None,
            SymbolKind::Function(sig) => Some(sig),
        }
    }

    /// The emitted IR name of a function symbol.
    pub fn ir_name(&self) -> Option<String> {
        self.signature()
            .map(|sig| mangle(&self.name, sig.discriminator, &sig.params, sig.return_type))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SymbolKind::Variable(ty) => write!(f, "{} {} {}", self.name, ty, self.offset),
            SymbolKind::Function(sig) => write!(
                f,
                "{} {} {}",
                self.name,
                signature(&sig.params, sig.return_type),
                self.offset
            ),
        }
    }
}
