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

//! Value conversions for code generation.
//!
//! This module provides:
//! - Widening of byte and bool values to the 32-bit slot width
//! - Narrowing of loaded slots back to their declared width
//! - Implicit byte-to-int coercion
//! - Explicit numeric casts

use super::emit::EmitHelpers;
use super::types::llvm_type;
use super::CodeGenerator;
use crate::ast::Type;

/// Extension trait for value conversions.
pub trait ConversionEmitter {
    /// Zero-extend a value to `i32` (identity for `int`).
    fn widen_to_i32(&mut self, value: &str, ty: Type) -> String;

    /// Truncate an `i32` slot value to the width of `ty` (identity for `int`).
    fn narrow_from_i32(&mut self, value: &str, ty: Type) -> String;

    /// Apply the implicit conversion from `from` to `to` (byte to int only).
    fn coerce(&mut self, value: &str, from: Type, to: Type) -> String;

    /// Emit an explicit numeric cast into a fresh temporary.
    fn emit_cast(&mut self, value: &str, from: Type, to: Type) -> String;
}

impl ConversionEmitter for CodeGenerator {
    fn widen_to_i32(&mut self, value: &str, ty: Type) -> String {
        match ty {
            Type::Byte | Type::Bool => {
                self.emit_assign(format!("zext {} {} to i32", llvm_type(ty), value))
            }
            _ => value.to_string(),
        }
    }

    fn narrow_from_i32(&mut self, value: &str, ty: Type) -> String {
        match ty {
            Type::Byte | Type::Bool => {
                self.emit_assign(format!("trunc i32 {} to {}", value, llvm_type(ty)))
            }
            _ => value.to_string(),
        }
    }

    fn coerce(&mut self, value: &str, from: Type, to: Type) -> String {
        if from == Type::Byte && to == Type::Int {
            self.emit_assign(format!("zext i8 {} to i32", value))
        } else {
            value.to_string()
        }
    }

    fn emit_cast(&mut self, value: &str, from: Type, to: Type) -> String {
        match (from, to) {
            (Type::Int, Type::Byte) => self.emit_assign(format!("trunc i32 {} to i8", value)),
            (Type::Byte, Type::Int) => self.emit_assign(format!("zext i8 {} to i32", value)),
            (_, to) => self.emit_assign(format!("add {} 0, {}", llvm_type(to), value)),
        }
    }
}
