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

//! Function code generation.
//!
//! This module provides:
//! - Function headers and frames
//! - The implicit return at the end of a body
//! - Calls and returns, with byte arguments widened to int parameters

use super::conversions::ConversionEmitter;
use super::emit::EmitHelpers;
use super::labels::{LabelManager, PatchList};
use super::types::{default_return, llvm_type};
use super::variables::VariableEmitter;
use super::CodeGenerator;
use crate::ast::Type;

/// Extension trait for function emission.
pub trait FunctionEmitter {
    /// Emit a function header and set up its frame.
    fn open_function(&mut self, symbol: &str, return_type: Type, params: &[Type]);

    /// Close the current function.
    ///
    /// Patches the body's pending exits to a final label, emits the implicit
    /// return and the closing brace, and sizes the frame to `slots`.
    fn close_function(&mut self, return_type: Type, body_next: PatchList, slots: usize);

    /// Emit a call and return the result operand (`None` for void).
    ///
    /// Each argument is `(operand, type)`; arguments are widened to the
    /// matching parameter type.
    fn emit_call(
        &mut self,
        symbol: &str,
        return_type: Type,
        params: &[Type],
        args: &[(String, Type)],
    ) -> Option<String>;

    /// Emit a return, widening the value to the function's return type.
    fn emit_return(&mut self, value: Option<(&str, Type)>, return_type: Type);
}

impl FunctionEmitter for CodeGenerator {
    fn open_function(&mut self, symbol: &str, return_type: Type, params: &[Type]) {
        let formals: Vec<String> = params
            .iter()
            .enumerate()
            .map(|(index, ty)| format!("{} %arg{}", llvm_type(*ty), index + 1))
            .collect();
        self.buffer.emit_raw(format!(
            "define {} {}({}) {{",
            llvm_type(return_type),
            symbol,
            formals.join(", ")
        ));
        self.open_frame(params);
    }

    fn close_function(&mut self, return_type: Type, body_next: PatchList, slots: usize) {
        let end = self.marker();
        self.emit(default_return(return_type));
        self.buffer.emit_raw("}");
        self.bpatch(body_next, &end);
        self.close_frame(slots);
    }

    fn emit_call(
        &mut self,
        symbol: &str,
        return_type: Type,
        params: &[Type],
        args: &[(String, Type)],
    ) -> Option<String> {
        let mut actuals = Vec::with_capacity(args.len());
        for ((value, ty), param) in args.iter().zip(params) {
            let value = self.coerce(value, *ty, *param);
            actuals.push(format!("{} {}", llvm_type(*param), value));
        }

        let call = format!(
            "call {} {}({})",
            llvm_type(return_type),
            symbol,
            actuals.join(", ")
        );
        if return_type == Type::Void {
            self.emit(call);
            None
        } else {
            Some(self.emit_assign(call))
        }
    }

    fn emit_return(&mut self, value: Option<(&str, Type)>, return_type: Type) {
        match value {
            None => {
                self.emit("ret void");
            }
            Some((operand, ty)) => {
                let operand = self.coerce(operand, ty, return_type);
                self.emit(format!("ret {} {}", llvm_type(return_type), operand));
            }
        }
    }
}
