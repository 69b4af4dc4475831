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

//! Variable storage for code generation.
//!
//! Every function owns two `i32` arrays on the stack: the local frame,
//! indexed by a variable's non-negative offset, and the argument spill
//! area, indexed by `-offset - 1` for parameters. Narrow values are widened
//! before a store and truncated after a load.

use super::conversions::ConversionEmitter;
use super::emit::EmitHelpers;
use super::{CodeGenerator, Frame};
use crate::ast::Type;
use tracing::debug;

/// Extension trait for variable storage.
pub trait VariableEmitter {
    /// Allocate the frame of a new function and spill its arguments.
    fn open_frame(&mut self, params: &[Type]);

    /// Size the current frame to `slots` locals (at least one) and close it.
    fn close_frame(&mut self, slots: usize);

    /// Compute a pointer to the slot of the variable at `offset`.
    fn slot_pointer(&mut self, offset: i32) -> String;

    /// Load the variable at `offset` as a value of type `ty`.
    fn emit_load(&mut self, offset: i32, ty: Type) -> String;

    /// Store `value` of type `ty` into the variable at `offset`.
    fn emit_store(&mut self, offset: i32, ty: Type, value: &str);
}

impl VariableEmitter for CodeGenerator {
    fn open_frame(&mut self, params: &[Type]) {
        let locals = self.fresh_temp();
        let address = self.buffer.emit_frame(locals.clone());

        let args = if params.is_empty() {
            None
        } else {
            let area = self.emit_assign(format!("alloca i32, i32 {}", params.len()));
            Some(area)
        };
        self.frame = Some(Frame {
            locals,
            address,
            args,
        });

        for (index, ty) in params.iter().enumerate() {
            let value = self.widen_to_i32(&format!("%arg{}", index + 1), *ty);
            let offset = -(index as i32) - 1;
            let ptr = self.slot_pointer(offset);
            self.emit(format!("store i32 {}, i32* {}", value, ptr));
        }
    }

    fn close_frame(&mut self, slots: usize) {
        let Some(frame) = self.frame.take() else {
            panic!("close_frame called outside a function");
        };
        let slots = slots.max(1);
        debug!(slots, "sized stack frame");
        self.buffer.set_frame_slots(frame.address, slots);
    }

    fn slot_pointer(&mut self, offset: i32) -> String {
        let Some(frame) = &self.frame else {
            panic!("variable access outside a function");
        };
        let (base, index) = if offset >= 0 {
            (frame.locals.clone(), offset)
        } else {
            match &frame.args {
                Some(args) => (args.clone(), -offset - 1),
                None => panic!("parameter offset {} in a function without parameters", offset),
            }
        };
        self.emit_assign(format!("getelementptr i32, i32* {}, i32 {}", base, index))
    }

    fn emit_load(&mut self, offset: i32, ty: Type) -> String {
        let ptr = self.slot_pointer(offset);
        let raw = self.emit_assign(format!("load i32, i32* {}", ptr));
        self.narrow_from_i32(&raw, ty)
    }

    fn emit_store(&mut self, offset: i32, ty: Type, value: &str) {
        let ptr = self.slot_pointer(offset);
        let wide = self.widen_to_i32(value, ty);
        self.emit(format!("store i32 {}, i32* {}", wide, ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_frame_without_params() {
        let mut gen = CodeGenerator::new();
        gen.open_frame(&[]);
        gen.close_frame(0);
        assert_eq!(gen.finish(), "    %t0 = alloca i32, i32 1\n");
    }

    #[test]
    fn test_params_are_spilled() {
        let mut gen = CodeGenerator::new();
        gen.open_frame(&[Type::Int, Type::Byte]);
        gen.close_frame(2);
        assert_eq!(
            gen.finish(),
            "    %t0 = alloca i32, i32 2\n\
             \x20   %t1 = alloca i32, i32 2\n\
             \x20   %t2 = getelementptr i32, i32* %t1, i32 0\n\
             \x20   store i32 %arg1, i32* %t2\n\
             \x20   %t3 = zext i8 %arg2 to i32\n\
             \x20   %t4 = getelementptr i32, i32* %t1, i32 1\n\
             \x20   store i32 %t3, i32* %t4\n"
        );
    }

    #[test]
    fn test_load_and_store_locals() {
        let mut gen = CodeGenerator::new();
        gen.open_frame(&[]);
        gen.emit_store(3, Type::Bool, "%v");
        let loaded = gen.emit_load(3, Type::Bool);
        gen.close_frame(4);
        assert_eq!(loaded, "%t5");
        assert_eq!(
            gen.finish(),
            "    %t0 = alloca i32, i32 4\n\
             \x20   %t1 = getelementptr i32, i32* %t0, i32 3\n\
             \x20   %t2 = zext i1 %v to i32\n\
             \x20   store i32 %t2, i32* %t1\n\
             \x20   %t3 = getelementptr i32, i32* %t0, i32 3\n\
             \x20   %t4 = load i32, i32* %t3\n\
             \x20   %t5 = trunc i32 %t4 to i1\n"
        );
    }

    #[test]
    fn test_parameter_access_uses_spill_area() {
        let mut gen = CodeGenerator::new();
        gen.open_frame(&[Type::Int]);
        let ptr = gen.slot_pointer(-1);
        gen.close_frame(1);
        assert_eq!(ptr, "%t3");
        assert!(gen
            .finish()
            .contains("%t3 = getelementptr i32, i32* %t1, i32 0"));
    }

    #[test]
    #[should_panic(expected = "outside a function")]
    fn test_access_without_frame_panics() {
        let mut gen = CodeGenerator::new();
        gen.slot_pointer(0);
    }
}
