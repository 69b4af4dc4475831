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

//! Runtime support routines.
//!
//! Every module starts with the same prologue: the C library declarations,
//! the format strings, and the helper functions backing the `print` and
//! `printi` builtins plus the division-by-zero trap.

use super::emit::EmitHelpers;
use super::CodeGenerator;

/// Message printed before a division by zero exits the program.
pub const DIV_BY_ZERO_MESSAGE: &str = "Error division by zero";

/// The global-section prologue, one line per entry.
pub const PROLOGUE: &[&str] = &[
    "declare i32 @printf(i8*, ...)",
    "declare void @exit(i32)",
    "@.int_specifier = constant [4 x i8] c\"%d\\0A\\00\"",
    "@.str_specifier = constant [4 x i8] c\"%s\\0A\\00\"",
    "@zero_error = constant [23 x i8] c\"Error division by zero\\00\"",
    "",
    "define void @printi0(i32) {",
    "    %spec_ptr = getelementptr [4 x i8], [4 x i8]* @.int_specifier, i32 0, i32 0",
    "    call i32 (i8*, ...) @printf(i8* %spec_ptr, i32 %0)",
    "    ret void",
    "}",
    "",
    "define void @print0(i8*) {",
    "    %spec_ptr = getelementptr [4 x i8], [4 x i8]* @.str_specifier, i32 0, i32 0",
    "    call i32 (i8*, ...) @printf(i8* %spec_ptr, i8* %0)",
    "    ret void",
    "}",
    "",
    "define void @divByZero() {",
    "    %zero_error_ptr = getelementptr [23 x i8], [23 x i8]* @zero_error, i32 0, i32 0",
    "    call void @print0(i8* %zero_error_ptr)",
    "    call void @exit(i32 0)",
    "    ret void",
    "}",
    "",
];

/// Extension trait for runtime support.
pub trait RuntimeEmitter {
    /// Emit the fixed prologue into the global section.
    fn emit_prologue(&mut self);
}

impl RuntimeEmitter for CodeGenerator {
    fn emit_prologue(&mut self) {
        for line in PROLOGUE {
            self.emit_global(*line);
        }
    }
}
