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

//! String constant generation.
//!
//! Each string literal becomes a private global byte array `@.strN`
//! terminated by a NUL byte; the expression value is a pointer to its
//! first element.

use super::emit::EmitHelpers;
use super::CodeGenerator;

/// Extension trait for string constants.
pub trait StringEmitter {
    /// Pool `value` as a global constant and return an `i8*` operand to it.
    fn emit_string(&mut self, value: &str) -> String;
}

/// Encode bytes for an LLVM `c"..."` literal, including the trailing NUL.
pub fn encode_c_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 3);
    for byte in value.bytes() {
        match byte {
            b'"' | b'\\' => out.push_str(&format!("\\{:02X}", byte)),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{:02X}", byte)),
        }
    }
    out.push_str("\\00");
    out
}

impl StringEmitter for CodeGenerator {
    fn emit_string(&mut self, value: &str) -> String {
        let name = format!("@.str{}", self.string_counter);
        self.string_counter += 1;

        let array = format!("[{} x i8]", value.len() + 1);
        self.emit_global(format!(
            "{} = internal constant {} c\"{}\"",
            name,
            array,
            encode_c_string(value)
        ));
        self.emit_assign(format!(
            "getelementptr {}, {}* {}, i32 0, i32 0",
            array, array, name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_plain() {
        assert_eq!(encode_c_string("hello"), "hello\\00");
    }

    #[test]
    fn test_encode_escapes() {
        assert_eq!(encode_c_string("a\"b\\c\n"), "a\\22b\\5Cc\\0A\\00");
        assert_eq!(encode_c_string("\t"), "\\09\\00");
    }

    #[test]
    fn test_encode_utf8_bytes() {
        assert_eq!(encode_c_string("é"), "\\C3\\A9\\00");
    }

    #[test]
    fn test_emit_string() {
        let mut gen = CodeGenerator::new();
        assert_eq!(gen.emit_string("hi"), "%t0");
        assert_eq!(gen.emit_string(""), "%t1");
        assert_eq!(
            gen.finish(),
            "@.str0 = internal constant [3 x i8] c\"hi\\00\"\n\
             @.str1 = internal constant [1 x i8] c\"\\00\"\n\
             \n    %t0 = getelementptr [3 x i8], [3 x i8]* @.str0, i32 0, i32 0\n    \
             %t1 = getelementptr [1 x i8], [1 x i8]* @.str1, i32 0, i32 0\n"
        );
    }
}
