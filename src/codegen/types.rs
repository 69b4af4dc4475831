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

//! IR type names.

use crate::ast::Type;

/// The LLVM type used for values of `ty`.
pub fn llvm_type(ty: Type) -> &'static str {
    match ty {
        Type::Int => "i32",
        Type::Byte => "i8",
        Type::Bool => "i1",
        Type::String => "i8*",
        Type::Void => "void",
    }
}

/// The implicit return value of a function falling off its end.
pub fn default_return(ty: Type) -> String {
    match ty {
        Type::Void => "ret void".to_string(),
        other => format!("ret {} 0", llvm_type(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llvm_types() {
        assert_eq!(llvm_type(Type::Int), "i32");
        assert_eq!(llvm_type(Type::Byte), "i8");
        assert_eq!(llvm_type(Type::Bool), "i1");
        assert_eq!(llvm_type(Type::String), "i8*");
        assert_eq!(llvm_type(Type::Void), "void");
    }

    #[test]
    fn test_default_return() {
        assert_eq!(default_return(Type::Void), "ret void");
        assert_eq!(default_return(Type::Byte), "ret i8 0");
    }
}
