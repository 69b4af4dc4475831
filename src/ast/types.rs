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

//! The FanC type model.
//!
//! The domain is closed: `string`, `int`, `byte`, `bool` and `void`. The only
//! implicit conversion is widening a `byte` to an `int`; everything here is
//! a pure function over types and never reports errors itself.

/// A type in the FanC language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Text string (literals only).
    String,
    /// 32-bit signed integer.
    Int,
    /// 8-bit unsigned integer (0-255).
    Byte,
    /// Boolean value.
    Bool,
    /// No value, only valid as a function return type.
    Void,
}

impl Type {
    /// Check if this is a numeric type (`int` or `byte`).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Byte)
    }

    /// Result type of binary arithmetic, `None` if an operand is not numeric.
    pub fn widen(left: Type, right: Type) -> Option<Type> {
        if !left.is_numeric() || !right.is_numeric() {
            return None;
        }
        if left == Type::Int || right == Type::Int {
            Some(Type::Int)
        } else {
            Some(Type::Byte)
        }
    }

    /// Check if a value of this type can be stored into `target`.
    pub fn is_assignable_to(&self, target: Type) -> bool {
        *self == target || (target == Type::Int && *self == Type::Byte)
    }

    /// Check if call-site argument types satisfy a parameter list.
    pub fn args_compatible(expected: &[Type], actual: &[Type]) -> bool {
        expected.len() == actual.len()
            && expected
                .iter()
                .zip(actual)
                .all(|(param, arg)| arg.is_assignable_to(*param))
    }

    /// Check if a variable or parameter may have this type.
    pub fn is_storable(&self) -> bool {
        matches!(self, Type::Int | Type::Byte | Type::Bool)
    }

    /// Get a human-readable name for this type.
    pub fn name(&self) -> &'static str {
        match self {
            Type::String => "string",
            Type::Int => "int",
            Type::Byte => "byte",
            Type::Bool => "bool",
            Type::Void => "void",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Render a function signature such as `(int,byte)->void`.
pub fn signature(params: &[Type], return_type: Type) -> String {
    let params: Vec<&str> = params.iter().map(Type::name).collect();
    format!("({})->{}", params.join(","), return_type)
}

/// The emitted symbol of a function.
///
/// The parameterless void `main` keeps its name; every other function is
/// suffixed with its discriminator so overloads stay distinct.
pub fn mangle(name: &str, discriminator: usize, params: &[Type], return_type: Type) -> String {
    if name == "main" && params.is_empty() && return_type == Type::Void {
        "@main".to_string()
    } else {
        format!("@{}{}", name, discriminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Type; 5] = [Type::String, Type::Int, Type::Byte, Type::Bool, Type::Void];

    #[test]
    fn test_is_numeric() {
        assert!(Type::Int.is_numeric());
        assert!(Type::Byte.is_numeric());
        assert!(!Type::Bool.is_numeric());
        assert!(!Type::String.is_numeric());
        assert!(!Type::Void.is_numeric());
    }

    #[test]
    fn test_widen() {
        assert_eq!(Type::widen(Type::Byte, Type::Byte), Some(Type::Byte));
        assert_eq!(Type::widen(Type::Byte, Type::Int), Some(Type::Int));
        assert_eq!(Type::widen(Type::Int, Type::Byte), Some(Type::Int));
        assert_eq!(Type::widen(Type::Int, Type::Int), Some(Type::Int));
        assert_eq!(Type::widen(Type::Bool, Type::Int), None);
        assert_eq!(Type::widen(Type::Byte, Type::String), None);
    }

    #[test]
    fn test_assignability_table() {
        for target in ALL {
            for value in ALL {
                let expected = target == value || (target == Type::Int && value == Type::Byte);
                assert_eq!(value.is_assignable_to(target), expected, "{value} -> {target}");
            }
        }
        assert!(!Type::Int.is_assignable_to(Type::Byte));
    }

    #[test]
    fn test_args_compatible() {
        assert!(Type::args_compatible(&[], &[]));
        assert!(Type::args_compatible(&[Type::Int], &[Type::Byte]));
        assert!(!Type::args_compatible(&[Type::Byte], &[Type::Int]));
        assert!(!Type::args_compatible(&[Type::Int], &[]));
        assert!(!Type::args_compatible(&[Type::Int, Type::Bool], &[Type::Int, Type::Int]));
    }

    #[test]
    fn test_signature() {
        assert_eq!(signature(&[Type::Int, Type::Byte], Type::Void), "(int,byte)->void");
        assert_eq!(signature(&[], Type::Bool), "()->bool");
    }

    #[test]
    fn test_mangle() {
        assert_eq!(mangle("main", 0, &[], Type::Void), "@main");
        assert_eq!(mangle("main", 0, &[], Type::Int), "@main0");
        assert_eq!(mangle("main", 1, &[Type::Int], Type::Void), "@main1");
        assert_eq!(mangle("f", 2, &[Type::Byte], Type::Bool), "@f2");
    }
}
