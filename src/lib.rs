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

//! FanC Compiler Library
//!
//! This library provides all the components needed to compile FanC source
//! code into textual LLVM IR in a single pass.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - Parsing tokens into an AST
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`analyzer`] - Semantic analysis driving IR generation
//! - [`codegen`] - IR emission and backpatching
//!
//! # Example
//!
//! ```no_run
//! use fanc::{analyzer, lexer, parser};
//!
//! fn compile(source: &str) -> Result<String, fanc::CompileError> {
//!     // Tokenize
//!     let tokens = lexer::tokenize(source)?;
//!
//!     // Parse
//!     let ast = parser::parse(&tokens)?;
//!
//!     // Analyze and generate
//!     analyzer::analyze(&ast)
//! }
//! ```

pub mod analyzer;
pub mod ast;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use ast::{Program, Type};
pub use error::{format_error, report_error, CompileError, ErrorCode, Result, SourceLocation, Span};
pub use lexer::Token;

/// The version of the FanC compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "FanC";

/// Compile source code to an LLVM IR module.
///
/// This is the main entry point for compiling FanC source code.
/// It performs all compilation stages: lexing, parsing, and the combined
/// analysis and code generation pass.
///
/// # Arguments
///
/// * `source` - The source code to compile
///
/// # Returns
///
/// Returns the IR module text, or the first error found.
///
/// # Example
///
/// ```
/// let source = "void main() { print(\"Hello, World!\"); }";
///
/// match fanc::compile(source) {
///     Ok(ir) => assert!(ir.contains("define void @main()")),
///     Err(e) => eprintln!("Compilation error: {}", e),
/// }
/// ```
pub fn compile(source: &str) -> Result<String> {
    // Tokenize
    let tokens = lexer::tokenize(source)?;

    // Parse
    let ast = parser::parse(&tokens)?;

    // Analyze and generate
    analyzer::analyze(&ast)
}

/// Run every check of [`compile`] without keeping the output.
pub fn check(source: &str) -> Result<()> {
    compile(source).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "FanC");
    }

    #[test]
    fn test_check_reports_first_error() {
        assert!(check("void main() { }").is_ok());
        let err = check("void main() { int x = true; }").unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_syntax_errors_come_before_semantics() {
        let err = compile("void main() { x = 1 }").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
    }
}
