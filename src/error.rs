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

//! Error types for the FanC compiler.
//!
//! This module defines all error types used throughout the compiler,
//! including lexical, syntax, and semantic errors. Every error is fatal:
//! the first one ends the compilation run.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io;
use std::ops::Range;
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Error codes for the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001-E030)
    InvalidCharacter,
    UnterminatedString,
    InvalidEscapeSequence,
    IntegerTooLarge,

    // Syntax errors (E100-E145)
    UnexpectedToken,
    UnexpectedEndOfFile,
    ExpectedExpression,
    ExpectedStatement,
    ExpectedIdentifier,
    ExpectedType,
    BreakOutsideLoop,
    ContinueOutsideLoop,

    // Semantic errors (E200-E240)
    Undeclared,
    AlreadyDeclared,
    TypeMismatch,
    UndefinedFunction,
    NoMatchingOverload,
    AmbiguousCall,
    MainRedefinitionForbidden,
    OverrideRequired,
    OverrideOfNonOverridable,
    ByteOverflow,
    EntryPointMissing,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::InvalidCharacter => "E001",
            ErrorCode::UnterminatedString => "E010",
            ErrorCode::InvalidEscapeSequence => "E012",
            ErrorCode::IntegerTooLarge => "E021",

            // Syntax errors
            ErrorCode::UnexpectedToken => "E100",
            ErrorCode::UnexpectedEndOfFile => "E101",
            ErrorCode::ExpectedExpression => "E103",
            ErrorCode::ExpectedStatement => "E104",
            ErrorCode::ExpectedIdentifier => "E105",
            ErrorCode::ExpectedType => "E106",
            ErrorCode::BreakOutsideLoop => "E144",
            ErrorCode::ContinueOutsideLoop => "E145",

            // Semantic errors
            ErrorCode::Undeclared => "E200",
            ErrorCode::AlreadyDeclared => "E201",
            ErrorCode::TypeMismatch => "E210",
            ErrorCode::UndefinedFunction => "E220",
            ErrorCode::NoMatchingOverload => "E222",
            ErrorCode::AmbiguousCall => "E223",
            ErrorCode::MainRedefinitionForbidden => "E225",
            ErrorCode::OverrideRequired => "E226",
            ErrorCode::OverrideOfNonOverridable => "E227",
            ErrorCode::ByteOverflow => "E232",
            ErrorCode::EntryPointMissing => "E240",
        }
    }

    /// Check if this error is reported by the semantic layer.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            ErrorCode::BreakOutsideLoop | ErrorCode::ContinueOutsideLoop
        ) || self.code().starts_with("E2")
    }
}

/// A compiler error with source location.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// The 1-based line on which the offending construct starts.
    pub fn line(&self, source: &str) -> usize {
        SourceLocation::from_offset(source, self.span.start).line
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[last_newline..].chars().count() + 1;

        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[last_newline..line_end].to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// Format an error with source context.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let loc = SourceLocation::from_offset(source, error.span.start);
    let filename = filename.unwrap_or("<input>");

    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));
    output.push_str(&format!("  --> {}:{}:{}\n", filename, loc.line, loc.column));

    let line_num_width = loc.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        loc.line,
        loc.line_content,
        width = line_num_width
    ));

    // Underline the error span, clipped to the line
    let underline_start = loc.column - 1;
    let underline_len = error
        .span
        .len()
        .max(1)
        .min(loc.line_content.len().saturating_sub(underline_start).max(1));
    output.push_str(&format!(
        "{:>width$} | {:>start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        start = underline_start
    ));

    if let Some(hint) = &error.hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}

/// Write an `ariadne` report for an error.
pub fn report_error<W: io::Write>(
    error: &CompileError,
    source: &str,
    color: bool,
    out: W,
) -> io::Result<()> {
    let mut report = Report::build(ReportKind::Error, (), error.span.start)
        .with_code(error.code_str())
        .with_message(&error.message)
        .with_config(Config::default().with_color(color))
        .with_label(
            Label::new(Range::from(error.span))
                .with_message(&error.message)
                .with_color(Color::Red),
        );

    if let Some(hint) = &error.hint {
        report = report.with_help(hint);
    }

    report.finish().write(Source::from(source), out)
}
