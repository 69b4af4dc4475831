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

//! Token definitions for the FanC lexer.

use logos::{Lexer, Logos};

/// Lexical failures, mapped to error codes by [`super::tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    InvalidCharacter,
    /// A string literal without its closing quote.
    UnterminatedString,
    /// An unknown `\x` escape inside a string literal.
    InvalidEscapeSequence,
    /// A numeric literal that does not fit its type.
    IntegerTooLarge,
}

/// A token in the FanC language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // Literals
    /// Integer literal.
    #[regex(r"0|[1-9][0-9]*", parse_integer)]
    Integer(u64),
    /// Byte literal (`42b`); the value is range-checked later.
    #[regex(r"(0|[1-9][0-9]*)b", parse_byte)]
    ByteLiteral(u64),
    /// String literal with escapes decoded.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    String(String),
    /// A string literal missing its closing quote.
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,
    /// Identifier (variable or function name).
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Type keywords
    /// `void`
    #[token("void")]
    Void,
    /// `int`
    #[token("int")]
    Int,
    /// `byte`
    #[token("byte")]
    Byte,
    /// `bool`
    #[token("bool")]
    Bool,
    /// `string`
    #[token("string")]
    StringType,

    // Declaration keywords
    /// `override`
    #[token("override")]
    Override,

    // Control flow keywords
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,

    // Boolean literals
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,

    // Logical operators
    /// `and` / `&&`
    #[token("and")]
    #[token("&&")]
    And,
    /// `or` / `||`
    #[token("or")]
    #[token("||")]
    Or,
    /// `not` / `!`
    #[token("not")]
    #[token("!")]
    Not,

    // Arithmetic operators
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    // Relational operators
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    // Punctuation
    /// `=`
    #[token("=")]
    Equal,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
}

fn parse_integer(lex: &mut Lexer<Token>) -> Result<u64, LexError> {
    let value: u64 = lex.slice().parse().map_err(|_| LexError::IntegerTooLarge)?;
    if value > i32::MAX as u64 {
        return Err(LexError::IntegerTooLarge);
    }
    Ok(value)
}

// Saturates so oversized literals still reach the byte range check.
fn parse_byte(lex: &mut Lexer<Token>) -> u64 {
    let digits = lex.slice().trim_end_matches('b');
    digits.parse().unwrap_or(u64::MAX)
}

fn parse_string(lex: &mut Lexer<Token>) -> Result<String, LexError> {
    let raw = lex.slice();
    let inner = &raw[1..raw.len() - 1];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        let escaped = match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('"') => '"',
            Some('\\') => '\\',
            _ => return Err(LexError::InvalidEscapeSequence),
        };
        value.push(escaped);
    }

    Ok(value)
}

impl Token {
    /// Check if this token starts a type.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Token::Int | Token::Byte | Token::Bool | Token::StringType
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{}", n),
            Token::ByteLiteral(n) => write!(f, "{}b", n),
            Token::String(s) => write!(f, "{:?}", s),
            Token::UnterminatedString => write!(f, "unterminated string"),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Void => write!(f, "void"),
            Token::Int => write!(f, "int"),
            Token::Byte => write!(f, "byte"),
            Token::Bool => write!(f, "bool"),
            Token::StringType => write!(f, "string"),
            Token::Override => write!(f, "override"),
            Token::Return => write!(f, "return"),
            Token::If => write!(f, "if"),
            Token::Else => write!(f, "else"),
            Token::While => write!(f, "while"),
            Token::Break => write!(f, "break"),
            Token::Continue => write!(f, "continue"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Not => write!(f, "not"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::EqualEqual => write!(f, "=="),
            Token::BangEqual => write!(f, "!="),
            Token::Less => write!(f, "<"),
            Token::Greater => write!(f, ">"),
            Token::LessEqual => write!(f, "<="),
            Token::GreaterEqual => write!(f, ">="),
            Token::Equal => write!(f, "="),
            Token::Semicolon => write!(f, ";"),
            Token::Comma => write!(f, ","),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
        }
    }
}
