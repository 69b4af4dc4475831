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

//! Fuzz target for the complete FanC pipeline.
//!
//! Inputs are decoded into small structured programs so most of them get
//! past the parser and exercise the analyzer and the IR emitter.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_compiler

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Ty {
    Int,
    Byte,
    Bool,
}

impl Ty {
    fn name(&self) -> &'static str {
        match self {
            Ty::Int => "int",
            Ty::Byte => "byte",
            Ty::Bool => "bool",
        }
    }
}

#[derive(Debug, Arbitrary)]
enum Expr {
    Int(u16),
    Byte(u16),
    Bool(bool),
    Var(u8),
    Call(u8, Vec<Expr>),
    Binary(u8, Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    Cast(Ty, Box<Expr>),
}

#[derive(Debug, Arbitrary)]
enum Stmt {
    Decl(Ty, u8, Option<Expr>),
    Assign(u8, Expr),
    Call(u8, Vec<Expr>),
    If(Expr, Box<Stmt>, Option<Box<Stmt>>),
    While(Expr, Vec<Stmt>),
    Block(Vec<Stmt>),
    Return(Option<Expr>),
    Break,
    Continue,
}

#[derive(Debug, Arbitrary)]
struct Function {
    is_override: bool,
    ret: Option<Ty>,
    name: u8,
    params: Vec<(Ty, u8)>,
    body: Vec<Stmt>,
}

const OPS: &[&str] = &["+", "-", "*", "/", "<", ">=", "==", "!=", "and", "or"];

fn var(n: u8) -> String {
    format!("v{}", n % 4)
}

fn func(n: u8) -> &'static str {
    ["main", "f", "g", "printi"][usize::from(n % 4)]
}

fn render_expr(expr: &Expr, out: &mut String, depth: usize) {
    if depth > 8 {
        out.push('0');
        return;
    }
    match expr {
        Expr::Int(n) => out.push_str(&n.to_string()),
        Expr::Byte(n) => out.push_str(&format!("{}b", n)),
        Expr::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Expr::Var(n) => out.push_str(&var(*n)),
        Expr::Call(n, args) => {
            out.push_str(func(*n));
            out.push('(');
            for (i, arg) in args.iter().take(3).enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_expr(arg, out, depth + 1);
            }
            out.push(')');
        }
        Expr::Binary(op, left, right) => {
            out.push('(');
            render_expr(left, out, depth + 1);
            out.push_str(&format!(" {} ", OPS[usize::from(*op) % OPS.len()]));
            render_expr(right, out, depth + 1);
            out.push(')');
        }
        Expr::Not(inner) => {
            out.push_str("not ");
            render_expr(inner, out, depth + 1);
        }
        Expr::Cast(ty, inner) => {
            out.push_str(&format!("({}) ", ty.name()));
            render_expr(inner, out, depth + 1);
        }
    }
}

fn render_stmt(stmt: &Stmt, out: &mut String, depth: usize) {
    if depth > 6 {
        out.push_str("{ }");
        return;
    }
    match stmt {
        Stmt::Decl(ty, n, init) => {
            out.push_str(&format!("{} {}", ty.name(), var(*n)));
            if let Some(init) = init {
                out.push_str(" = ");
                render_expr(init, out, 0);
            }
            out.push(';');
        }
        Stmt::Assign(n, value) => {
            out.push_str(&format!("{} = ", var(*n)));
            render_expr(value, out, 0);
            out.push(';');
        }
        Stmt::Call(n, args) => {
            out.push_str(func(*n));
            out.push('(');
            for (i, arg) in args.iter().take(3).enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_expr(arg, out, 1);
            }
            out.push_str(");");
        }
        Stmt::If(cond, then, otherwise) => {
            out.push_str("if (");
            render_expr(cond, out, 0);
            out.push_str(") ");
            render_stmt(then, out, depth + 1);
            if let Some(otherwise) = otherwise {
                out.push_str(" else ");
                render_stmt(otherwise, out, depth + 1);
            }
        }
        Stmt::While(cond, body) => {
            out.push_str("while (");
            render_expr(cond, out, 0);
            out.push_str(") ");
            render_block(body, out, depth + 1);
        }
        Stmt::Block(body) => render_block(body, out, depth + 1),
        Stmt::Return(value) => {
            out.push_str("return");
            if let Some(value) = value {
                out.push(' ');
                render_expr(value, out, 0);
            }
            out.push(';');
        }
        Stmt::Break => out.push_str("break;"),
        Stmt::Continue => out.push_str("continue;"),
    }
}

fn render_block(body: &[Stmt], out: &mut String, depth: usize) {
    out.push_str("{ ");
    for stmt in body.iter().take(8) {
        render_stmt(stmt, out, depth);
        out.push(' ');
    }
    out.push('}');
}

fn render_function(function: &Function, out: &mut String) {
    if function.is_override {
        out.push_str("override ");
    }
    let ret = function.ret.as_ref().map_or("void", Ty::name);
    out.push_str(&format!("{} {}(", ret, func(function.name)));
    for (i, (ty, n)) in function.params.iter().take(3).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{} p{}", ty.name(), n % 4));
    }
    out.push_str(") ");
    render_block(&function.body, out, 0);
    out.push('\n');
}

fuzz_target!(|functions: Vec<Function>| {
    let mut source = String::new();
    for function in functions.iter().take(6) {
        render_function(function, &mut source);
    }
    // Errors are expected; panics are not.
    let _ = fanc::compile(&source);
});
