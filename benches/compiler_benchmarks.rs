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

//! Performance benchmarks for the FanC compiler.
//!
//! Run with: cargo bench
//!
//! Results are saved to target/criterion/ with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Benchmark Inputs
// ============================================================================

/// A program with `functions` overloaded helpers and a loop calling them.
fn generate_input(functions: usize) -> String {
    let mut source = String::new();
    for i in 0..functions {
        source.push_str(&format!(
            "override int step{i}(int n) {{\n    if (n > 100) return n / 2;\n    return n + {i};\n}}\n\n\
             override int step{i}(bool b) {{\n    if (b and true) return 1;\n    return 0;\n}}\n\n",
            i = i
        ));
    }
    source.push_str("void main() {\n    int x = 0;\n    byte b = 10b;\n    while (x < 1000) {\n");
    for i in 0..functions {
        source.push_str(&format!(
            "        x = step{i}(x) + step{i}(b > 3b or x == {i});\n",
            i = i
        ));
    }
    source.push_str("        if (x == 7) continue;\n        printi(x);\n    }\n}\n");
    source
}

fn inputs() -> [(&'static str, String); 3] {
    [
        ("small", generate_input(1)),
        ("medium", generate_input(20)),
        ("large", generate_input(200)),
    ]
}

// ============================================================================
// Lexer Benchmarks
// ============================================================================

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    for (name, source) in inputs() {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("tokenize", name), &source, |b, src| {
            b.iter(|| fanc::lexer::tokenize(black_box(src)))
        });
    }

    group.finish();
}

// ============================================================================
// Parser Benchmarks
// ============================================================================

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    for (name, source) in inputs() {
        let tokens = fanc::lexer::tokenize(&source).unwrap();
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), &tokens, |b, tokens| {
            b.iter(|| fanc::parser::parse(black_box(tokens)))
        });
    }

    group.finish();
}

// ============================================================================
// Analyzer Benchmarks
// ============================================================================

fn bench_analyzer(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer");

    for (name, source) in inputs() {
        let tokens = fanc::lexer::tokenize(&source).unwrap();
        let program = fanc::parser::parse(&tokens).unwrap();
        group.bench_with_input(BenchmarkId::new("analyze", name), &program, |b, program| {
            b.iter(|| fanc::analyzer::analyze(black_box(program)))
        });
    }

    group.finish();
}

// ============================================================================
// Full Compilation Benchmarks
// ============================================================================

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for (name, source) in inputs() {
        group.throughput(Throughput::Elements(source.lines().count() as u64));
        group.bench_with_input(BenchmarkId::new("full", name), &source, |b, src| {
            b.iter(|| fanc::compile(black_box(src)))
        });
    }

    group.finish();
}

// ============================================================================
// Micro Benchmarks
// ============================================================================

fn bench_micro(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro");

    group.bench_function("minimal_program", |b| {
        b.iter(|| fanc::compile(black_box("void main() { }")))
    });

    group.bench_function("hello_world", |b| {
        b.iter(|| fanc::compile(black_box("void main() { print(\"Hello, World!\"); }")))
    });

    group.bench_function("short_circuit", |b| {
        b.iter(|| {
            fanc::compile(black_box(
                "void main() { int x = 1; bool b = x > 0 and (x < 9 or not (x == 4)); }",
            ))
        })
    });

    group.bench_function("overload_resolution", |b| {
        b.iter(|| {
            fanc::compile(black_box(
                "override void f(int a) { } override void f(bool a) { } override void f(int a, int b) { } \
                 void main() { f(1b); f(true); f(1, 2b); }",
            ))
        })
    });

    group.finish();
}

// ============================================================================
// Scaling Benchmarks
// ============================================================================

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for depth in [1usize, 8, 32, 64] {
        let mut source = String::from("void main() { int x = 0; ");
        for _ in 0..depth {
            source.push_str("while (x < 10) { x = x + 1; ");
        }
        source.push_str("printi(x);");
        for _ in 0..depth {
            source.push_str(" }");
        }
        source.push_str(" }");

        group.bench_with_input(BenchmarkId::new("nested_loops", depth), &source, |b, src| {
            b.iter(|| fanc::compile(black_box(src)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer,
    bench_parser,
    bench_analyzer,
    bench_compile,
    bench_micro,
    bench_scaling
);
criterion_main!(benches);
