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

//! Property-based tests for the FanC compiler.
//!
//! These tests verify important invariants and properties that should
//! hold for all inputs, using proptest for random input generation.

use fanc::analyzer::SymbolTable;
use fanc::codegen::{BranchSlot, CodeBuffer, Label, PatchList};
use fanc::{compile, lexer, ErrorCode, Type};
use proptest::prelude::*;
use std::collections::HashSet;

fn any_type() -> impl Strategy<Value = Type> {
    prop::sample::select(vec![
        Type::Int,
        Type::Byte,
        Type::Bool,
        Type::String,
        Type::Void,
    ])
}

/// Statements over a single `int x`, nested up to a few levels.
fn statement() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0i32..100).prop_map(|n| format!("x = x + {};", n)),
        Just("printi(x);".to_string()),
        Just("print(\"tick\");".to_string()),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (0i32..10, inner.clone()).prop_map(|(k, s)| format!("if (x < {}) {}", k, s)),
            (0i32..10, inner.clone(), inner.clone())
                .prop_map(|(k, a, b)| format!("if (x == {} or x > 50) {} else {}", k, a, b)),
            (0i32..10, inner.clone())
                .prop_map(|(k, s)| format!("while (x < {} and true) {{ {} break; }}", k, s)),
            prop::collection::vec(inner, 1..3).prop_map(|body| format!("{{ {} }}", body.join(" "))),
        ]
    })
}

/// Label numbers defined in the IR, and those targeted by branches.
fn labels(ir: &str) -> (Vec<String>, Vec<String>) {
    let mut defined = Vec::new();
    let mut targets = Vec::new();
    for line in ir.lines() {
        if let Some(name) = line.strip_suffix(':') {
            defined.push(name.to_string());
        }
        if line.trim_start().starts_with("br ") {
            for part in line.split("%label_").skip(1) {
                let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
                targets.push(format!("label_{}", digits));
            }
        }
    }
    (defined, targets)
}

// ============================================================================
// Type Property Tests
// ============================================================================

proptest! {
    /// Property: widening is commutative and only defined on numbers.
    #[test]
    fn prop_widen_commutative(a in any_type(), b in any_type()) {
        prop_assert_eq!(Type::widen(a, b), Type::widen(b, a));
        prop_assert_eq!(Type::widen(a, b).is_some(), a.is_numeric() && b.is_numeric());
    }

    /// Property: the only implicit conversion is byte to int.
    #[test]
    fn prop_assignable_table(a in any_type(), b in any_type()) {
        let expected = a == b || (a == Type::Byte && b == Type::Int);
        prop_assert_eq!(a.is_assignable_to(b), expected);
    }

    /// Property: byte literals compile exactly when they fit.
    #[test]
    fn prop_byte_literal_range(n in 0u32..100_000) {
        let result = compile(&format!("void main() {{ byte b = {}b; }}", n));
        if n <= 255 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().code, ErrorCode::ByteOverflow);
        }
    }
}

// ============================================================================
// Symbol Table Property Tests
// ============================================================================

proptest! {
    /// Property: closing a scope restores every outer binding.
    #[test]
    fn prop_scope_shadow_and_restore(
        outer in prop::collection::hash_set("[a-z]{1,4}", 1..6),
        inner in prop::collection::hash_set("[a-z]{1,4}", 1..6),
    ) {
        let mut table = SymbolTable::new();
        table.enter_scope();
        for name in &outer {
            table.add_variable(name, Type::Int);
        }
        let before: Vec<(String, i32)> = outer
            .iter()
            .map(|n| (n.clone(), table.lookup_variable(n).map_or(-1, |s| s.offset)))
            .collect();

        table.enter_scope();
        for (index, name) in inner.iter().enumerate() {
            let offset = table.add_variable(name, Type::Bool);
            prop_assert_eq!(offset as usize, outer.len() + index);
        }
        for name in &inner {
            let symbol = table.lookup_variable(name);
            prop_assert_eq!(symbol.and_then(|s| s.var_type()), Some(Type::Bool));
        }
        prop_assert!(table.exit_scope());

        for (name, offset) in &before {
            let symbol = table.lookup_variable(name);
            prop_assert_eq!(symbol.map(|s| s.offset), Some(*offset));
            prop_assert_eq!(symbol.and_then(|s| s.var_type()), Some(Type::Int));
        }
        for name in inner.difference(&outer) {
            prop_assert!(table.lookup_variable(name).is_none());
        }
        prop_assert_eq!(table.depth(), 1);
        prop_assert_eq!(table.high_water(), outer.len() + inner.len());
    }
}

// ============================================================================
// Backpatching Property Tests
// ============================================================================

proptest! {
    /// Property: merging patch lists in either order resolves the same slots.
    #[test]
    fn prop_patch_merge_order(mask in prop::collection::vec(any::<bool>(), 1..20)) {
        let build = |left_first: bool| {
            let mut buffer = CodeBuffer::new();
            let mut left = PatchList::empty();
            let mut right = PatchList::empty();
            for &to_left in &mask {
                let jump = PatchList::single(buffer.emit_jump(), BranchSlot::First);
                if to_left {
                    left = left.merge(jump);
                } else {
                    right = right.merge(jump);
                }
            }
            let merged = if left_first { left.merge(right) } else { right.merge(left) };
            let count = merged.len();
            let label = buffer.gen_label();
            buffer.bpatch(merged, &label);
            (count, buffer.render())
        };

        let (count_a, ir_a) = build(true);
        let (count_b, ir_b) = build(false);
        prop_assert_eq!(count_a, mask.len());
        prop_assert_eq!(count_a, count_b);
        prop_assert_eq!(ir_a, ir_b);
    }

    /// Property: label names are derived from their address.
    #[test]
    fn prop_label_names(address in 0usize..100_000) {
        let label = Label::at(address);
        prop_assert_eq!(label.name(), format!("label_{}", address));
    }
}

// ============================================================================
// Compiler Property Tests
// ============================================================================

proptest! {
    /// Property: All valid tokens have ordered, in-bounds spans.
    #[test]
    fn prop_lexer_spans_valid(source in "[a-z0-9_ +\\-*/=;(){}<>!\"\\n]{0,200}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            let mut last_end = 0;
            for (_, span) in &tokens {
                prop_assert!(span.start <= span.end);
                prop_assert!(span.end <= source.len());
                prop_assert!(span.start >= last_end);
                last_end = span.end;
            }
        }
    }

    /// Property: structured programs compile and every branch has a target.
    #[test]
    fn prop_branch_targets_defined(body in prop::collection::vec(statement(), 1..5)) {
        let source = format!("void main() {{ int x = 0; {} }}", body.join(" "));
        let ir = compile(&source);
        prop_assert!(ir.is_ok(), "{:?} for {}", ir, source);
        let ir = ir.unwrap_or_default();

        let (defined, targets) = labels(&ir);
        let unique: HashSet<&String> = defined.iter().collect();
        prop_assert_eq!(unique.len(), defined.len());
        for target in &targets {
            prop_assert!(unique.contains(target), "undefined target {}", target);
        }
    }

    /// Property: compilation is deterministic.
    #[test]
    fn prop_compile_deterministic(
        a in 0i32..1000,
        b in 0i32..1000,
        op in prop::sample::select(vec!["+", "-", "*", "/"]),
    ) {
        let source = format!(
            "override int f(int x) {{ return x; }} override int f(byte x) {{ return x; }} \
             void main() {{ printi(f({} {} {})); }}",
            a, op, b
        );
        let first = compile(&source).ok();
        prop_assert!(first.is_some());
        prop_assert_eq!(first, compile(&source).ok());
    }
}
