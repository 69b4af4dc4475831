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

//! Fuzz target for the FanC lexer.
//!
//! Feeds random text to the lexer and checks that every token span lies
//! inside the input, in order.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_lexer

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(tokens) = fanc::lexer::tokenize(source) {
        let mut last_end = 0;
        for (_, span) in &tokens {
            assert!(last_end <= span.start && span.start <= span.end);
            assert!(span.end <= source.len());
            last_end = span.end;
        }
    }
});
