// Copyright (C) 2024-2026 The Lume Authors.
// This file is part of the Lume library.

// The Lume library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Lume library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Lume library. If not, see <https://www.gnu.org/licenses/>.

//! The `lume` driver: the command-line front door to the tokenizer and
//! parser crates.

#![forbid(unsafe_code)]

pub mod cli;
pub use cli::Cli;

use lume_parser::SpannedToken;

use std::fmt::Write;

/// Renders a token stream in the debug dump format:
/// a `--- TOKENS (N) ---` header, then one `LINE KIND TEXT` row per token.
pub fn token_dump(tokens: &[SpannedToken]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- TOKENS ({}) ---", tokens.len());
    for token in tokens {
        let _ = writeln!(
            out,
            "{:>4} {:<12} {}",
            token.span.line,
            token.token.kind_str(),
            token.token
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lume_span::create_session_if_not_set_then;

    #[test]
    fn test_token_dump_format() {
        create_session_if_not_set_then(|_| {
            let tokens = lume_parser::tokenize("local x = 1;");
            let dump = token_dump(&tokens);
            let mut lines = dump.lines();
            assert_eq!(lines.next(), Some("--- TOKENS (6) ---"));
            let first = lines.next().unwrap();
            assert!(first.starts_with("   1 LOCAL"));
            assert!(first.ends_with("local"));
            assert!(dump.lines().any(|l| l.contains("EOF")));
        });
    }
}
