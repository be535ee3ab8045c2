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

//! The tokenizer and parser of the Lume programming language.
//!
//! [`tokenize()`] turns source text into a token stream ending in a single
//! `Eof`; [`parse()`] turns source text into an arena-allocated AST rooted
//! in a [`lume_ast::Statement::Block`].

#![forbid(unsafe_code)]

pub mod tokenizer;
pub use tokenizer::{tokenize, tokenize_iter, SpannedToken, Token, KEYWORD_TOKENS};

pub mod parser;
pub use parser::*;

#[cfg(test)]
mod test;
