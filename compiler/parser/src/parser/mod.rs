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

//! The parser to convert Lume code text into a [`Statement`] AST.
//!
//! This module contains the [`parse()`] method which calls the underlying
//! [`tokenize()`] method to create a new program AST.

use crate::tokenizer::*;

use lume_ast::*;
use lume_errors::emitter::Handler;
use lume_errors::Result;
use lume_span::Span;

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod statement;
pub mod type_;

/// Creates the AST of the given source code text: a root block holding one
/// statement per top-level statement of the program.
///
/// Errors are reported through `handler`; the parse is only usable when
/// `handler.had_errors()` is `false` afterwards.
pub fn parse<'a>(handler: &'a Handler, context: AstContext<'a>, source: &str) -> Result<&'a Statement<'a>> {
    tracing::debug!(bytes = source.len(), "parsing source");

    let mut tokens = ParserContext::new(handler, context, tokenize(source));

    tokens.parse_program()
}
