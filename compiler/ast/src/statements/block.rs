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

use crate::{simple_node_impl, Statement};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// A sequence of statements: a function or loop body, an `if` branch, or
/// the whole program.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Block<'a> {
    /// The statements, in source order.
    pub statements: Vec<&'a Statement<'a>>,
    /// The span of the whole sequence.
    pub span: Span,
}

simple_node_impl!(Block<'a>);

impl fmt::Display for Block<'_> {
    /// Writes the statements each preceded by a single space, so enclosing
    /// constructs can splice the block between their keywords:
    /// `while c do{block} end`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, " {statement}")?;
        }
        Ok(())
    }
}
