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

use crate::{simple_node_impl, Block, Expression, Identifier};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// A numeric `for` loop: `for i = start, stop, step do block end`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumericForStatement<'a> {
    /// The loop variable.
    pub variable: Identifier,
    /// The initial value.
    pub start: &'a Expression<'a>,
    /// The inclusive final value.
    pub stop: &'a Expression<'a>,
    /// The increment, if one was written.
    pub step: Option<&'a Expression<'a>>,
    /// The loop body.
    pub block: Block<'a>,
    /// The span from `for` to `end`.
    pub span: Span,
}

simple_node_impl!(NumericForStatement<'a>);

impl fmt::Display for NumericForStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for {} = {}, {}", self.variable, self.start, self.stop)?;
        if let Some(step) = self.step {
            write!(f, ", {step}")?;
        }
        write!(f, " do{} end", self.block)
    }
}

/// A generic `for` loop: `for k, v in iterator do block end`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenericForStatement<'a> {
    /// The loop variables.
    pub variables: Vec<Identifier>,
    /// The iterated expression.
    pub iterator: &'a Expression<'a>,
    /// The loop body.
    pub block: Block<'a>,
    /// The span from `for` to `end`.
    pub span: Span,
}

simple_node_impl!(GenericForStatement<'a>);

impl fmt::Display for GenericForStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for ")?;
        for (i, variable) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variable}")?;
        }
        write!(f, " in {} do{} end", self.iterator, self.block)
    }
}
