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

use crate::{simple_node_impl, Block, Expression, Statement};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// An `if condition then block (elseif ...)* (else block)? end` statement.
///
/// An `elseif` is a nested `Conditional` in `otherwise`; a final `else` is
/// a `Block`. No other statement kind appears there.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConditionalStatement<'a> {
    /// The `bool`-typed condition deciding which branch runs.
    pub condition: &'a Expression<'a>,
    /// The branch taken when `condition` yields `true`.
    pub then: Block<'a>,
    /// The `elseif` chain or `else` branch, if any.
    pub otherwise: Option<&'a Statement<'a>>,
    /// The span from `if` to the closing `end`.
    pub span: Span,
}

simple_node_impl!(ConditionalStatement<'a>);

impl fmt::Display for ConditionalStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {} then{}", self.condition, self.then)?;
        // Print the chain iteratively; a nested conditional must come out
        // as `elseif`, since `else if ... end end` parses to a different tree.
        let mut otherwise = self.otherwise;
        loop {
            match otherwise {
                None => return write!(f, " end"),
                Some(Statement::Block(block)) => return write!(f, " else{block} end"),
                Some(Statement::Conditional(next)) => {
                    write!(f, " elseif {} then{}", next.condition, next.then)?;
                    otherwise = next.otherwise;
                }
                Some(_) => {
                    panic!("`otherwise` of a `ConditionalStatement` must be a block or conditional.")
                }
            }
        }
    }
}
