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

use crate::{simple_node_impl, Expression};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// A unary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnaryOperation {
    /// Arithmetic negation, i.e. `-`.
    Negate,
    /// Logical negation, i.e. `not`.
    Not,
    /// Length, i.e. `#`.
    Length,
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperation::Negate => write!(f, "-"),
            UnaryOperation::Not => write!(f, "not"),
            UnaryOperation::Length => write!(f, "#"),
        }
    }
}

/// An unary expression applying an operator to an operand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnaryExpression<'a> {
    /// The operand.
    pub receiver: &'a Expression<'a>,
    /// The operator.
    pub op: UnaryOperation,
    /// The span from the operator to the operand.
    pub span: Span,
}

simple_node_impl!(UnaryExpression<'a>);

impl fmt::Display for UnaryExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            // `not` is a word, the others glue onto the operand.
            UnaryOperation::Not => write!(f, "(not {})", self.receiver),
            op => write!(f, "({op}{})", self.receiver),
        }
    }
}
