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

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BinaryOperation {
    /// Addition, i.e. `+`.
    Add,
    /// Subtraction, i.e. `-`.
    Sub,
    /// Multiplication, i.e. `*`.
    Mul,
    /// Division, i.e. `/`.
    Div,
    /// Remainder, i.e. `%`.
    Rem,
    /// Exponentiation, i.e. `^`. Right-associative.
    Pow,
    /// String concatenation, i.e. `..`. Right-associative.
    Concat,
    /// Equality, i.e. `==`.
    Eq,
    /// Inequality, i.e. `~=`.
    Neq,
    /// Less than, i.e. `<`.
    Lt,
    /// Less than or equal, i.e. `<=`.
    Le,
    /// Greater than, i.e. `>`.
    Gt,
    /// Greater than or equal, i.e. `>=`.
    Ge,
    /// Short-circuiting conjunction, i.e. `and`.
    And,
    /// Short-circuiting disjunction, i.e. `or`.
    Or,
}

impl BinaryOperation {
    /// The surface syntax of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "*",
            BinaryOperation::Div => "/",
            BinaryOperation::Rem => "%",
            BinaryOperation::Pow => "^",
            BinaryOperation::Concat => "..",
            BinaryOperation::Eq => "==",
            BinaryOperation::Neq => "~=",
            BinaryOperation::Lt => "<",
            BinaryOperation::Le => "<=",
            BinaryOperation::Gt => ">",
            BinaryOperation::Ge => ">=",
            BinaryOperation::And => "and",
            BinaryOperation::Or => "or",
        }
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A binary expression `left op right`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinaryExpression<'a> {
    /// The left operand.
    pub left: &'a Expression<'a>,
    /// The right operand.
    pub right: &'a Expression<'a>,
    /// The operator.
    pub op: BinaryOperation,
    /// The span from `left` to `right`.
    pub span: Span,
}

simple_node_impl!(BinaryExpression<'a>);

impl fmt::Display for BinaryExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}
