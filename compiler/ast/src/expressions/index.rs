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

/// An index access `receiver[index]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndexExpression<'a> {
    /// The expression being indexed into.
    pub receiver: &'a Expression<'a>,
    /// The index expression between the brackets.
    pub index: &'a Expression<'a>,
    /// The span from the receiver to the closing bracket.
    pub span: Span,
}

simple_node_impl!(IndexExpression<'a>);

impl fmt::Display for IndexExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.receiver, self.index)
    }
}
