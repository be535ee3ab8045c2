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

/// An expression in statement position, `f(x);`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpressionStatement<'a> {
    /// The expression evaluated for its side effects.
    pub expression: &'a Expression<'a>,
    /// The span including the terminating semicolon.
    pub span: Span,
}

simple_node_impl!(ExpressionStatement<'a>);

impl fmt::Display for ExpressionStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.expression)
    }
}
