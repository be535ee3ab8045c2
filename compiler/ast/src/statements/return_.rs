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

/// A return statement, `return a, b;`; the value list may be empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReturnStatement<'a> {
    /// The returned values.
    pub expressions: Vec<&'a Expression<'a>>,
    /// The span from `return` to the semicolon.
    pub span: Span,
}

simple_node_impl!(ReturnStatement<'a>);

impl fmt::Display for ReturnStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return")?;
        for (i, expression) in self.expressions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {expression}")?;
        }
        write!(f, ";")
    }
}
