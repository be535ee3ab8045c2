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

use crate::{simple_node_impl, Expression, Identifier};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// An initializer for a single struct field: `x: 1`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StructVariableInitializer<'a> {
    /// The field being initialized.
    pub identifier: Identifier,
    /// The value the field is initialized to.
    pub expression: &'a Expression<'a>,
}

impl fmt::Display for StructVariableInitializer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.identifier, self.expression)
    }
}

/// A struct initialization expression, `Point { x: 1, y: 2 }`.
///
/// `name` is an expression rather than a bare identifier so namespaced type
/// heads (`geo.Point { ... }`) parse uniformly; which expressions are
/// acceptable heads is the semantic layer's concern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StructExpression<'a> {
    /// The type head the initializer applies to.
    pub name: &'a Expression<'a>,
    /// The field initializers.
    pub members: Vec<StructVariableInitializer<'a>>,
    /// The span from the head to the closing brace.
    pub span: Span,
}

simple_node_impl!(StructExpression<'a>);

impl fmt::Display for StructExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.members.is_empty() {
            return write!(f, "{} {{}}", self.name);
        }
        write!(f, "{} {{ ", self.name)?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, " }}")
    }
}
