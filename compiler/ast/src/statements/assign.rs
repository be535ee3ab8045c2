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

/// A parallel assignment, `a, b[1] = x, y;`.
///
/// The two lists may differ in length; checking arity (and whether each
/// target is assignable) is the semantic layer's concern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignStatement<'a> {
    /// The assignment targets.
    pub targets: Vec<&'a Expression<'a>>,
    /// The assigned values.
    pub values: Vec<&'a Expression<'a>>,
    /// The span from the first target to the semicolon.
    pub span: Span,
}

simple_node_impl!(AssignStatement<'a>);

impl fmt::Display for AssignStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{target}")?;
        }
        write!(f, " =")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {value}")?;
        }
        write!(f, ";")
    }
}
