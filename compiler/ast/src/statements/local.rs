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

use crate::{simple_node_impl, Expression, Param};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// A local declaration, `local x: number, y = 1, 2;`.
///
/// Type annotations are optional here and the initializer list may be
/// absent entirely.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocalStatement<'a> {
    /// The declared variables.
    pub variables: Vec<Param<'a>>,
    /// The initializers; empty when no `=` was written.
    pub values: Vec<&'a Expression<'a>>,
    /// The span from `local` to the semicolon.
    pub span: Span,
}

simple_node_impl!(LocalStatement<'a>);

impl fmt::Display for LocalStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "local")?;
        for (i, variable) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {variable}")?;
        }
        if !self.values.is_empty() {
            write!(f, " =")?;
            for (i, value) in self.values.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {value}")?;
            }
        }
        write!(f, ";")
    }
}
