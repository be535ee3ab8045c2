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

use crate::{simple_node_impl, GenericParam, Identifier, Param};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// A struct declaration,
/// `struct Point x: number, y: number end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StructDeclaration<'a> {
    /// The declared name.
    pub name: Identifier,
    /// The generic parameters, e.g. `T` in `struct Box<T>`.
    pub generics: Vec<GenericParam<'a>>,
    /// The typed fields. `Param::type_` is always present here.
    pub fields: Vec<Param<'a>>,
    /// The span from `struct` to `end`.
    pub span: Span,
}

simple_node_impl!(StructDeclaration<'a>);

impl fmt::Display for StructDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "struct {}", self.name)?;
        if !self.generics.is_empty() {
            write!(f, "<")?;
            for (i, generic) in self.generics.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{generic}")?;
            }
            write!(f, ">")?;
        }
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {field}")?;
        }
        write!(f, " end")
    }
}
