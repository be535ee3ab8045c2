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

use crate::{simple_node_impl, Identifier, Type};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// A name with an optional type annotation: a function parameter, a struct
/// field, or one variable of a `local` declaration.
///
/// The grammar requires the annotation everywhere except in `local`
/// declarations, so for parameters and fields `type_` is always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Param<'a> {
    /// The declared name.
    pub name: Identifier,
    /// The type annotation, if one was written.
    pub type_: Option<Type<'a>>,
    /// The span of the name and annotation.
    pub span: Span,
}

simple_node_impl!(Param<'a>);

impl fmt::Display for Param<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_ {
            Some(type_) => write!(f, "{}: {type_}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A generic parameter with its (possibly empty) `+`-separated bound list,
/// e.g. `T: Show + Eq`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenericParam<'a> {
    /// The name of the type variable.
    pub name: Identifier,
    /// The trait bounds the variable is constrained by.
    pub constraints: Vec<Type<'a>>,
    /// The span of the name and its bounds.
    pub span: Span,
}

simple_node_impl!(GenericParam<'a>);

impl fmt::Display for GenericParam<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (i, bound) in self.constraints.iter().enumerate() {
            if i == 0 {
                write!(f, ": {bound}")?;
            } else {
                write!(f, " + {bound}")?;
            }
        }
        Ok(())
    }
}
