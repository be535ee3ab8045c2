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

use crate::{simple_node_impl, FunctionDeclaration, GenericParam, Identifier, Type};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// A name plus optional type arguments, as either side of an `impl` header:
/// the `Show<T>` or `Point<number>` in `impl Show<T> for Point<number>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImplTarget<'a> {
    /// The named trait or type.
    pub name: Identifier,
    /// The type arguments applied to the name.
    pub arguments: Vec<Type<'a>>,
}

impl fmt::Display for ImplTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{argument}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// An `impl` declaration: inherent (`impl Point ... end`) or of a trait
/// (`impl Show for Point ... end`).
///
/// `trait_` is present exactly when the source contained a `for` clause;
/// `target` is then the name after `for`, otherwise the only name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImplDeclaration<'a> {
    /// The generic parameters introduced by the impl.
    pub generics: Vec<GenericParam<'a>>,
    /// The implemented trait, when a `for` clause was present.
    pub trait_: Option<ImplTarget<'a>>,
    /// The type the functions attach to.
    pub target: ImplTarget<'a>,
    /// The member function declarations.
    pub functions: Vec<FunctionDeclaration<'a>>,
    /// The span from `impl` to `end`.
    pub span: Span,
}

simple_node_impl!(ImplDeclaration<'a>);

impl fmt::Display for ImplDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "impl")?;
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
        match &self.trait_ {
            Some(trait_) => write!(f, " {trait_} for {}", self.target)?,
            None => write!(f, " {}", self.target)?,
        }
        for function in &self.functions {
            write!(f, " {function}")?;
        }
        write!(f, " end")
    }
}
