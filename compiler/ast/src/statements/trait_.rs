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

use crate::{simple_node_impl, FunctionSignature, GenericParam, Identifier};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// One required method of a trait: a name and a signature, no body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraitMethod<'a> {
    /// The method name.
    pub name: Identifier,
    /// The required signature.
    pub signature: FunctionSignature<'a>,
    /// The span from `function` to the end of the signature.
    pub span: Span,
}

simple_node_impl!(TraitMethod<'a>);

impl fmt::Display for TraitMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}{}", self.name, self.signature)
    }
}

/// A trait declaration listing method signatures,
/// `trait Show function render(self: Point): string end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraitDeclaration<'a> {
    /// The declared name.
    pub name: Identifier,
    /// The generic parameters of the trait.
    pub generics: Vec<GenericParam<'a>>,
    /// The required methods.
    pub methods: Vec<TraitMethod<'a>>,
    /// The span from `trait` to `end`.
    pub span: Span,
}

simple_node_impl!(TraitDeclaration<'a>);

impl fmt::Display for TraitDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trait {}", self.name)?;
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
        for method in &self.methods {
            write!(f, " {method}")?;
        }
        write!(f, " end")
    }
}
