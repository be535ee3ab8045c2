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

use crate::{GenericParam, Param, Type};

use serde::Serialize;
use std::fmt;

/// The callable shape shared by function declarations, function literals,
/// trait method signatures, and function types: generic parameters,
/// parameters, and return types.
///
/// Parameters always carry a type annotation; `Param::type_` is `Some` in
/// every signature the parser builds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionSignature<'a> {
    /// The generic parameters, with their bounds.
    pub generics: Vec<GenericParam<'a>>,
    /// The typed parameters.
    pub params: Vec<Param<'a>>,
    /// The declared return types; empty means no annotation was written.
    pub returns: Vec<Type<'a>>,
}

impl fmt::Display for FunctionSignature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")?;
        for (i, return_) in self.returns.iter().enumerate() {
            if i == 0 {
                write!(f, ": {return_}")?;
            } else {
                write!(f, ", {return_}")?;
            }
        }
        Ok(())
    }
}
