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

use crate::{FunctionSignature, Identifier};

use serde::Serialize;
use std::fmt;

/// A reference to a user-declared type, before name resolution: the head
/// name and its type arguments. Whether the name is a struct, a trait, or a
/// generic parameter is decided by later phases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserType<'a> {
    /// The head name, e.g. `Point`.
    pub name: Identifier,
    /// The type arguments, e.g. `number` in `Point<number>`.
    pub arguments: Vec<Type<'a>>,
}

impl fmt::Display for UserType<'_> {
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

/// Explicit type used in a Lume program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Type<'a> {
    /// The absence of a value, usable only as a return type.
    Void,
    /// The type of `nil`.
    Nil,
    /// The `bool` type.
    Boolean,
    /// The 64-bit floating-point `number` type.
    Number,
    /// The `string` type.
    String,
    /// An array `[T]`.
    Array(&'a Type<'a>),
    /// A reference to a struct, trait, or not-yet-resolved generic parameter.
    User(UserType<'a>),
    /// A resolved reference to a generic parameter. The parser never
    /// produces this variant; name resolution rewrites `User` heads that
    /// name a generic parameter in scope.
    Generic(Identifier),
    /// A function type, `function(T): U`.
    Function(FunctionSignature<'a>),
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Nil => write!(f, "nil"),
            Type::Boolean => write!(f, "bool"),
            Type::Number => write!(f, "number"),
            Type::String => write!(f, "string"),
            Type::Array(inner) => write!(f, "[{inner}]"),
            Type::User(user) => user.fmt(f),
            Type::Generic(name) => name.fmt(f),
            Type::Function(signature) => write!(f, "function{signature}"),
        }
    }
}
