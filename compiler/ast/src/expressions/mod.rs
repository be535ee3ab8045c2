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

use crate::{Identifier, Node};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

pub mod binary;
pub use binary::*;

pub mod call;
pub use call::*;

pub mod field;
pub use field::*;

pub mod function;
pub use function::*;

pub mod index;
pub use index::*;

pub mod literal;
pub use literal::*;

pub mod struct_init;
pub use struct_init::*;

pub mod table;
pub use table::*;

pub mod unary;
pub use unary::*;

/// Expression that evaluates to a value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Expression<'a> {
    /// A binary expression, e.g. `42 + 24`.
    Binary(BinaryExpression<'a>),
    /// A call expression, e.g. `f(42)`.
    Call(CallExpression<'a>),
    /// A field access, e.g. `p.x`.
    FieldAccess(FieldAccessExpression<'a>),
    /// An anonymous function literal.
    Function(FunctionExpression<'a>),
    /// An identifier, e.g. `foo`.
    Identifier(Identifier),
    /// An index access, e.g. `xs[1]`.
    Index(IndexExpression<'a>),
    /// A literal, e.g. `42` or `"hello"`.
    Literal(LiteralExpression),
    /// A struct initialization, e.g. `Point { x: 1, y: 2 }`.
    Struct(StructExpression<'a>),
    /// A table constructor, e.g. `{ 1, 2, 3 }`.
    Table(TableExpression<'a>),
    /// An unary expression, e.g. `-x`.
    Unary(UnaryExpression<'a>),
    /// The `...` vararg expression.
    Vararg(VarargExpression),
}

impl Node for Expression<'_> {
    fn span(&self) -> Span {
        match self {
            Expression::Binary(n) => n.span(),
            Expression::Call(n) => n.span(),
            Expression::FieldAccess(n) => n.span(),
            Expression::Function(n) => n.span(),
            Expression::Identifier(n) => n.span(),
            Expression::Index(n) => n.span(),
            Expression::Literal(n) => n.span(),
            Expression::Struct(n) => n.span(),
            Expression::Table(n) => n.span(),
            Expression::Unary(n) => n.span(),
            Expression::Vararg(n) => n.span(),
        }
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Binary(n) => n.fmt(f),
            Expression::Call(n) => n.fmt(f),
            Expression::FieldAccess(n) => n.fmt(f),
            Expression::Function(n) => n.fmt(f),
            Expression::Identifier(n) => n.fmt(f),
            Expression::Index(n) => n.fmt(f),
            Expression::Literal(n) => n.fmt(f),
            Expression::Struct(n) => n.fmt(f),
            Expression::Table(n) => n.fmt(f),
            Expression::Unary(n) => n.fmt(f),
            Expression::Vararg(n) => n.fmt(f),
        }
    }
}
