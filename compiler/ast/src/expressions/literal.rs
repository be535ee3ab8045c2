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

use crate::{simple_node_impl, Node};
use lume_span::{Span, Symbol};

use serde::Serialize;
use std::fmt;

/// A literal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum LiteralExpression {
    /// The `nil` literal.
    Nil(Span),
    /// A `true` or `false` literal.
    Boolean(bool, Span),
    /// A number literal, already converted from its lexeme.
    Number(f64, Span),
    /// A string literal; the symbol holds the processed (unescaped) content.
    String(Symbol, Span),
}

impl Node for LiteralExpression {
    fn span(&self) -> Span {
        match self {
            LiteralExpression::Nil(span)
            | LiteralExpression::Boolean(_, span)
            | LiteralExpression::Number(_, span)
            | LiteralExpression::String(_, span) => *span,
        }
    }
}

impl fmt::Display for LiteralExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralExpression::Nil(_) => write!(f, "nil"),
            LiteralExpression::Boolean(value, _) => write!(f, "{value}"),
            LiteralExpression::Number(value, _) => write!(f, "{value}"),
            LiteralExpression::String(value, _) => value.with_str(|s| write_quoted(f, s)),
        }
    }
}

/// The `...` vararg expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VarargExpression {
    pub span: Span,
}

simple_node_impl!(VarargExpression);

impl fmt::Display for VarargExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "...")
    }
}

/// Writes `content` as a double-quoted Lume string literal that lexes back
/// to exactly `content`.
///
/// Control characters are written as three-digit decimal escapes; the fixed
/// width keeps a following literal digit from being absorbed into the
/// escape.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, content: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in content.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if (c as u32) < 0x20 || c as u32 == 0x7f => write!(f, "\\{:03}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}
