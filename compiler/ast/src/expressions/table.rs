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

use crate::{simple_node_impl, Expression, Identifier};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// One entry of a table constructor; `key` is absent for positional entries.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableEntry<'a> {
    /// The entry key, if the entry was written `key: value`.
    pub key: Option<Identifier>,
    /// The entry value.
    pub value: &'a Expression<'a>,
}

impl fmt::Display for TableEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{key}: {}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// A Lua-style table constructor, `{ 1, 2, x: 3 }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableExpression<'a> {
    /// The entries, in source order.
    pub entries: Vec<TableEntry<'a>>,
    /// The span from `{` to `}`.
    pub span: Span,
}

simple_node_impl!(TableExpression<'a>);

impl fmt::Display for TableExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, " }}")
    }
}
