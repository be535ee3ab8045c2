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

use crate::{simple_node_impl, Block, Expression};
use lume_span::Span;

use serde::Serialize;
use std::fmt;

/// A `repeat block until condition` loop; the body runs at least once.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RepeatStatement<'a> {
    /// The loop body.
    pub block: Block<'a>,
    /// The condition tested after each iteration; `true` exits the loop.
    pub until: &'a Expression<'a>,
    /// The span from `repeat` to the condition.
    pub span: Span,
}

simple_node_impl!(RepeatStatement<'a>);

impl fmt::Display for RepeatStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "repeat{} until {}", self.block, self.until)
    }
}
