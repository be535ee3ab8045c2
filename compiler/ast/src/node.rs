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

use lume_span::Span;

/// A node in the AST.
pub trait Node {
    /// Returns the span of the node.
    fn span(&self) -> Span;
}

/// Implements [`Node`] for a type with a `span` field.
#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ident < $lt:lifetime >) => {
        impl<$lt> $crate::Node for $ty<$lt> {
            fn span(&self) -> lume_span::Span {
                self.span
            }
        }
    };
    ($ty:ident) => {
        impl $crate::Node for $ty {
            fn span(&self) -> lume_span::Span {
                self.span
            }
        }
    };
}
