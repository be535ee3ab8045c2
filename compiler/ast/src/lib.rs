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

//! The abstract syntax tree of a Lume program.
//!
//! All nodes of one tree live in a single arena behind an [`AstContext`];
//! the tree is immutable once built and is released in one pass when the
//! arena drops. `Display` on any node prints source text that parses back
//! to the same tree.

pub mod common;
pub use common::*;

pub mod context;
pub use context::*;

pub mod dump;
pub use dump::dump;

pub mod expressions;
pub use expressions::*;

pub mod node;
pub use node::*;

pub mod statements;
pub use statements::*;

pub mod types;
pub use types::*;
