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

//! Spans and string interning for the Lume compiler.
//!
//! Everything downstream of the tokenizer refers to source text through
//! [`Symbol`]s, so equal lexemes compare as integers, and to source
//! locations through [`Span`]s.

pub mod arena;
pub use arena::ByteArena;

pub mod span;
pub use span::Span;

pub mod symbol;
pub use symbol::{create_session_if_not_set_then, sym, with_session_globals, SessionGlobals, Symbol};
