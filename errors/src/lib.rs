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

//! Contains the diagnostic types of the Lume front-end and the
//! [`emitter::Handler`] they are reported through.

#![forbid(unsafe_code)]

pub mod common;
pub use common::*;

pub mod emitter;

pub mod errors;
pub use errors::*;

/// A `Result` alias where the `Err` case is a `LumeError`.
pub type Result<T, E = LumeError> = core::result::Result<T, E>;
