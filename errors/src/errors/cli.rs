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

use std::fmt::Display;
use thiserror::Error;

/// Errors of the `lume` driver binary itself, outside tokenizing/parsing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("could not read source file '{path}': {error}")]
    FailedToReadFile { path: String, error: String },
}

impl CliError {
    pub fn failed_to_read_file(path: impl Display, error: impl Display) -> Self {
        Self::FailedToReadFile {
            path: path.to_string(),
            error: error.to_string(),
        }
    }
}
