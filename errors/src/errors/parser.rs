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

//! Errors the tokenizer and parser report.
//!
//! Every constructor renders into the single diagnostic shape the driver
//! prints; the parser picks the constructor, the [`crate::emitter::Handler`]
//! does the printing.

use crate::{At, FormattedError};

use std::fmt::Display;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ParserError(FormattedError);

impl ParserError {
    fn new(message: String, at: At, line: u32) -> Self {
        Self(FormattedError::new(message, at, line))
    }

    /// The parser expected `expected` but found the token in `at`.
    ///
    /// `expected` reads as the tail of "Expected …", e.g.
    /// `"';' after return statement"`.
    pub fn unexpected(expected: impl Display, at: At, line: u32) -> Self {
        Self::new(format!("Expected {expected}."), at, line)
    }

    pub fn expected_expression(at: At, line: u32) -> Self {
        Self::new("Expected expression.".into(), at, line)
    }

    pub fn expected_identifier(at: At, line: u32) -> Self {
        Self::new("Expected identifier.".into(), at, line)
    }

    pub fn expected_type(at: At, line: u32) -> Self {
        Self::new("Expected type.".into(), at, line)
    }

    /// An expression list longer than one was not followed by `=`.
    pub fn expected_assignment(at: At, line: u32) -> Self {
        Self::new("Expected '=' after expression list.".into(), at, line)
    }

    /// A number lexeme the standard conversion would not accept.
    pub fn invalid_number(text: impl Display, at: At, line: u32) -> Self {
        Self::new(format!("Invalid number literal '{text}'."), at, line)
    }

    /// A lexical error token reached the parser; its text is the message.
    pub fn lexical(message: String, line: u32) -> Self {
        Self::new(message, At::Nowhere, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_message() {
        let err = ParserError::unexpected("';' after value", At::Token("end".into()), 2);
        assert_eq!(err.to_string(), "[line 2] Error at 'end': Expected ';' after value.");
    }

    #[test]
    fn test_lexical_message() {
        let err = ParserError::lexical("Unterminated string.".into(), 9);
        assert_eq!(err.to_string(), "[line 9] Error: Unterminated string.");
    }
}
