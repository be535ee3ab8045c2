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

use serde::{Deserialize, Serialize};
use std::{fmt, ops::Add};

/// The byte range of a lexeme or AST node in the original source,
/// together with the 1-based line the range starts on.
///
/// Lume diagnostics report lines only, so no column bookkeeping is done;
/// `lo`/`hi` are kept for tooling that wants to slice the source text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The byte offset of the first byte of this span.
    pub lo: u32,
    /// The byte offset one past the last byte of this span.
    pub hi: u32,
    /// The line on which this span starts.
    pub line: u32,
}

impl Span {
    /// Generates a new span from the `lo` and `hi` byte offsets and the starting line.
    pub fn new(lo: u32, hi: u32, line: u32) -> Self {
        Self { lo, hi, line }
    }

    /// Generates a dummy span with all defaults.
    pub const fn dummy() -> Self {
        Self { lo: 0, hi: 0, line: 0 }
    }

    /// The length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.hi.saturating_sub(self.lo)
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.lo == self.hi
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}

impl Add for &Span {
    type Output = Span;

    fn add(self, other: &Span) -> Span {
        *self + *other
    }
}

impl Add for Span {
    type Output = Self;

    /// Merges two spans, covering everything in between as well.
    /// The reported line is the line of the earlier span.
    fn add(self, other: Self) -> Self {
        let (first, last) = if self.lo <= other.lo { (self, other) } else { (other, self) };
        Span {
            lo: first.lo,
            hi: first.hi.max(last.hi),
            line: first.line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_add_merges() {
        let a = Span::new(0, 4, 1);
        let b = Span::new(10, 12, 3);
        assert_eq!(a + b, Span::new(0, 12, 1));
        assert_eq!(b + a, Span::new(0, 12, 1));
    }

    #[test]
    fn test_dummy_is_empty() {
        assert!(Span::dummy().is_empty());
        assert_eq!(Span::default(), Span::dummy());
    }
}
