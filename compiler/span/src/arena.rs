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

//! A bump arena for the bytes of interned strings.
//!
//! The interner hands out `&str`s that must stay valid (and must not move)
//! for as long as the session lives, so the backing bytes are carved out of
//! append-only chunks that are only released when the arena is dropped.

use std::{cell::{Cell, RefCell}, cmp, slice, str};

/// Byte capacity of the first chunk.
const INITIAL_CHUNK: usize = 4 * 1024;

/// A chunked bump allocator for raw bytes.
///
/// Allocations never move and are freed all at once when the arena is
/// dropped; there is no per-allocation bookkeeping and no rewinding.
#[derive(Default)]
pub struct ByteArena {
    /// The next free byte in the current chunk.
    ptr: Cell<*mut u8>,
    /// One past the last usable byte of the current chunk.
    end: Cell<*mut u8>,
    /// All chunks allocated so far; only the last one is bumped into.
    chunks: RefCell<Vec<Chunk>>,
}

struct Chunk {
    storage: Vec<u8>,
}

impl Chunk {
    fn start(&self) -> *mut u8 {
        self.storage.as_ptr() as *mut u8
    }

    fn end(&self) -> *mut u8 {
        // Capacity, not length: the vector is used as raw storage.
        unsafe { self.start().add(self.storage.capacity()) }
    }
}

impl ByteArena {
    /// Creates an empty arena. No memory is reserved until the first allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `bytes` into the arena and returns the stable copy.
    pub fn alloc_bytes(&self, bytes: &[u8]) -> &[u8] {
        if bytes.is_empty() {
            return &[];
        }

        unsafe {
            let mem = self.alloc_raw(bytes.len());
            let out = slice::from_raw_parts_mut(mem, bytes.len());
            out.copy_from_slice(bytes);
            out
        }
    }

    /// Copies `string` into the arena and returns the stable copy.
    pub fn alloc_str(&self, string: &str) -> &str {
        // Safe: the bytes were copied verbatim from a `&str`.
        unsafe { str::from_utf8_unchecked(self.alloc_bytes(string.as_bytes())) }
    }

    /// Reserves `len` bytes and returns a pointer to their start.
    unsafe fn alloc_raw(&self, len: usize) -> *mut u8 {
        debug_assert!(len != 0);

        let future_end = self.ptr.get().wrapping_add(len);
        if self.end.get().is_null() || future_end > self.end.get() {
            self.grow(len);
        }

        let ptr = self.ptr.get();
        self.ptr.set(ptr.wrapping_add(len));
        ptr
    }

    /// Allocates a fresh chunk large enough for `needed` bytes.
    #[cold]
    fn grow(&self, needed: usize) {
        let mut chunks = self.chunks.borrow_mut();
        let capacity = match chunks.last() {
            Some(last) => cmp::max(last.storage.capacity().saturating_mul(2), needed),
            None => cmp::max(INITIAL_CHUNK, needed),
        };
        let chunk = Chunk {
            storage: Vec::with_capacity(capacity),
        };
        self.ptr.set(chunk.start());
        self.end.set(chunk.end());
        chunks.push(chunk);
    }

    /// Total bytes handed out so far, across all chunks.
    pub fn allocated_bytes(&self) -> usize {
        let chunks = self.chunks.borrow();
        let full: usize = chunks
            .iter()
            .rev()
            .skip(1)
            .map(|c| c.storage.capacity())
            .sum();
        let head = match chunks.last() {
            Some(last) => self.ptr.get() as usize - last.start() as usize,
            None => 0,
        };
        full + head
    }
}

// The raw cursor pointers always point into storage the chunks own, so the
// arena can move between threads as a unit.
unsafe impl Send for ByteArena {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_str_roundtrip() {
        let arena = ByteArena::new();
        let a = arena.alloc_str("hello");
        let b = arena.alloc_str("world");
        assert_eq!(a, "hello");
        assert_eq!(b, "world");
    }

    #[test]
    fn test_allocations_are_stable_across_growth() {
        let arena = ByteArena::new();
        let first = arena.alloc_str("stable");
        let first_ptr = first.as_ptr();
        // Force several chunk growths.
        let big = "x".repeat(INITIAL_CHUNK);
        for _ in 0..8 {
            arena.alloc_str(&big);
        }
        assert_eq!(first.as_ptr(), first_ptr);
        assert_eq!(first, "stable");
    }

    #[test]
    fn test_empty_allocation() {
        let arena = ByteArena::new();
        assert_eq!(arena.alloc_str(""), "");
        assert_eq!(arena.allocated_bytes(), 0);
    }
}
