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

use crate::arena::ByteArena;

use fxhash::FxHashMap;
use scoped_tls::scoped_thread_local;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{cell::RefCell, fmt};

/// Names that are pre-interned when a session is created, so the parser can
/// recognize them by `Symbol` equality alone.
#[allow(non_upper_case_globals)]
pub mod sym {
    use super::Symbol;

    pub const void: Symbol = Symbol::new(0);
    pub const bool: Symbol = Symbol::new(1);
    pub const number: Symbol = Symbol::new(2);
    pub const string: Symbol = Symbol::new(3);
}

/// The strings behind the constants in [`sym`], in index order.
const PRE_INTERNED: &[&str] = &["void", "bool", "number", "string"];

/// An interned string.
///
/// Two symbols are equal exactly when the strings they were interned from
/// are byte-equal, so equality and hashing are `u32` operations.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Creates a symbol from a raw interner index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Maps a string to its interned representation in the current session.
    pub fn intern(string: &str) -> Self {
        with_session_globals(|session_globals| session_globals.symbol_interner.intern(string))
    }

    /// The raw interner index of this symbol.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Runs `f` on the string this symbol stands for.
    pub fn with_str<R>(self, f: impl FnOnce(&str) -> R) -> R {
        with_session_globals(|session_globals| session_globals.symbol_interner.with_str(self, f))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| f.write_str(s))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| write!(f, "{s:?}"))
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.with_str(|s| s == *other)
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with_str(|s| serializer.serialize_str(s))
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SymbolVisitor;

        impl de::Visitor<'_> for SymbolVisitor {
            type Value = Symbol;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an interned string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Symbol, E> {
                Ok(Symbol::intern(value))
            }
        }

        deserializer.deserialize_str(SymbolVisitor)
    }
}

#[derive(Default)]
struct InternerInner {
    /// Owns the bytes of every interned string for the whole session.
    arena: ByteArena,
    /// Maps an interned string back to its symbol.
    names: FxHashMap<&'static str, Symbol>,
    /// Maps a symbol index to its string.
    strings: Vec<&'static str>,
}

/// Deduplicating storage for strings.
///
/// The interner owns an arena that the strings are copied into, which allows
/// handing out `&'static str` internally; those references are only ever
/// observed through [`Symbol::with_str`], while the session (and therefore
/// the arena) is alive.
pub struct Interner {
    inner: RefCell<InternerInner>,
}

impl Interner {
    /// Creates an interner with the [`sym`] names already present.
    fn prefilled() -> Self {
        let this = Interner {
            inner: RefCell::new(InternerInner::default()),
        };
        for (index, name) in PRE_INTERNED.iter().enumerate() {
            let symbol = this.intern(name);
            debug_assert_eq!(symbol.as_u32() as usize, index);
        }
        this
    }

    fn intern(&self, string: &str) -> Symbol {
        let mut inner = self.inner.borrow_mut();
        if let Some(&symbol) = inner.names.get(string) {
            return symbol;
        }

        let symbol = Symbol::new(inner.strings.len() as u32);
        // Extending to `'static` is sound: the arena neither moves nor frees
        // its bytes until the interner itself is dropped.
        let stable: &'static str = unsafe { &*(inner.arena.alloc_str(string) as *const str) };
        inner.strings.push(stable);
        inner.names.insert(stable, symbol);
        symbol
    }

    fn with_str<R>(&self, symbol: Symbol, f: impl FnOnce(&str) -> R) -> R {
        let inner = self.inner.borrow();
        let string = inner
            .strings
            .get(symbol.as_u32() as usize)
            .expect("attempted to look up a symbol from a different session");
        f(string)
    }
}

/// Per-session global state: currently just the symbol interner.
pub struct SessionGlobals {
    symbol_interner: Interner,
}

impl Default for SessionGlobals {
    fn default() -> Self {
        Self {
            symbol_interner: Interner::prefilled(),
        }
    }
}

scoped_thread_local!(static SESSION_GLOBALS: SessionGlobals);

/// Creates the session globals for the current thread if they are not set
/// already, then runs `f` with them in scope.
pub fn create_session_if_not_set_then<R>(f: impl FnOnce(&SessionGlobals) -> R) -> R {
    if SESSION_GLOBALS.is_set() {
        SESSION_GLOBALS.with(f)
    } else {
        let session_globals = SessionGlobals::default();
        SESSION_GLOBALS.set(&session_globals, || SESSION_GLOBALS.with(f))
    }
}

/// Runs `f` with the current session globals.
///
/// Panics if no session was created; wrap the program (or test) entry point
/// in [`create_session_if_not_set_then`].
pub fn with_session_globals<R>(f: impl FnOnce(&SessionGlobals) -> R) -> R {
    SESSION_GLOBALS.with(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning_deduplicates() {
        create_session_if_not_set_then(|_| {
            let a = Symbol::intern("walrus");
            let b = Symbol::intern("walrus");
            let c = Symbol::intern("narwhal");
            assert_eq!(a, b);
            assert_ne!(a, c);
            assert_eq!(a, "walrus");
            assert_eq!(c.to_string(), "narwhal");
        });
    }

    #[test]
    fn test_pre_interned_symbols() {
        create_session_if_not_set_then(|_| {
            assert_eq!(Symbol::intern("void"), sym::void);
            assert_eq!(Symbol::intern("bool"), sym::bool);
            assert_eq!(Symbol::intern("number"), sym::number);
            assert_eq!(Symbol::intern("string"), sym::string);
        });
    }

    #[test]
    fn test_nested_session_reuses_interner() {
        create_session_if_not_set_then(|_| {
            let outer = Symbol::intern("once");
            create_session_if_not_set_then(|_| {
                assert_eq!(Symbol::intern("once"), outer);
            });
        });
    }
}
