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

use crate::LumeError;

use std::{cell::RefCell, rc::Rc};

/// Types that are sinks for compiler errors.
pub trait Emitter {
    /// Emit the error `err`.
    fn emit_err(&mut self, err: &LumeError);
}

/// A sink that renders each error on its own line of standard error.
pub struct StderrEmitter;

impl Emitter for StderrEmitter {
    fn emit_err(&mut self, err: &LumeError) {
        eprintln!("{err}");
    }
}

/// A sink that collects rendered errors into a shared string, for tests and
/// tools that want to inspect diagnostics instead of printing them.
pub struct BufferEmitter(Rc<RefCell<String>>);

impl BufferEmitter {
    pub fn new() -> Self {
        Self(Rc::default())
    }

    /// A handle to the shared buffer; stays readable after the handler is gone.
    pub fn buffer(&self) -> Rc<RefCell<String>> {
        self.0.clone()
    }
}

impl Default for BufferEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for BufferEmitter {
    fn emit_err(&mut self, err: &LumeError) {
        let mut buf = self.0.borrow_mut();
        buf.push_str(&err.to_string());
        buf.push('\n');
    }
}

struct HandlerInner {
    /// Number of errors emitted so far.
    err_count: usize,
    /// The sink the errors went to.
    emitter: Box<dyn Emitter>,
}

/// A handler deals with errors and other compiler output.
///
/// It is passed by shared reference through the whole front-end, so emitting
/// goes through interior mutability.
pub struct Handler {
    inner: RefCell<HandlerInner>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(Box::new(StderrEmitter))
    }
}

impl Handler {
    /// Construct a `Handler` using the given `emitter`.
    pub fn new(emitter: Box<dyn Emitter>) -> Self {
        Self {
            inner: RefCell::new(HandlerInner {
                err_count: 0,
                emitter,
            }),
        }
    }

    /// Construct a `Handler` that records errors into a returned buffer.
    pub fn buffered() -> (Self, Rc<RefCell<String>>) {
        let emitter = BufferEmitter::new();
        let buffer = emitter.buffer();
        (Self::new(Box::new(emitter)), buffer)
    }

    /// Emit the error `err`.
    pub fn emit_err(&self, err: LumeError) {
        let mut inner = self.inner.borrow_mut();
        inner.err_count += 1;
        inner.emitter.emit_err(&err);
    }

    /// The number of errors emitted so far.
    pub fn err_count(&self) -> usize {
        self.inner.borrow().err_count
    }

    /// Did we emit any errors?
    pub fn had_errors(&self) -> bool {
        self.err_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{At, ParserError};

    #[test]
    fn test_buffered_handler_counts_and_records() {
        let (handler, buffer) = Handler::buffered();
        assert!(!handler.had_errors());

        handler.emit_err(ParserError::expected_expression(At::Token(";".into()), 1).into());
        handler.emit_err(ParserError::unexpected("'end'", At::End, 4).into());

        assert_eq!(handler.err_count(), 2);
        let text = buffer.borrow();
        assert!(text.contains("[line 1] Error at ';': Expected expression."));
        assert!(text.contains("[line 4] Error at end: Expected 'end'."));
    }
}
