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

use crate::tokenizer::*;

use lume_ast::*;
use lume_errors::emitter::Handler;
use lume_errors::{At, LumeError, ParserError, Result};
use lume_span::Span;

use std::fmt::Display;
use std::mem;

/// Tokens that may begin a statement; used as synchronization points when
/// recovering from a syntax error.
const STATEMENT_TOKENS: &[Token] = &[
    Token::Break,
    Token::For,
    Token::Function,
    Token::If,
    Token::Impl,
    Token::Local,
    Token::Repeat,
    Token::Return,
    Token::Struct,
    Token::Trait,
    Token::Type,
    Token::While,
];

/// The parser state: a cursor over the token stream, the arena the AST is
/// built into, and the error-recovery flag.
pub struct ParserContext<'a> {
    /// Handler used to side-channel emit errors from the parser.
    pub(crate) handler: &'a Handler,
    /// The arena context the AST is allocated into.
    pub(crate) context: AstContext<'a>,
    /// The tokens not yet consumed, kept reversed so advancing is a `pop`.
    tokens: Vec<SpannedToken>,
    /// The token the parser is looking at.
    pub(crate) token: SpannedToken,
    /// The most recently consumed token; statements read spans and operator
    /// tokens back out of this after a `bump`.
    pub(crate) prev_token: SpannedToken,
    /// Set while recovering from an error; suppresses further reports until
    /// the next synchronization point.
    pub(crate) panic_mode: bool,
}

impl<'a> ParserContext<'a> {
    /// Creates a parser over `tokens` that allocates into `context` and
    /// reports through `handler`.
    pub fn new(handler: &'a Handler, context: AstContext<'a>, mut tokens: Vec<SpannedToken>) -> Self {
        // Reversed so the next token comes off the back.
        tokens.reverse();

        // `WhiteSpace` is never emitted by the tokenizer, so it is safe to use
        // here as a "nothing consumed yet" sentinel distinct from a real `Eof`.
        let prev_token = SpannedToken {
            token: Token::WhiteSpace,
            span: Span::dummy(),
        };
        let token = tokens.pop().unwrap_or_else(|| SpannedToken {
            token: Token::Eof,
            span: prev_token.span,
        });

        Self {
            handler,
            context,
            prev_token,
            token,
            tokens,
            panic_mode: false,
        }
    }

    /// Advances the cursor by one token: the current token moves into
    /// `prev_token`, and the next queued token (or `Eof` once the queue is
    /// drained) becomes current.
    pub fn bump(&mut self) {
        // Advancing again after EOF means some loop stopped making progress.
        if let Token::Eof = self.prev_token.token {
            panic!("attempted to bump the parser past EOF (may be stuck in a loop)");
        }

        let next_token = self.tokens.pop().unwrap_or_else(|| SpannedToken {
            token: Token::Eof,
            span: self.token.span,
        });

        self.prev_token = mem::replace(&mut self.token, next_token);
    }

    /// Is the current token `tok`?
    pub fn check(&self, tok: &Token) -> bool {
        &self.token.token == tok
    }

    /// Bumps past the current token if it is `token`; returns whether it was.
    pub fn eat(&mut self, token: &Token) -> bool {
        self.check(token).then(|| self.bump()).is_some()
    }

    /// Bumps past the current token if it matches one of `tokens`; returns
    /// whether anything was consumed.
    pub fn eat_any(&mut self, tokens: &[Token]) -> bool {
        tokens.iter().any(|x| self.check(x)).then(|| self.bump()).is_some()
    }

    /// Applies `looker` to the token `dist` positions ahead of the current
    /// one, without consuming anything. Distance 0 is the current token;
    /// positions past the end of the stream read as `Eof`.
    pub fn look_ahead<R>(&self, dist: usize, looker: impl FnOnce(&SpannedToken) -> R) -> R {
        if dist == 0 {
            return looker(&self.token);
        }

        let eof = SpannedToken {
            token: Token::Eof,
            span: Span::dummy(),
        };

        let idx = match self.tokens.len().checked_sub(dist) {
            None => return looker(&eof),
            Some(idx) => idx,
        };

        looker(self.tokens.get(idx).unwrap_or(&eof))
    }

    /// Is there anything left before `Eof`?
    pub fn has_next(&self) -> bool {
        !matches!(self.token.token, Token::Eof)
    }

    /// The source line of the current token.
    pub(crate) fn line(&self) -> u32 {
        self.token.span.line
    }

    /// What a diagnostic at the current token should point at.
    pub(crate) fn at(&self) -> At {
        match &self.token.token {
            Token::Eof => At::End,
            token => At::Token(token.to_string()),
        }
    }

    /// Returns an unexpected-token error at the current token.
    ///
    /// A lexical error token reports its own message instead, so the text
    /// the tokenizer produced is what the user sees.
    pub(crate) fn unexpected<T>(&self, expected: impl Display) -> Result<T> {
        if let Token::Error(message) = &self.token.token {
            return Err(ParserError::lexical(message.to_string(), self.line()).into());
        }
        Err(ParserError::unexpected(expected, self.at(), self.line()).into())
    }

    /// Consumes `token` and returns its span, or errors without advancing.
    pub fn expect(&mut self, token: &Token) -> Result<Span> {
        if self.eat(token) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(format_args!("'{token}'"))
        }
    }

    /// Consumes whichever of `tokens` is current and returns its span, or
    /// errors without advancing.
    pub fn expect_any(&mut self, tokens: &[Token]) -> Result<Span> {
        if self.eat_any(tokens) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(
                tokens
                    .iter()
                    .map(|x| format!("'{x}'"))
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
    }

    /// Consumes the current token as an [`Identifier`] if it is one.
    pub fn eat_identifier(&mut self) -> Option<Identifier> {
        if let Token::Ident(name) = self.token.token {
            self.bump();
            return Some(Identifier::new(name, self.prev_token.span));
        }
        None
    }

    /// Like [`Self::eat_identifier`], but anything else is an error.
    pub fn expect_identifier(&mut self) -> Result<Identifier> {
        match self.eat_identifier() {
            Some(identifier) => Ok(identifier),
            None => {
                if let Token::Error(message) = &self.token.token {
                    return Err(ParserError::lexical(message.to_string(), self.line()).into());
                }
                Err(ParserError::expected_identifier(self.at(), self.line()).into())
            }
        }
    }

    /// Emits the error through the handler unless panic mode suppresses it.
    pub(crate) fn emit_err(&mut self, err: LumeError) {
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;
        self.handler.emit_err(err);
    }

    /// Leaves panic mode by skipping tokens until a statement boundary: a
    /// token that may begin a statement, or just past a `;`.
    pub(crate) fn synchronize(&mut self) {
        self.panic_mode = false;

        while self.has_next() {
            if self.prev_token.token == Token::Semicolon {
                return;
            }
            if STATEMENT_TOKENS.contains(&self.token.token) {
                return;
            }
            self.bump();
        }
    }

    /// Parses a delimited list: `open`, then `inner` elements separated by
    /// `sep`, then `close`. The list may be empty; a trailing separator is
    /// not accepted.
    pub(super) fn parse_list<T>(
        &mut self,
        open: Token,
        close: Token,
        sep: Token,
        mut inner: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<(Vec<T>, Span)> {
        let mut list = Vec::new();

        // Parse opening delimiter.
        let open_span = self.expect(&open)?;

        if !self.check(&close) {
            loop {
                list.push(inner(self)?);
                if !self.eat(&sep) {
                    break;
                }
            }
        }

        // Parse closing delimiter.
        let span = open_span + self.expect(&close)?;

        Ok((list, span))
    }

    /// A comma-separated [`Self::parse_list`] between parentheses.
    pub(super) fn parse_paren_comma_list<T>(
        &mut self,
        f: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<(Vec<T>, Span)> {
        self.parse_list(Token::LeftParen, Token::RightParen, Token::Comma, f)
    }

    /// Allocation shorthands into the arena behind `self.context`.
    pub(crate) fn alloc_expression(&self, expression: Expression<'a>) -> &'a Expression<'a> {
        self.context.alloc_expression(expression)
    }

    pub(crate) fn alloc_statement(&self, statement: Statement<'a>) -> &'a Statement<'a> {
        self.context.alloc_statement(statement)
    }

    pub(crate) fn alloc_type(&self, type_: Type<'a>) -> &'a Type<'a> {
        self.context.alloc_type(type_)
    }
}
