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

use super::*;

use lume_errors::{ParserError, Result};
use lume_span::sym;

impl<'a> ParserContext<'a> {
    /// Returns a [`Type`] AST node if the next tokens represent a type:
    ///
    /// ```text
    /// type := '[' type ']'
    ///       | 'function' funcsig
    ///       | 'nil'
    ///       | IDENT ('<' type (',' type)* '>')?
    /// ```
    ///
    /// The names `void`, `bool`, `number` and `string` map to primitive
    /// types; any other identifier becomes a [`UserType`]. References to
    /// generic parameters also come out as `UserType` heads here; semantic
    /// analysis resolves them later.
    pub fn parse_type(&mut self) -> Result<Type<'a>> {
        match &self.token.token {
            Token::LeftSquare => {
                self.bump();
                let inner = self.parse_type()?;
                self.expect(&Token::RightSquare)?;
                Ok(Type::Array(self.alloc_type(inner)))
            }
            Token::Function => {
                self.bump();
                Ok(Type::Function(self.parse_function_signature()?))
            }
            // `nil` is a keyword, so it does not arrive as an identifier.
            Token::Nil => {
                self.bump();
                Ok(Type::Nil)
            }
            Token::Ident(_) => {
                let name = self.expect_identifier()?;
                Ok(match name.name {
                    n if n == sym::void => Type::Void,
                    n if n == sym::bool => Type::Boolean,
                    n if n == sym::number => Type::Number,
                    n if n == sym::string => Type::String,
                    _ => {
                        let arguments = self.parse_type_arguments()?;
                        Type::User(UserType { name, arguments })
                    }
                })
            }
            Token::Error(message) => {
                Err(ParserError::lexical(message.to_string(), self.line()).into())
            }
            _ => Err(ParserError::expected_type(self.at(), self.line()).into()),
        }
    }

    /// Parses `'<' type (',' type)* '>'` if the next token is `<`, and
    /// returns an empty list otherwise.
    pub(super) fn parse_type_arguments(&mut self) -> Result<Vec<Type<'a>>> {
        if !self.check(&Token::Lt) {
            return Ok(Vec::new());
        }
        let (arguments, _) = self.parse_list(Token::Lt, Token::Gt, Token::Comma, |p| p.parse_type())?;
        Ok(arguments)
    }

    /// Parses `'<' generic (',' generic)* '>'` if the next token is `<`,
    /// where each generic is `IDENT (':' type ('+' type)*)?`. Returns an
    /// empty list otherwise.
    pub(super) fn parse_generics(&mut self) -> Result<Vec<GenericParam<'a>>> {
        if !self.check(&Token::Lt) {
            return Ok(Vec::new());
        }
        let (generics, _) = self.parse_list(Token::Lt, Token::Gt, Token::Comma, |p| {
            let name = p.expect_identifier()?;
            let mut constraints = Vec::new();
            if p.eat(&Token::Colon) {
                constraints.push(p.parse_type()?);
                while p.eat(&Token::Add) {
                    constraints.push(p.parse_type()?);
                }
            }
            let span = name.span + p.prev_token.span;
            Ok(GenericParam {
                name,
                constraints,
                span,
            })
        })?;
        Ok(generics)
    }

    /// Parses a function signature:
    ///
    /// ```text
    /// funcsig := generics? '(' (param (',' param)*)? ')' (':' type (',' type)*)?
    /// param   := IDENT ':' type
    /// ```
    pub(super) fn parse_function_signature(&mut self) -> Result<FunctionSignature<'a>> {
        let generics = self.parse_generics()?;
        let (params, _) = self.parse_paren_comma_list(|p| p.parse_typed_param())?;

        let mut returns = Vec::new();
        if self.eat(&Token::Colon) {
            returns.push(self.parse_type()?);
            while self.eat(&Token::Comma) {
                returns.push(self.parse_type()?);
            }
        }

        Ok(FunctionSignature {
            generics,
            params,
            returns,
        })
    }

    /// A `name: type` parameter; the annotation is required here, unlike in
    /// `local` declarations.
    pub(super) fn parse_typed_param(&mut self) -> Result<Param<'a>> {
        let name = self.expect_identifier()?;
        self.expect(&Token::Colon)?;
        let type_ = self.parse_type()?;
        let span = name.span + self.prev_token.span;
        Ok(Param {
            name,
            type_: Some(type_),
            span,
        })
    }
}
