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

use lume_errors::Result;

impl<'a> ParserContext<'a> {
    /// Parses the whole token stream into the root [`Statement::Block`].
    ///
    /// Every statement that fails to parse is reported through the handler
    /// and skipped to the next synchronization point, so a single parse
    /// surfaces one error per broken statement. Callers decide success by
    /// asking the handler, not from the returned tree.
    pub fn parse_program(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.token.span;
        let mut statements = Vec::new();

        while self.has_next() {
            // A stray `;` is an empty statement, at top level too.
            if self.eat(&Token::Semicolon) {
                continue;
            }
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    self.emit_err(err);
                    self.synchronize();
                }
            }
        }

        let span = if self.prev_token.span.hi >= start.lo {
            start + self.prev_token.span
        } else {
            start
        };
        Ok(self.alloc_statement(Statement::Block(Block { statements, span })))
    }

    /// Returns a [`FunctionDeclaration`]: `function IDENT funcsig block end`.
    pub(super) fn parse_function_declaration(&mut self) -> Result<FunctionDeclaration<'a>> {
        // Parse `function IDENT`.
        let start = self.expect(&Token::Function)?;
        let name = self.expect_identifier()?;

        // Parse generics, parameters, and return types.
        let signature = self.parse_function_signature()?;

        // Parse the function body.
        let block = self.parse_block()?;
        let end = self.expect(&Token::End)?;

        Ok(FunctionDeclaration {
            name,
            signature,
            block,
            span: start + end,
        })
    }

    pub(super) fn parse_function_declaration_statement(&mut self) -> Result<&'a Statement<'a>> {
        let function = self.parse_function_declaration()?;
        Ok(self.alloc_statement(Statement::Function(function)))
    }

    /// Returns a [`StructDeclaration`]:
    /// `struct IDENT generics? (param (',' param)*)? end`.
    pub(super) fn parse_struct_declaration(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::Struct)?;
        let name = self.expect_identifier()?;
        let generics = self.parse_generics()?;

        let mut fields = Vec::new();
        if !self.check(&Token::End) {
            fields.push(self.parse_typed_param()?);
            while self.eat(&Token::Comma) {
                fields.push(self.parse_typed_param()?);
            }
        }

        let end = self.expect(&Token::End)?;
        Ok(self.alloc_statement(Statement::Struct(StructDeclaration {
            name,
            generics,
            fields,
            span: start + end,
        })))
    }

    /// Returns a [`TraitDeclaration`]:
    /// `trait IDENT generics? ('function' IDENT funcsig)* end`.
    pub(super) fn parse_trait_declaration(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::Trait)?;
        let name = self.expect_identifier()?;
        let generics = self.parse_generics()?;

        let mut methods = Vec::new();
        while self.check(&Token::Function) {
            let method_start = self.expect(&Token::Function)?;
            let method_name = self.expect_identifier()?;
            let signature = self.parse_function_signature()?;
            methods.push(TraitMethod {
                name: method_name,
                signature,
                span: method_start + self.prev_token.span,
            });
        }

        let end = self.expect(&Token::End)?;
        Ok(self.alloc_statement(Statement::Trait(TraitDeclaration {
            name,
            generics,
            methods,
            span: start + end,
        })))
    }

    /// Returns an [`ImplDeclaration`]:
    /// `impl generics? IDENT typeargs? ('for' IDENT typeargs?)? function* end`.
    ///
    /// With a `for` clause the first name is the trait and the second the
    /// target; without one, the single name is the target.
    pub(super) fn parse_impl_declaration(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::Impl)?;
        let generics = self.parse_generics()?;

        let first = self.parse_impl_target()?;
        let (trait_, target) = if self.eat(&Token::For) {
            (Some(first), self.parse_impl_target()?)
        } else {
            (None, first)
        };

        let mut functions = Vec::new();
        while self.check(&Token::Function) {
            functions.push(self.parse_function_declaration()?);
        }

        let end = self.expect(&Token::End)?;
        Ok(self.alloc_statement(Statement::Impl(ImplDeclaration {
            generics,
            trait_,
            target,
            functions,
            span: start + end,
        })))
    }

    /// One side of an `impl` header: a name plus optional type arguments.
    fn parse_impl_target(&mut self) -> Result<ImplTarget<'a>> {
        let name = self.expect_identifier()?;
        let arguments = self.parse_type_arguments()?;
        Ok(ImplTarget { name, arguments })
    }
}
