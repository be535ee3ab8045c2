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

impl<'a> ParserContext<'a> {
    /// Returns a [`Statement`] AST node if the next tokens represent a statement.
    pub(crate) fn parse_statement(&mut self) -> Result<&'a Statement<'a>> {
        match &self.token.token {
            Token::Type => self.parse_type_alias_statement(),
            Token::Impl => self.parse_impl_declaration(),
            Token::Trait => self.parse_trait_declaration(),
            Token::Struct => self.parse_struct_declaration(),
            Token::Function => self.parse_function_declaration_statement(),
            Token::Local => self.parse_local_statement(),
            Token::For => self.parse_for_statement(),
            Token::Repeat => self.parse_repeat_statement(),
            Token::While => self.parse_while_statement(),
            Token::If => self.parse_conditional_statement(),
            Token::Break => self.parse_break_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Returns a [`Block`] AST node: statements up to (but not including)
    /// one of the block-closing tokens `end`, `else`, `elseif`, `until`, or
    /// the end of input. The caller consumes the closer.
    ///
    /// A failed statement is reported, and the parser synchronizes to the
    /// next statement boundary instead of giving up on the block.
    pub(super) fn parse_block(&mut self) -> Result<Block<'a>> {
        let start = self.token.span;
        let mut statements = Vec::new();

        loop {
            // A stray `;` is an empty statement.
            if self.eat(&Token::Semicolon) {
                continue;
            }
            if matches!(
                self.token.token,
                Token::End | Token::Else | Token::ElseIf | Token::Until | Token::Eof
            ) {
                break;
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
        Ok(Block { statements, span })
    }

    /// Returns a [`TypeAliasStatement`]: `type IDENT = type ;`.
    fn parse_type_alias_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::Type)?;
        let name = self.expect_identifier()?;
        self.expect(&Token::Assign)?;
        let type_ = self.parse_type()?;
        let end = self.expect(&Token::Semicolon)?;

        Ok(self.alloc_statement(Statement::TypeAlias(TypeAliasStatement {
            name,
            type_,
            span: start + end,
        })))
    }

    /// Returns a [`LocalStatement`]:
    /// `local name (: type)? (, name (: type)?)* (= expr (, expr)*)? ;`.
    fn parse_local_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::Local)?;

        let mut variables = vec![self.parse_optionally_typed_param()?];
        while self.eat(&Token::Comma) {
            variables.push(self.parse_optionally_typed_param()?);
        }

        let mut values = Vec::new();
        if self.eat(&Token::Assign) {
            values.push(self.parse_expression()?);
            while self.eat(&Token::Comma) {
                values.push(self.parse_expression()?);
            }
        }

        let end = self.expect(&Token::Semicolon)?;
        Ok(self.alloc_statement(Statement::Local(LocalStatement {
            variables,
            values,
            span: start + end,
        })))
    }

    /// One variable of a `local` declaration; the annotation is optional here.
    fn parse_optionally_typed_param(&mut self) -> Result<Param<'a>> {
        let name = self.expect_identifier()?;
        let type_ = if self.eat(&Token::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let span = name.span + self.prev_token.span;
        Ok(Param { name, type_, span })
    }

    /// Returns a numeric or generic `for` statement; which one is decided
    /// by the token after the first name: `=` begins a numeric loop.
    fn parse_for_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::For)?;
        let variable = self.expect_identifier()?;

        if self.eat(&Token::Assign) {
            let start_value = self.parse_expression()?;
            self.expect(&Token::Comma)?;
            let stop = self.parse_expression()?;
            let step = if self.eat(&Token::Comma) {
                Some(self.parse_expression()?)
            } else {
                None
            };
            self.expect(&Token::Do)?;
            let block = self.parse_block()?;
            let end = self.expect(&Token::End)?;

            return Ok(self.alloc_statement(Statement::NumericFor(NumericForStatement {
                variable,
                start: start_value,
                stop,
                step,
                block,
                span: start + end,
            })));
        }

        let mut variables = vec![variable];
        while self.eat(&Token::Comma) {
            variables.push(self.expect_identifier()?);
        }
        self.expect(&Token::In)?;
        let iterator = self.parse_expression()?;
        self.expect(&Token::Do)?;
        let block = self.parse_block()?;
        let end = self.expect(&Token::End)?;

        Ok(self.alloc_statement(Statement::GenericFor(GenericForStatement {
            variables,
            iterator,
            block,
            span: start + end,
        })))
    }

    /// Returns a [`RepeatStatement`]: `repeat block until expr`.
    fn parse_repeat_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::Repeat)?;
        let block = self.parse_block()?;
        self.expect(&Token::Until)?;
        let until = self.parse_expression()?;

        Ok(self.alloc_statement(Statement::Repeat(RepeatStatement {
            span: start + until.span(),
            block,
            until,
        })))
    }

    /// Returns a [`WhileStatement`]: `while expr do block end`.
    fn parse_while_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::While)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::Do)?;
        let block = self.parse_block()?;
        let end = self.expect(&Token::End)?;

        Ok(self.alloc_statement(Statement::While(WhileStatement {
            condition,
            block,
            span: start + end,
        })))
    }

    /// Returns a [`ConditionalStatement`]:
    /// `if expr then block (elseif expr then block)* (else block)? end`.
    fn parse_conditional_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::If)?;
        let conditional = self.parse_conditional_rest(start)?;
        Ok(self.alloc_statement(Statement::Conditional(conditional)))
    }

    /// Parses a conditional from just after its `if`/`elseif` keyword. An
    /// `elseif` becomes a nested conditional in the else position, and the
    /// single final `end` closes the whole chain.
    fn parse_conditional_rest(&mut self, start: Span) -> Result<ConditionalStatement<'a>> {
        let condition = self.parse_expression()?;
        self.expect(&Token::Then)?;
        let then = self.parse_block()?;

        let otherwise = if self.eat(&Token::ElseIf) {
            let elseif_span = self.prev_token.span;
            let nested = self.parse_conditional_rest(elseif_span)?;
            Some(self.alloc_statement(Statement::Conditional(nested)))
        } else if self.eat(&Token::Else) {
            let block = self.parse_block()?;
            self.expect(&Token::End)?;
            Some(self.alloc_statement(Statement::Block(block)))
        } else {
            self.expect(&Token::End)?;
            None
        };

        Ok(ConditionalStatement {
            condition,
            then,
            otherwise,
            span: start + self.prev_token.span,
        })
    }

    /// Returns a [`BreakStatement`]: `break ;`.
    fn parse_break_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::Break)?;
        let end = self.expect(&Token::Semicolon)?;

        Ok(self.alloc_statement(Statement::Break(BreakStatement { span: start + end })))
    }

    /// Returns a [`ReturnStatement`]: `return (expr (, expr)*)? ;`.
    fn parse_return_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.expect(&Token::Return)?;

        let mut expressions = Vec::new();
        if !self.check(&Token::Semicolon) {
            expressions.push(self.parse_expression()?);
            while self.eat(&Token::Comma) {
                expressions.push(self.parse_expression()?);
            }
        }

        let end = self.expect(&Token::Semicolon)?;
        Ok(self.alloc_statement(Statement::Return(ReturnStatement {
            expressions,
            span: start + end,
        })))
    }

    /// Returns an assignment or expression statement: a comma-separated
    /// expression list, then `= values ;` for an assignment. Without `=`,
    /// the list must be a single expression followed by `;`.
    fn parse_expression_statement(&mut self) -> Result<&'a Statement<'a>> {
        let start = self.token.span;

        let mut expressions = vec![self.parse_expression()?];
        while self.eat(&Token::Comma) {
            expressions.push(self.parse_expression()?);
        }

        if self.eat(&Token::Assign) {
            let mut values = vec![self.parse_expression()?];
            while self.eat(&Token::Comma) {
                values.push(self.parse_expression()?);
            }
            let end = self.expect(&Token::Semicolon)?;

            return Ok(self.alloc_statement(Statement::Assign(AssignStatement {
                targets: expressions,
                values,
                span: start + end,
            })));
        }

        if expressions.len() > 1 {
            return Err(ParserError::expected_assignment(self.at(), self.line()).into());
        }

        let expression = expressions[0];
        let end = self.expect(&Token::Semicolon)?;
        Ok(self.alloc_statement(Statement::Expression(ExpressionStatement {
            expression,
            span: start + end,
        })))
    }
}
