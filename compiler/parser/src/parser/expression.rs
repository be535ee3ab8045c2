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

use lume_errors::{At, ParserError, Result};

/// The binding powers of the expression grammar, loosest to tightest.
/// `parse_precedence` keeps consuming infix operators while the upcoming
/// token's precedence is at least the minimum it was entered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    None,
    Or,
    And,
    Comparison,
    Concat,
    Term,
    Factor,
    Unary,
    Pow,
    Call,
    Primary,
}

impl Precedence {
    /// The infix precedence of `token`, or `None` if it is not an infix
    /// operator.
    fn of(token: &Token) -> Self {
        match token {
            Token::Or => Precedence::Or,
            Token::And => Precedence::And,
            Token::Eq | Token::NotEq | Token::Lt | Token::LtEq | Token::Gt | Token::GtEq => Precedence::Comparison,
            Token::DotDot => Precedence::Concat,
            Token::Add | Token::Minus => Precedence::Term,
            Token::Mul | Token::Div | Token::Rem => Precedence::Factor,
            Token::Pow => Precedence::Pow,
            Token::LeftParen | Token::LeftSquare | Token::Dot | Token::LeftCurly => Precedence::Call,
            _ => Precedence::None,
        }
    }

    /// The next-tighter level; used for the right operand of
    /// left-associative operators.
    fn next(self) -> Self {
        match self {
            Precedence::None => Precedence::Or,
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Comparison,
            Precedence::Comparison => Precedence::Concat,
            Precedence::Concat => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary => Precedence::Pow,
            Precedence::Pow => Precedence::Call,
            Precedence::Call | Precedence::Primary => Precedence::Primary,
        }
    }
}

impl<'a> ParserContext<'a> {
    /// Returns an [`Expression`] AST node if the next tokens represent an
    /// expression.
    pub(crate) fn parse_expression(&mut self) -> Result<&'a Expression<'a>> {
        self.parse_precedence(Precedence::Or)
    }

    /// The Pratt loop: parses a prefix expression, then folds in infix and
    /// postfix operators while their precedence is at least `min`.
    pub(super) fn parse_precedence(&mut self, min: Precedence) -> Result<&'a Expression<'a>> {
        let mut expr = self.parse_prefix_expression()?;
        while Precedence::of(&self.token.token) >= min {
            expr = self.parse_infix_expression(expr)?;
        }
        Ok(expr)
    }

    /// Constructs a binary expression `left op right`.
    fn bin_expr(
        &self,
        left: &'a Expression<'a>,
        right: &'a Expression<'a>,
        op: BinaryOperation,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Binary(BinaryExpression {
            span: left.span() + right.span(),
            op,
            left,
            right,
        }))
    }

    /// Parses one infix or postfix operator applied to `left`. The current
    /// token is known to be an infix operator.
    fn parse_infix_expression(&mut self, left: &'a Expression<'a>) -> Result<&'a Expression<'a>> {
        match &self.token.token {
            // Postfix operators all bind at `Call`.
            Token::LeftParen => {
                let (arguments, span) = self.parse_paren_comma_list(|p| p.parse_expression())?;
                Ok(self.alloc_expression(Expression::Call(CallExpression {
                    span: left.span() + span,
                    function: left,
                    arguments,
                })))
            }
            Token::LeftSquare => {
                self.bump();
                let index = self.parse_expression()?;
                let end = self.expect(&Token::RightSquare)?;
                Ok(self.alloc_expression(Expression::Index(IndexExpression {
                    span: left.span() + end,
                    receiver: left,
                    index,
                })))
            }
            Token::Dot => {
                self.bump();
                let name = self.expect_identifier()?;
                Ok(self.alloc_expression(Expression::FieldAccess(FieldAccessExpression {
                    span: left.span() + name.span,
                    receiver: left,
                    name,
                })))
            }
            Token::LeftCurly => self.parse_struct_expression(left),
            _ => {
                let precedence = Precedence::of(&self.token.token);
                let Some(op) = self.eat_bin_op() else {
                    return self.unexpected("a binary operator");
                };
                // `^` and `..` are right-associative: their right operand
                // re-enters at the same level instead of one tighter.
                let min = match op {
                    BinaryOperation::Pow | BinaryOperation::Concat => precedence,
                    _ => precedence.next(),
                };
                let right = self.parse_precedence(min)?;
                Ok(self.bin_expr(left, right, op))
            }
        }
    }

    /// Eats the current token as a binary operator.
    fn eat_bin_op(&mut self) -> Option<BinaryOperation> {
        let op = match &self.token.token {
            Token::Or => BinaryOperation::Or,
            Token::And => BinaryOperation::And,
            Token::Eq => BinaryOperation::Eq,
            Token::NotEq => BinaryOperation::Neq,
            Token::Lt => BinaryOperation::Lt,
            Token::LtEq => BinaryOperation::Le,
            Token::Gt => BinaryOperation::Gt,
            Token::GtEq => BinaryOperation::Ge,
            Token::DotDot => BinaryOperation::Concat,
            Token::Add => BinaryOperation::Add,
            Token::Minus => BinaryOperation::Sub,
            Token::Mul => BinaryOperation::Mul,
            Token::Div => BinaryOperation::Div,
            Token::Rem => BinaryOperation::Rem,
            Token::Pow => BinaryOperation::Pow,
            _ => return None,
        };
        self.bump();
        Some(op)
    }

    /// Returns an [`Expression`] AST node for a prefix parselet: a literal,
    /// identifier, grouping, table constructor, function literal, or unary
    /// expression.
    fn parse_prefix_expression(&mut self) -> Result<&'a Expression<'a>> {
        // Grouping: `(` expr `)` yields the inner expression, no extra node.
        if self.eat(&Token::LeftParen) {
            let expression = self.parse_expression()?;
            self.expect(&Token::RightParen)?;
            return Ok(expression);
        }

        if self.check(&Token::LeftCurly) {
            return self.parse_table_expression();
        }

        if self.check(&Token::Function) {
            return self.parse_function_expression();
        }

        if self.eat_any(&[Token::Minus, Token::Not, Token::Hash]) {
            let op_span = self.prev_token.span;
            let op = match self.prev_token.token {
                Token::Minus => UnaryOperation::Negate,
                Token::Not => UnaryOperation::Not,
                Token::Hash => UnaryOperation::Length,
                _ => unreachable!("`parse_prefix_expression` shouldn't produce this"),
            };
            // `-` and `#` bind tighter than any binary operator except `^`,
            // so `-a^b` is `-(a^b)` while `-a+b` is `(-a)+b`. `not` also
            // takes comparisons: `not a == b` is `not (a == b)`.
            let min = match op {
                UnaryOperation::Not => Precedence::Comparison,
                _ => Precedence::Pow,
            };
            let receiver = self.parse_precedence(min)?;
            return Ok(self.alloc_expression(Expression::Unary(UnaryExpression {
                span: op_span + receiver.span(),
                op,
                receiver,
            })));
        }

        let SpannedToken { token, span } = self.token.clone();
        self.bump();

        Ok(match token {
            Token::Nil => self.alloc_expression(Expression::Literal(LiteralExpression::Nil(span))),
            Token::True => self.alloc_expression(Expression::Literal(LiteralExpression::Boolean(true, span))),
            Token::False => self.alloc_expression(Expression::Literal(LiteralExpression::Boolean(false, span))),
            Token::Number(text) => {
                // Standard decimal-to-double conversion of the lexeme. The
                // grammar only produces digits and a dot, but a literal can
                // still overflow to infinity.
                let value = text.with_str(|s| s.parse::<f64>().ok());
                match value.filter(|v| v.is_finite()) {
                    Some(value) => {
                        self.alloc_expression(Expression::Literal(LiteralExpression::Number(value, span)))
                    }
                    None => {
                        return Err(ParserError::invalid_number(
                            text,
                            At::Token(text.to_string()),
                            span.line,
                        )
                        .into())
                    }
                }
            }
            Token::StringLit(value) => {
                self.alloc_expression(Expression::Literal(LiteralExpression::String(value, span)))
            }
            Token::Ellipsis => self.alloc_expression(Expression::Vararg(VarargExpression { span })),
            Token::Ident(name) => self.alloc_expression(Expression::Identifier(Identifier::new(name, span))),
            Token::Error(message) => {
                return Err(ParserError::lexical(message.to_string(), span.line).into());
            }
            Token::Eof => return Err(ParserError::expected_expression(At::End, span.line).into()),
            token => {
                return Err(ParserError::expected_expression(At::Token(token.to_string()), span.line).into());
            }
        })
    }

    /// Returns an [`Expression`] AST node for a struct initialization
    /// expression applied to `name`: `Point { x: 1, y: 2 }`.
    fn parse_struct_expression(&mut self, name: &'a Expression<'a>) -> Result<&'a Expression<'a>> {
        let (members, span) = self.parse_list(Token::LeftCurly, Token::RightCurly, Token::Comma, |p| {
            let identifier = p.expect_identifier()?;
            p.expect(&Token::Colon)?;
            let expression = p.parse_expression()?;
            Ok(StructVariableInitializer { identifier, expression })
        })?;

        Ok(self.alloc_expression(Expression::Struct(StructExpression {
            span: name.span() + span,
            name,
            members,
        })))
    }

    /// Returns an [`Expression`] AST node for a table constructor:
    /// `{ 1, 2, x: 3 }`. Entries are keyed when written `name: value`.
    fn parse_table_expression(&mut self) -> Result<&'a Expression<'a>> {
        let (entries, span) = self.parse_list(Token::LeftCurly, Token::RightCurly, Token::Comma, |p| {
            let keyed = matches!(p.token.token, Token::Ident(_)) && p.look_ahead(1, |t| t.token == Token::Colon);
            if keyed {
                let key = p.expect_identifier()?;
                p.expect(&Token::Colon)?;
                let value = p.parse_expression()?;
                Ok(TableEntry { key: Some(key), value })
            } else {
                Ok(TableEntry {
                    key: None,
                    value: p.parse_expression()?,
                })
            }
        })?;

        Ok(self.alloc_expression(Expression::Table(TableExpression { entries, span })))
    }

    /// Returns an [`Expression`] AST node for an anonymous function literal:
    /// `function(x: number): number return x; end`.
    fn parse_function_expression(&mut self) -> Result<&'a Expression<'a>> {
        let start = self.expect(&Token::Function)?;
        let signature = self.parse_function_signature()?;
        let block = self.parse_block()?;
        let end = self.expect(&Token::End)?;

        Ok(self.alloc_expression(Expression::Function(FunctionExpression {
            signature,
            block,
            span: start + end,
        })))
    }
}
