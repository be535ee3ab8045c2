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

use crate::{Expression, Statement, Type};

use typed_arena::Arena;

/// The backing allocation of a single parse.
///
/// Every AST node of a tree lives in one arena and is reached through `&'a`
/// references; dropping the arena releases the whole tree at once. List
/// children (`Vec`s inside nodes) are owned by their node and are dropped
/// with it.
pub enum ArenaNode<'a> {
    Expression(Expression<'a>),
    Statement(Statement<'a>),
    Type(Type<'a>),
    Inner(AstContextInner<'a>),
}

pub struct AstContextInner<'a> {
    pub arena: &'a Arena<ArenaNode<'a>>,
}

impl<'a> AstContextInner<'a> {
    pub fn new(arena: &'a Arena<ArenaNode<'a>>) -> &'a Self {
        match arena.alloc(ArenaNode::Inner(AstContextInner { arena })) {
            ArenaNode::Inner(inner) => inner,
            _ => unreachable!(),
        }
    }

    /// Moves `expression` into the arena and returns its permanent location.
    pub fn alloc_expression(&self, expression: Expression<'a>) -> &'a Expression<'a> {
        match self.arena.alloc(ArenaNode::Expression(expression)) {
            ArenaNode::Expression(expression) => expression,
            _ => unreachable!(),
        }
    }

    /// Moves `statement` into the arena and returns its permanent location.
    pub fn alloc_statement(&self, statement: Statement<'a>) -> &'a Statement<'a> {
        match self.arena.alloc(ArenaNode::Statement(statement)) {
            ArenaNode::Statement(statement) => statement,
            _ => unreachable!(),
        }
    }

    /// Moves `type_` into the arena and returns its permanent location.
    pub fn alloc_type(&self, type_: Type<'a>) -> &'a Type<'a> {
        match self.arena.alloc(ArenaNode::Type(type_)) {
            ArenaNode::Type(type_) => type_,
            _ => unreachable!(),
        }
    }
}

pub type AstContext<'a> = &'a AstContextInner<'a>;
