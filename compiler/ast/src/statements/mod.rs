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

use crate::Node;
use lume_span::Span;

use serde::Serialize;
use std::fmt;

pub mod assign;
pub use assign::*;

pub mod block;
pub use block::*;

pub mod break_;
pub use break_::*;

pub mod conditional;
pub use conditional::*;

pub mod expression;
pub use expression::*;

pub mod function;
pub use function::*;

pub mod impl_;
pub use impl_::*;

pub mod iteration;
pub use iteration::*;

pub mod local;
pub use local::*;

pub mod repeat_;
pub use repeat_::*;

pub mod return_;
pub use return_::*;

pub mod struct_;
pub use struct_::*;

pub mod trait_;
pub use trait_::*;

pub mod type_alias;
pub use type_alias::*;

pub mod while_;
pub use while_::*;

/// Program statement that defines some action (or declaration) to be carried out.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Statement<'a> {
    /// An assignment statement.
    Assign(AssignStatement<'a>),
    /// A block statement.
    Block(Block<'a>),
    /// A `break` statement.
    Break(BreakStatement),
    /// An `if` statement.
    Conditional(ConditionalStatement<'a>),
    /// An expression statement.
    Expression(ExpressionStatement<'a>),
    /// A function declaration.
    Function(FunctionDeclaration<'a>),
    /// A generic `for` statement.
    GenericFor(GenericForStatement<'a>),
    /// An `impl` declaration.
    Impl(ImplDeclaration<'a>),
    /// A `local` declaration.
    Local(LocalStatement<'a>),
    /// A numeric `for` statement.
    NumericFor(NumericForStatement<'a>),
    /// A `repeat`/`until` statement.
    Repeat(RepeatStatement<'a>),
    /// A `return` statement.
    Return(ReturnStatement<'a>),
    /// A `struct` declaration.
    Struct(StructDeclaration<'a>),
    /// A `trait` declaration.
    Trait(TraitDeclaration<'a>),
    /// A type alias.
    TypeAlias(TypeAliasStatement<'a>),
    /// A `while` statement.
    While(WhileStatement<'a>),
}

impl Node for Statement<'_> {
    fn span(&self) -> Span {
        match self {
            Statement::Assign(n) => n.span(),
            Statement::Block(n) => n.span(),
            Statement::Break(n) => n.span(),
            Statement::Conditional(n) => n.span(),
            Statement::Expression(n) => n.span(),
            Statement::Function(n) => n.span(),
            Statement::GenericFor(n) => n.span(),
            Statement::Impl(n) => n.span(),
            Statement::Local(n) => n.span(),
            Statement::NumericFor(n) => n.span(),
            Statement::Repeat(n) => n.span(),
            Statement::Return(n) => n.span(),
            Statement::Struct(n) => n.span(),
            Statement::Trait(n) => n.span(),
            Statement::TypeAlias(n) => n.span(),
            Statement::While(n) => n.span(),
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign(n) => n.fmt(f),
            Statement::Block(n) => n.fmt(f),
            Statement::Break(n) => n.fmt(f),
            Statement::Conditional(n) => n.fmt(f),
            Statement::Expression(n) => n.fmt(f),
            Statement::Function(n) => n.fmt(f),
            Statement::GenericFor(n) => n.fmt(f),
            Statement::Impl(n) => n.fmt(f),
            Statement::Local(n) => n.fmt(f),
            Statement::NumericFor(n) => n.fmt(f),
            Statement::Repeat(n) => n.fmt(f),
            Statement::Return(n) => n.fmt(f),
            Statement::Struct(n) => n.fmt(f),
            Statement::Trait(n) => n.fmt(f),
            Statement::TypeAlias(n) => n.fmt(f),
            Statement::While(n) => n.fmt(f),
        }
    }
}
