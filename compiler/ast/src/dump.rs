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

//! A plain-text debug dump of the AST: one node per line, two spaces of
//! indentation per level, keywords matching the surface syntax.

use crate::{Expression, LiteralExpression, Statement};

use std::fmt::Write;

/// Renders `statement` (usually the root block) as an indented tree.
pub fn dump(statement: &Statement<'_>) -> String {
    let mut dumper = Dumper::default();
    dumper.statement(statement);
    dumper.out
}

#[derive(Default)]
struct Dumper {
    out: String,
    depth: usize,
}

impl Dumper {
    fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn statement(&mut self, statement: &Statement<'_>) {
        match statement {
            Statement::Assign(assign) => {
                self.line("ASSIGN");
                self.nested(|d| {
                    d.line("TARGETS");
                    d.nested(|d| assign.targets.iter().for_each(|t| d.expression(t)));
                    d.line("VALUES");
                    d.nested(|d| assign.values.iter().for_each(|v| d.expression(v)));
                });
            }
            Statement::Block(block) => {
                self.line("BLOCK");
                self.nested(|d| block.statements.iter().for_each(|s| d.statement(s)));
            }
            Statement::Break(_) => self.line("BREAK"),
            Statement::Conditional(conditional) => {
                self.line("IF");
                self.nested(|d| {
                    d.expression(conditional.condition);
                    d.line("THEN");
                    d.nested(|d| conditional.then.statements.iter().for_each(|s| d.statement(s)));
                    if let Some(otherwise) = conditional.otherwise {
                        d.line("ELSE");
                        d.nested(|d| d.statement(otherwise));
                    }
                });
            }
            Statement::Expression(expression) => {
                self.line("EXPR");
                self.nested(|d| d.expression(expression.expression));
            }
            Statement::Function(function) => {
                self.line(format!("FUNCTION {}{}", function.name, function.signature));
                self.nested(|d| function.block.statements.iter().for_each(|s| d.statement(s)));
            }
            Statement::GenericFor(for_) => {
                let mut header = String::from("FOR");
                for (i, variable) in for_.variables.iter().enumerate() {
                    let sep = if i == 0 { ' ' } else { ',' };
                    let _ = write!(header, "{sep}{variable}");
                }
                header.push_str(" IN");
                self.line(header);
                self.nested(|d| {
                    d.expression(for_.iterator);
                    d.line("DO");
                    d.nested(|d| for_.block.statements.iter().for_each(|s| d.statement(s)));
                });
            }
            Statement::Impl(impl_) => {
                let header = match &impl_.trait_ {
                    Some(trait_) => format!("IMPL {trait_} FOR {}", impl_.target),
                    None => format!("IMPL {}", impl_.target),
                };
                self.line(header);
                self.nested(|d| {
                    for function in &impl_.functions {
                        d.line(format!("FUNCTION {}{}", function.name, function.signature));
                        d.nested(|d| function.block.statements.iter().for_each(|s| d.statement(s)));
                    }
                });
            }
            Statement::Local(local) => {
                let mut header = String::from("LOCAL");
                for (i, variable) in local.variables.iter().enumerate() {
                    let sep = if i == 0 { ' ' } else { ',' };
                    let _ = write!(header, "{sep}{variable}");
                }
                self.line(header);
                self.nested(|d| local.values.iter().for_each(|v| d.expression(v)));
            }
            Statement::NumericFor(for_) => {
                self.line(format!("FOR {} =", for_.variable));
                self.nested(|d| {
                    d.expression(for_.start);
                    d.expression(for_.stop);
                    if let Some(step) = for_.step {
                        d.expression(step);
                    }
                    d.line("DO");
                    d.nested(|d| for_.block.statements.iter().for_each(|s| d.statement(s)));
                });
            }
            Statement::Repeat(repeat) => {
                self.line("REPEAT");
                self.nested(|d| repeat.block.statements.iter().for_each(|s| d.statement(s)));
                self.line("UNTIL");
                self.nested(|d| d.expression(repeat.until));
            }
            Statement::Return(return_) => {
                self.line("RETURN");
                self.nested(|d| return_.expressions.iter().for_each(|e| d.expression(e)));
            }
            Statement::Struct(struct_) => {
                self.line(format!("STRUCT {}", struct_.name));
                self.nested(|d| {
                    for field in &struct_.fields {
                        d.line(format!("FIELD {field}"));
                    }
                });
            }
            Statement::Trait(trait_) => {
                self.line(format!("TRAIT {}", trait_.name));
                self.nested(|d| {
                    for method in &trait_.methods {
                        d.line(format!("METHOD {}{}", method.name, method.signature));
                    }
                });
            }
            Statement::TypeAlias(alias) => {
                self.line(format!("TYPE {} = {}", alias.name, alias.type_));
            }
            Statement::While(while_) => {
                self.line("WHILE");
                self.nested(|d| {
                    d.expression(while_.condition);
                    d.line("DO");
                    d.nested(|d| while_.block.statements.iter().for_each(|s| d.statement(s)));
                });
            }
        }
    }

    fn expression(&mut self, expression: &Expression<'_>) {
        match expression {
            Expression::Binary(binary) => {
                self.line(format!("BINARY {}", binary.op));
                self.nested(|d| {
                    d.expression(binary.left);
                    d.expression(binary.right);
                });
            }
            Expression::Call(call) => {
                self.line("CALL");
                self.nested(|d| {
                    d.expression(call.function);
                    d.line("ARGS");
                    d.nested(|d| call.arguments.iter().for_each(|a| d.expression(a)));
                });
            }
            Expression::FieldAccess(field) => {
                self.line(format!("FIELD {}", field.name));
                self.nested(|d| d.expression(field.receiver));
            }
            Expression::Function(function) => {
                self.line(format!("FUNCTION {}", function.signature));
                self.nested(|d| function.block.statements.iter().for_each(|s| d.statement(s)));
            }
            Expression::Identifier(identifier) => self.line(format!("VAR {identifier}")),
            Expression::Index(index) => {
                self.line("INDEX");
                self.nested(|d| {
                    d.expression(index.receiver);
                    d.expression(index.index);
                });
            }
            Expression::Literal(literal) => match literal {
                LiteralExpression::Nil(_) => self.line("NIL"),
                LiteralExpression::Boolean(true, _) => self.line("TRUE"),
                LiteralExpression::Boolean(false, _) => self.line("FALSE"),
                LiteralExpression::Number(value, _) => self.line(format!("NUMBER {value}")),
                LiteralExpression::String(..) => self.line(format!("STRING {literal}")),
            },
            Expression::Struct(struct_) => {
                self.line("STRUCT_INIT");
                self.nested(|d| {
                    d.expression(struct_.name);
                    for member in &struct_.members {
                        d.line(format!("MEMBER {}", member.identifier));
                        d.nested(|d| d.expression(member.expression));
                    }
                });
            }
            Expression::Table(table) => {
                self.line("TABLE");
                self.nested(|d| {
                    for entry in &table.entries {
                        match &entry.key {
                            Some(key) => {
                                d.line(format!("KEY {key}"));
                                d.nested(|d| d.expression(entry.value));
                            }
                            None => d.expression(entry.value),
                        }
                    }
                });
            }
            Expression::Unary(unary) => {
                self.line(format!("UNARY {}", unary.op));
                self.nested(|d| d.expression(unary.receiver));
            }
            Expression::Vararg(_) => self.line("VARARG"),
        }
    }
}
