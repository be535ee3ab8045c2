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

use crate::parse;

use lume_ast::*;
use lume_errors::emitter::Handler;
use lume_span::create_session_if_not_set_then;

use typed_arena::Arena;

/// Parses `source` and hands the root block plus the handler (and the text
/// of any diagnostics) to `check`.
fn with_parsed<R>(source: &str, check: impl FnOnce(&Statement<'_>, &Handler, &str) -> R) -> R {
    create_session_if_not_set_then(|_| {
        let (handler, buffer) = Handler::buffered();
        let arena = Arena::new();
        let context = AstContextInner::new(&arena);
        let root = parse(&handler, context, source).expect("parse_program should not fail");
        let errors = buffer.borrow().clone();
        check(root, &handler, &errors)
    })
}

/// The statements of the root block.
fn root_statements<'s, 'a>(root: &'s Statement<'a>) -> &'s [&'a Statement<'a>] {
    match root {
        Statement::Block(block) => &block.statements,
        other => panic!("the root must be a block, got {other}"),
    }
}

/// Parses a source consisting of a single statement and returns its
/// pretty-printed form.
fn reprint(source: &str) -> String {
    with_parsed(source, |root, handler, errors| {
        assert!(!handler.had_errors(), "unexpected errors for {source:?}: {errors}");
        root.to_string()
    })
}

#[test]
fn test_empty_source_is_an_empty_block() {
    for source in ["", "   \n\t ", "-- nothing here\n"] {
        with_parsed(source, |root, handler, _| {
            assert!(!handler.had_errors());
            assert!(root_statements(root).is_empty());
        });
    }
}

#[test]
fn test_stray_semicolon_is_an_empty_statement() {
    with_parsed(";", |root, handler, _| {
        assert!(!handler.had_errors());
        assert!(root_statements(root).is_empty());
    });
    with_parsed("local x = 1;;;", |root, handler, _| {
        assert!(!handler.had_errors());
        assert_eq!(root_statements(root).len(), 1);
    });
}

#[test]
fn test_local_with_type() {
    with_parsed("local x: number = 42;", |root, handler, _| {
        assert!(!handler.had_errors());
        let [statement] = root_statements(root) else {
            panic!("expected one statement")
        };
        let Statement::Local(local) = statement else {
            panic!("expected a local, got {statement}")
        };

        assert_eq!(local.variables.len(), 1);
        assert_eq!(local.variables[0].name.name, "x");
        assert_eq!(local.variables[0].type_, Some(Type::Number));

        let [value] = &local.values[..] else {
            panic!("expected one value")
        };
        assert!(
            matches!(value, Expression::Literal(LiteralExpression::Number(v, _)) if *v == 42.0)
        );
    });
}

#[test]
fn test_local_without_annotation_or_value() {
    with_parsed("local x, y: bool;", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Local(local) = root_statements(root)[0] else {
            panic!("expected a local")
        };
        assert_eq!(local.variables[0].type_, None);
        assert_eq!(local.variables[1].type_, Some(Type::Boolean));
        assert!(local.values.is_empty());
    });
}

#[test]
fn test_generic_function_declaration() {
    let source = "function id<T>(x: T): T\n  return x;\nend";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Function(function) = root_statements(root)[0] else {
            panic!("expected a function declaration")
        };

        assert_eq!(function.name.name, "id");

        let [generic] = &function.signature.generics[..] else {
            panic!("expected one generic")
        };
        assert_eq!(generic.name.name, "T");
        assert!(generic.constraints.is_empty());

        let [param] = &function.signature.params[..] else {
            panic!("expected one param")
        };
        assert_eq!(param.name.name, "x");
        assert!(
            matches!(&param.type_, Some(Type::User(user)) if user.name.name == "T" && user.arguments.is_empty())
        );

        assert_eq!(function.signature.returns.len(), 1);

        let [body] = &function.block.statements[..] else {
            panic!("expected one body statement")
        };
        let Statement::Return(return_) = body else {
            panic!("expected a return")
        };
        assert!(matches!(return_.expressions[0], Expression::Identifier(id) if id.name == "x"));
    });
}

#[test]
fn test_generic_bounds() {
    let source = "function f<T: Show + Eq, U>(x: T): U return x; end";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Function(function) = root_statements(root)[0] else {
            panic!("expected a function declaration")
        };
        let generics = &function.signature.generics;
        assert_eq!(generics.len(), 2);
        assert_eq!(generics[0].constraints.len(), 2);
        assert!(matches!(&generics[0].constraints[1], Type::User(user) if user.name.name == "Eq"));
        assert!(generics[1].constraints.is_empty());
    });
}

#[test]
fn test_impl_of_trait_for_struct() {
    let source = "impl Show for Point\n  function render(self: Point): string return \"\"; end\nend";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Impl(impl_) = root_statements(root)[0] else {
            panic!("expected an impl")
        };

        assert!(impl_.generics.is_empty());
        let trait_ = impl_.trait_.as_ref().expect("the for clause names a trait");
        assert_eq!(trait_.name.name, "Show");
        assert!(trait_.arguments.is_empty());
        assert_eq!(impl_.target.name.name, "Point");
        assert!(impl_.target.arguments.is_empty());

        let [function] = &impl_.functions[..] else {
            panic!("expected one function")
        };
        assert_eq!(function.name.name, "render");
        assert_eq!(function.signature.params[0].name.name, "self");
    });
}

#[test]
fn test_impl_without_trait() {
    with_parsed("impl<T> Box<T> end", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Impl(impl_) = root_statements(root)[0] else {
            panic!("expected an impl")
        };
        assert!(impl_.trait_.is_none());
        assert_eq!(impl_.generics.len(), 1);
        assert_eq!(impl_.target.name.name, "Box");
        assert_eq!(impl_.target.arguments.len(), 1);
    });
}

#[test]
fn test_trait_declaration() {
    let source = "trait Container<T>\n  function get(self: Container<T>, i: number): T\n  function size(self: Container<T>): number\nend";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Trait(trait_) = root_statements(root)[0] else {
            panic!("expected a trait")
        };
        assert_eq!(trait_.name.name, "Container");
        assert_eq!(trait_.generics.len(), 1);
        assert_eq!(trait_.methods.len(), 2);
        assert_eq!(trait_.methods[1].name.name, "size");
        assert_eq!(trait_.methods[1].signature.returns, vec![Type::Number]);
    });
}

#[test]
fn test_struct_declaration() {
    with_parsed("struct Point x: number, y: number end", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Struct(struct_) = root_statements(root)[0] else {
            panic!("expected a struct")
        };
        assert_eq!(struct_.name.name, "Point");
        assert_eq!(struct_.fields.len(), 2);
        assert_eq!(struct_.fields[1].name.name, "y");
        assert_eq!(struct_.fields[1].type_, Some(Type::Number));
    });
}

#[test]
fn test_if_elseif_else_shape() {
    let source = "if a then b(); elseif c then d(); else e(); end";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Conditional(outer) = root_statements(root)[0] else {
            panic!("expected a conditional")
        };
        assert!(matches!(outer.condition, Expression::Identifier(id) if id.name == "a"));
        assert_eq!(outer.then.statements.len(), 1);

        let Some(Statement::Conditional(middle)) = outer.otherwise else {
            panic!("elseif must nest a conditional")
        };
        assert!(matches!(middle.condition, Expression::Identifier(id) if id.name == "c"));

        let Some(Statement::Block(else_block)) = middle.otherwise else {
            panic!("else must be a block")
        };
        assert_eq!(else_block.statements.len(), 1);
    });
}

#[test]
fn test_struct_initializer() {
    let source = "local p: Point = Point { x: 1, y: 2 };";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Local(local) = root_statements(root)[0] else {
            panic!("expected a local")
        };
        let Expression::Struct(struct_) = local.values[0] else {
            panic!("expected a struct initializer, got {}", local.values[0])
        };
        assert!(matches!(struct_.name, Expression::Identifier(id) if id.name == "Point"));
        assert_eq!(struct_.members.len(), 2);
        assert_eq!(struct_.members[0].identifier.name, "x");
        assert!(matches!(
            struct_.members[1].expression,
            Expression::Literal(LiteralExpression::Number(v, _)) if *v == 2.0
        ));
    });
}

#[test]
fn test_struct_initializer_with_namespaced_head() {
    with_parsed("p = geo.Point { x: 1 };", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Assign(assign) = root_statements(root)[0] else {
            panic!("expected an assignment")
        };
        let Expression::Struct(struct_) = assign.values[0] else {
            panic!("expected a struct initializer")
        };
        assert!(matches!(struct_.name, Expression::FieldAccess(_)));
    });
}

#[test]
fn test_table_constructor() {
    with_parsed("t = { 1, 2, x: 3 };", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Assign(assign) = root_statements(root)[0] else {
            panic!("expected an assignment")
        };
        let Expression::Table(table) = assign.values[0] else {
            panic!("expected a table")
        };
        assert_eq!(table.entries.len(), 3);
        assert!(table.entries[0].key.is_none());
        assert_eq!(table.entries[2].key.unwrap().name, "x");
    });
}

/// Digs the expression out of `return <expr>;`.
fn return_expression(source: &str, check: impl FnOnce(&Expression<'_>)) {
    with_parsed(source, |root, handler, errors| {
        assert!(!handler.had_errors(), "unexpected errors for {source:?}: {errors}");
        let Statement::Return(return_) = root_statements(root)[0] else {
            panic!("expected a return")
        };
        check(return_.expressions[0]);
    });
}

#[test]
fn test_pow_is_right_associative() {
    return_expression("return 2^3^2;", |expr| {
        let Expression::Binary(outer) = expr else {
            panic!("expected a binary expression")
        };
        assert_eq!(outer.op, BinaryOperation::Pow);
        assert!(
            matches!(outer.left, Expression::Literal(LiteralExpression::Number(v, _)) if *v == 2.0)
        );
        let Expression::Binary(inner) = outer.right else {
            panic!("expected the right operand to nest")
        };
        assert_eq!(inner.op, BinaryOperation::Pow);
    });
}

#[test]
fn test_concat_is_right_associative() {
    return_expression("return a .. b .. c;", |expr| {
        let Expression::Binary(outer) = expr else {
            panic!("expected a binary expression")
        };
        assert_eq!(outer.op, BinaryOperation::Concat);
        assert!(matches!(outer.left, Expression::Identifier(_)));
        assert!(matches!(
            outer.right,
            Expression::Binary(inner) if inner.op == BinaryOperation::Concat
        ));
    });
}

#[test]
fn test_subtraction_is_left_associative() {
    return_expression("return a - b - c;", |expr| {
        let Expression::Binary(outer) = expr else {
            panic!("expected a binary expression")
        };
        assert_eq!(outer.op, BinaryOperation::Sub);
        assert!(matches!(
            outer.left,
            Expression::Binary(inner) if inner.op == BinaryOperation::Sub
        ));
        assert!(matches!(outer.right, Expression::Identifier(_)));
    });
}

#[test]
fn test_factor_binds_tighter_than_term() {
    return_expression("return 1 + 2 * 3;", |expr| {
        let Expression::Binary(outer) = expr else {
            panic!("expected a binary expression")
        };
        assert_eq!(outer.op, BinaryOperation::Add);
        assert!(matches!(
            outer.right,
            Expression::Binary(inner) if inner.op == BinaryOperation::Mul
        ));
    });
}

#[test]
fn test_negate_binds_looser_than_pow() {
    return_expression("return -a^b;", |expr| {
        let Expression::Unary(unary) = expr else {
            panic!("expected a unary expression")
        };
        assert_eq!(unary.op, UnaryOperation::Negate);
        assert!(matches!(
            unary.receiver,
            Expression::Binary(inner) if inner.op == BinaryOperation::Pow
        ));
    });
}

#[test]
fn test_negate_binds_tighter_than_term() {
    return_expression("return -a + b;", |expr| {
        let Expression::Binary(outer) = expr else {
            panic!("expected a binary expression")
        };
        assert_eq!(outer.op, BinaryOperation::Add);
        assert!(matches!(
            outer.left,
            Expression::Unary(inner) if inner.op == UnaryOperation::Negate
        ));
    });
}

#[test]
fn test_not_takes_comparisons() {
    return_expression("return not a == b;", |expr| {
        let Expression::Unary(unary) = expr else {
            panic!("expected a unary expression")
        };
        assert_eq!(unary.op, UnaryOperation::Not);
        assert!(matches!(
            unary.receiver,
            Expression::Binary(inner) if inner.op == BinaryOperation::Eq
        ));
    });
}

#[test]
fn test_not_stops_at_and() {
    return_expression("return not a and b;", |expr| {
        let Expression::Binary(outer) = expr else {
            panic!("expected a binary expression")
        };
        assert_eq!(outer.op, BinaryOperation::And);
        assert!(matches!(
            outer.left,
            Expression::Unary(inner) if inner.op == UnaryOperation::Not
        ));
    });
}

#[test]
fn test_grouping_produces_no_node() {
    return_expression("return (a + b) * c;", |expr| {
        let Expression::Binary(outer) = expr else {
            panic!("expected a binary expression")
        };
        assert_eq!(outer.op, BinaryOperation::Mul);
        assert!(matches!(
            outer.left,
            Expression::Binary(inner) if inner.op == BinaryOperation::Add
        ));
    });
}

#[test]
fn test_postfix_chain() {
    return_expression("return a.b[1](2).c;", |expr| {
        // Outermost is the trailing field access.
        let Expression::FieldAccess(field) = expr else {
            panic!("expected a field access")
        };
        assert_eq!(field.name.name, "c");
        let Expression::Call(call) = field.receiver else {
            panic!("expected a call")
        };
        assert_eq!(call.arguments.len(), 1);
        assert!(matches!(call.function, Expression::Index(_)));
    });
}

#[test]
fn test_function_expression_value() {
    let source = "local f = function(x: number): number return x; end;";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Local(local) = root_statements(root)[0] else {
            panic!("expected a local")
        };
        let Expression::Function(function) = local.values[0] else {
            panic!("expected a function literal")
        };
        assert_eq!(function.signature.params.len(), 1);
        assert_eq!(function.block.statements.len(), 1);
    });
}

#[test]
fn test_numeric_for_disambiguation() {
    with_parsed("for i = 1, 10, 2 do break; end", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::NumericFor(for_) = root_statements(root)[0] else {
            panic!("expected a numeric for")
        };
        assert_eq!(for_.variable.name, "i");
        assert!(for_.step.is_some());
        assert!(matches!(for_.block.statements[0], Statement::Break(_)));
    });

    with_parsed("for k, v in pairs(t) do f(k); end", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::GenericFor(for_) = root_statements(root)[0] else {
            panic!("expected a generic for")
        };
        assert_eq!(for_.variables.len(), 2);
        assert!(matches!(for_.iterator, Expression::Call(_)));
    });
}

#[test]
fn test_while_and_repeat() {
    with_parsed("while x < 3 do x = x + 1; end", |root, handler, _| {
        assert!(!handler.had_errors());
        assert!(matches!(root_statements(root)[0], Statement::While(_)));
    });
    with_parsed("repeat f(); until done", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Repeat(repeat) = root_statements(root)[0] else {
            panic!("expected a repeat")
        };
        assert_eq!(repeat.block.statements.len(), 1);
        assert!(matches!(repeat.until, Expression::Identifier(_)));
    });
}

#[test]
fn test_type_grammar() {
    // `[[` would open a long-bracket string, so nested arrays need a space.
    let source = "type Matrix = [ [number] ]; type F = function(x: number): number; type M = Map<string, [number]>;";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let statements = root_statements(root);

        let Statement::TypeAlias(matrix) = statements[0] else {
            panic!("expected a type alias")
        };
        let Type::Array(inner) = &matrix.type_ else {
            panic!("expected an array type")
        };
        assert!(matches!(inner, Type::Array(Type::Number)));

        let Statement::TypeAlias(f) = statements[1] else {
            panic!("expected a type alias")
        };
        let Type::Function(signature) = &f.type_ else {
            panic!("expected a function type")
        };
        assert_eq!(signature.params.len(), 1);
        assert_eq!(signature.returns, vec![Type::Number]);

        let Statement::TypeAlias(m) = statements[2] else {
            panic!("expected a type alias")
        };
        let Type::User(user) = &m.type_ else {
            panic!("expected a user type")
        };
        assert_eq!(user.name.name, "Map");
        assert_eq!(user.arguments.len(), 2);
        assert!(matches!(&user.arguments[1], Type::Array(_)));
    });
}

#[test]
fn test_nil_and_void_types() {
    with_parsed("local a: nil; local b: void;", |root, handler, _| {
        assert!(!handler.had_errors());
        let statements = root_statements(root);
        let Statement::Local(a) = statements[0] else { panic!() };
        assert_eq!(a.variables[0].type_, Some(Type::Nil));
        let Statement::Local(b) = statements[1] else { panic!() };
        assert_eq!(b.variables[0].type_, Some(Type::Void));
    });
}

#[test]
fn test_parallel_assignment() {
    with_parsed("a, b[1] = 1, 2, 3;", |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Assign(assign) = root_statements(root)[0] else {
            panic!("expected an assignment")
        };
        // Arity mismatch is fine here; the semantic layer owns that check.
        assert_eq!(assign.targets.len(), 2);
        assert_eq!(assign.values.len(), 3);
        assert!(matches!(assign.targets[1], Expression::Index(_)));
    });
}

#[test]
fn test_expression_list_without_assign_is_an_error() {
    with_parsed("a, b;", |_, handler, errors| {
        assert!(handler.had_errors());
        assert!(errors.contains("Expected '=' after expression list."), "got: {errors}");
    });
}

#[test]
fn test_missing_semicolon_diagnostic_format() {
    with_parsed("local x = 1", |_, handler, errors| {
        assert_eq!(handler.err_count(), 1);
        assert_eq!(errors, "[line 1] Error at end: Expected ';'.\n");
    });
}

#[test]
fn test_diagnostic_quotes_the_offending_token() {
    with_parsed("local x = ;", |_, handler, errors| {
        assert_eq!(handler.err_count(), 1);
        assert_eq!(errors, "[line 1] Error at ';': Expected expression.\n");
    });
}

#[test]
fn test_lexical_error_is_reported_with_its_message() {
    with_parsed("local s = \"abc", |_, handler, errors| {
        assert!(handler.had_errors());
        assert!(errors.contains("[line 1] Error: Unterminated string."), "got: {errors}");
    });
}

#[test]
fn test_recovery_reports_one_error_per_statement() {
    let source = "local = 1;\nreturn = ;\nlocal ok = 2;";
    with_parsed(source, |root, handler, errors| {
        assert_eq!(handler.err_count(), 2, "got: {errors}");
        assert!(errors.contains("[line 1]"));
        assert!(errors.contains("[line 2]"));
        // The healthy statement after the broken ones still parses.
        assert!(root_statements(root)
            .iter()
            .any(|s| matches!(s, Statement::Local(local) if local.variables[0].name.name == "ok")));
    });
}

#[test]
fn test_cascading_errors_are_suppressed_within_a_statement() {
    // Everything after the first failure inside this statement would also
    // be wrong; only one report may surface.
    with_parsed("f(1 + + 2;", |_, handler, _| {
        assert_eq!(handler.err_count(), 1);
    });
}

#[test]
fn test_error_inside_block_recovers_locally() {
    let source = "function f()\n  local = 1;\n  return 2;\nend";
    with_parsed(source, |root, handler, _| {
        assert_eq!(handler.err_count(), 1);
        // The function itself survives, with the healthy return inside.
        let Statement::Function(function) = root_statements(root)[0] else {
            panic!("expected the function to survive")
        };
        assert!(function
            .block
            .statements
            .iter()
            .any(|s| matches!(s, Statement::Return(_))));
    });
}

#[test]
fn test_vararg_expression() {
    return_expression("return f(...);", |expr| {
        let Expression::Call(call) = expr else {
            panic!("expected a call")
        };
        assert!(matches!(call.arguments[0], Expression::Vararg(_)));
    });
}

#[test]
fn test_number_conversion() {
    return_expression("return 12.5;", |expr| {
        assert!(matches!(
            expr,
            Expression::Literal(LiteralExpression::Number(v, _)) if *v == 12.5
        ));
    });
}

#[test]
fn test_print_reparse_fixpoint() {
    let sources = [
        "local x: number = 42;",
        "local s = \"a\\tb\\000c\";",
        "local t = { 1, 2, x: 3 };",
        "local e = {};",
        "p = Point { x: 1, y: 2 };",
        "return 2^3^2;",
        "return a .. b .. c;",
        "return -a^b, not a == b, #xs;",
        "return (1 + 2) * 3 % 4 / 5;",
        "if a then b(); elseif c then d(); else e(); end",
        "while x < 3 do x = x + 1; end",
        "repeat f(); until done",
        "for i = 1, 10, 2 do break; end",
        "for k, v in pairs(t) do f(k, v); end",
        "function id<T: Show + Eq>(x: T): T return x; end",
        "local f = function(x: number): number return x * x; end;",
        "struct Point<T> x: T, y: T end",
        "trait Show function render(self: Point): string end",
        "impl<T> Show for Point<T> function render(self: Point): string return \"\"; end end",
        "impl Point function origin(): Point return Point { x: 0, y: 0 }; end end",
        "type Pairs = [Map<string, number>];",
        "return a.b[1](2).c;",
        "return x and y or not z;",
    ];

    for source in sources {
        let once = reprint(source);
        let twice = reprint(&once);
        assert_eq!(once, twice, "printing {source:?} is not a fixpoint");
    }
}

#[test]
fn test_reprint_preserves_escapes() {
    // U+0001 followed by the digits "23" must not collapse into `\123`.
    let source = "local s = \"\\00123\";";
    with_parsed(source, |root, handler, _| {
        assert!(!handler.had_errors());
        let Statement::Local(local) = root_statements(root)[0] else {
            panic!("expected a local")
        };
        let Expression::Literal(LiteralExpression::String(value, _)) = local.values[0] else {
            panic!("expected a string")
        };
        value.with_str(|s| {
            assert_eq!(s.chars().next().unwrap() as u32, 1);
            assert_eq!(&s[1..], "23");
        });
    });
    let once = reprint(source);
    assert_eq!(once, reprint(&once));
}

#[test]
fn test_dump_shape() {
    with_parsed("local x: number = 42;", |root, handler, _| {
        assert!(!handler.had_errors());
        let dumped = dump(root);
        assert_eq!(dumped, "BLOCK\n  LOCAL x: number\n    NUMBER 42\n");
    });
}

#[test]
fn test_line_numbers_in_diagnostics_follow_long_strings() {
    // The long string spans three lines; the error is on line 4.
    let source = "local s = [[\na\nb]]\nreturn;;";
    with_parsed(source, |_, handler, errors| {
        // `return;` is fine, the second `;` is an empty statement, but the
        // missing semicolon after the local is on line 4.
        assert_eq!(handler.err_count(), 1, "got: {errors}");
        assert!(errors.contains("[line 4]"), "got: {errors}");
    });
}
