// tests/builder_tests.rs

use rust_decimal::Decimal;
use slate_lang::ast::{
    BinOp, ConditionalStatement, DeclarationKind, Expression, LiteralValue, Span, Statement,
    Token, TypeAnnotation,
};
use slate_lang::builder::{
    BuildFailure, BuildResult, FailureKind, build_assignment, build_binary,
    build_boolean_literal, build_call, build_conditional, build_expression, build_identifier,
    build_number_literal, build_program, build_statement, build_string_literal,
};
use slate_lang::lexer::Lexer;

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize().unwrap()
}

fn program(source: &str) -> Vec<Statement> {
    build_program(&tokens(source)).unwrap().statements
}

fn program_err(source: &str) -> BuildFailure {
    build_program(&tokens(source)).unwrap_err()
}

fn conditional(statement: &Statement) -> &ConditionalStatement {
    match statement {
        Statement::Conditional(node) => node,
        other => panic!("Expected conditional, got {:?}", other),
    }
}

fn expression(source: &str) -> Expression {
    build_expression(&tokens(source)).unwrap()
}

fn assigned_name(statement: &Statement) -> &str {
    match statement {
        Statement::Expression(node) => match &node.expression {
            Expression::Assignment(assignment) => &assignment.left.name,
            other => panic!("Expected assignment, got {:?}", other),
        },
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

// ============================================================================
// Conditional blocks
// ============================================================================

#[test]
fn test_if_else_splits_bodies_in_order() {
    let statements = program("if (x) { a = 1; b = 2; } else { c = 3; }");
    assert_eq!(statements.len(), 1);

    let node = conditional(&statements[0]);
    assert_eq!(node.test.name, "x");
    let consequent: Vec<&str> = node.consequent.iter().map(assigned_name).collect();
    let alternate: Vec<&str> = node.alternate.iter().map(assigned_name).collect();
    assert_eq!(consequent, vec!["a", "b"]);
    assert_eq!(alternate, vec!["c"]);
}

#[test]
fn test_nested_else_binds_innermost() {
    let statements = program("if (a) { if (b) { x = 1; } else { x = 2; } }");
    let outer = conditional(&statements[0]);
    assert!(outer.alternate.is_empty());
    assert_eq!(outer.consequent.len(), 1);

    let inner = conditional(&outer.consequent[0]);
    assert_eq!(inner.test.name, "b");
    assert_eq!(inner.consequent.len(), 1);
    assert_eq!(inner.alternate.len(), 1);
}

#[test]
fn test_else_after_nested_block_belongs_to_nested() {
    // The nested conditional's else follows its own closing brace, not the outer one.
    let statements = program("if (a) { if (b) { if (c) { x = 1; } } else { x = 2; } } else { x = 3; }");
    let outer = conditional(&statements[0]);
    assert_eq!(outer.alternate.len(), 1);

    let middle = conditional(&outer.consequent[0]);
    assert_eq!(middle.test.name, "b");
    assert_eq!(middle.alternate.len(), 1);

    let innermost = conditional(&middle.consequent[0]);
    assert_eq!(innermost.test.name, "c");
    assert!(innermost.alternate.is_empty());
}

#[test]
fn test_round_trip_at_depth() {
    let source = "if (x) { a = 1; if (y) { if (z) { b = 2; } } c = 3; } else { d = 4; e = 5; }";
    let node = conditional(&program(source)[0]).clone();

    assert_eq!(node.consequent.len(), 3);
    assert_eq!(assigned_name(&node.consequent[0]), "a");
    assert!(matches!(node.consequent[1], Statement::Conditional(_)));
    assert_eq!(assigned_name(&node.consequent[2]), "c");

    let alternate: Vec<&str> = node.alternate.iter().map(assigned_name).collect();
    assert_eq!(alternate, vec!["d", "e"]);
}

#[test]
fn test_empty_blocks() {
    let node = build_conditional(&tokens("if (x) { } else { }")).unwrap();
    assert!(node.consequent.is_empty());
    assert!(node.alternate.is_empty());
}

#[test]
fn test_missing_closing_brace_is_failure() {
    let inputs = [
        "if (x) {",
        "if (x) { y = 1;",
        "if (x) { if (y) { z = 1; }",
        "if (x) { y = 1; } else { y = 2;",
        "if (x) { if (y) { z = 1; } else { z = 2; }",
    ];
    for input in inputs {
        assert!(
            build_conditional(&tokens(input)).is_err(),
            "conditional builder accepted: {}",
            input
        );
        assert!(
            build_program(&tokens(input)).is_err(),
            "program builder accepted: {}",
            input
        );
    }
}

#[test]
fn test_unexpected_else() {
    let err = program_err("else { x = 1; }");
    assert_eq!(err.message, "unexpected 'else'");
    assert_eq!(err.span, Some(Span::new(1, 1, 5)));

    assert!(build_program(&tokens("if (x) { a = 1; } else { b = 2; } else { c = 3; }")).is_err());
}

#[test]
fn test_condition_must_be_identifier() {
    let err = build_statement(&tokens("if (1) { x = 1; }")).unwrap_err();
    assert_eq!(err.kind, FailureKind::Malformed);
    assert_eq!(err.message, "expected identifier after '(', found '1'");
}

#[test]
fn test_statement_left_open_in_block() {
    let err = build_conditional(&tokens("if (x) { y = 1 }")).unwrap_err();
    assert_eq!(err.message, "expected ';' at end of statement");
}

#[test]
fn test_bare_block_is_rejected() {
    assert!(build_conditional(&tokens("if (x) { { y = 1; } }")).is_err());
    assert!(build_program(&tokens("{ y = 1; }")).is_err());
}

// ============================================================================
// Programs
// ============================================================================

#[test]
fn test_declaration_then_conditional() {
    let statements = program("let x: number = 5; if (x) { x = 10; } else { x = 0; }");
    assert_eq!(statements.len(), 2);
    assert!(matches!(statements[0], Statement::VariableDeclaration(_)));
    assert!(matches!(statements[1], Statement::Conditional(_)));
}

#[test]
fn test_statements_after_conditional() {
    let statements = program("if (x) { y = 1; } println(y); z = 2;");
    assert_eq!(statements.len(), 3);
    assert_eq!(assigned_name(&statements[2]), "z");
}

#[test]
fn test_missing_semicolon_at_end() {
    let err = program_err("x = 1");
    assert_eq!(err.message, "expected ';' at end of statement");
    assert_eq!(err.span, Some(Span::new(1, 6, 6)));
}

#[test]
fn test_missing_semicolon_before_if() {
    let err = program_err("x = 1 if (x) { }");
    assert_eq!(err.message, "expected ';' before 'if'");
}

#[test]
fn test_empty_program() {
    assert!(program("").is_empty());
    assert!(program("// only a comment").is_empty());
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_declaration_shape() {
    let statements = program("let x: number = 5;");
    let Statement::VariableDeclaration(node) = &statements[0] else {
        panic!("Expected declaration");
    };
    assert_eq!(node.kind, DeclarationKind::Let);
    assert_eq!(node.span, Span::new(1, 1, 19));

    let declarator = &node.declarations[0];
    assert_eq!(declarator.id.name, "x");
    assert_eq!(declarator.var_type, TypeAnnotation::Number);
    let Some(Expression::Literal(literal)) = &declarator.init else {
        panic!("Expected literal initializer");
    };
    assert_eq!(literal.value, LiteralValue::Number(Decimal::from(5)));
}

#[test]
fn test_multiple_declarators() {
    let statements = program("const a: string = \"x\", b: string = a, c: boolean;");
    let Statement::VariableDeclaration(node) = &statements[0] else {
        panic!("Expected declaration");
    };
    assert_eq!(node.kind, DeclarationKind::Const);
    assert_eq!(node.declarations.len(), 3);
    assert!(node.declarations[2].init.is_none());
    assert_eq!(node.declarations[2].var_type, TypeAnnotation::Boolean);
}

#[test]
fn test_declaration_needs_type() {
    let err = program_err("let x = 5;");
    assert_eq!(err.message, "expected ':' after variable name, found '='");
}

#[test]
fn test_invalid_assignment_target() {
    let err = program_err("1 = 2;");
    assert_eq!(err.message, "invalid assignment target");
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_precedence() {
    let Expression::Binary(add) = expression("1 + 2 * 3") else {
        panic!("Expected binary expression");
    };
    assert_eq!(add.operator, BinOp::Add);
    assert!(matches!(*add.right, Expression::Binary(ref mul) if mul.operator == BinOp::Multiply));
}

#[test]
fn test_parentheses_override_precedence() {
    let Expression::Binary(mul) = expression("(1 + 2) * 3") else {
        panic!("Expected binary expression");
    };
    assert_eq!(mul.operator, BinOp::Multiply);
    assert!(matches!(*mul.left, Expression::Binary(ref add) if add.operator == BinOp::Add));
}

#[test]
fn test_subtraction_is_left_associative() {
    let Expression::Binary(outer) = expression("a - b - c") else {
        panic!("Expected binary expression");
    };
    assert!(matches!(*outer.left, Expression::Binary(_)));
    assert!(matches!(*outer.right, Expression::Identifier(ref id) if id.name == "c"));
}

#[test]
fn test_negation_is_zero_minus() {
    let Expression::Binary(node) = expression("-x") else {
        panic!("Expected binary expression");
    };
    assert_eq!(node.operator, BinOp::Subtract);
    assert!(matches!(*node.left, Expression::Literal(ref l) if l.value == LiteralValue::Number(Decimal::ZERO)));
    assert_eq!(node.left.span(), Span::new(1, 1, 1));
    assert!(node.is_negation());

    let Expression::Binary(written) = expression("0 - x") else {
        panic!("Expected binary expression");
    };
    assert!(!written.is_negation());
}

#[test]
fn test_call_arguments() {
    let Expression::Call(call) = expression("println(a + 1)") else {
        panic!("Expected call");
    };
    assert_eq!(call.callee.name, "println");
    assert_eq!(call.arguments.len(), 1);
    assert!(matches!(call.arguments[0], Expression::Binary(_)));
}

#[test]
fn test_unbalanced_parentheses() {
    assert!(build_expression(&tokens("(1 + 2")).is_err());
    assert!(build_expression(&tokens("1 + 2)")).is_err());
}

// ============================================================================
// Whole-slice builders
// ============================================================================

fn accepts<T>(builder: fn(&[Token]) -> BuildResult<T>, source: &str) -> bool {
    builder(&tokens(source)).is_ok()
}

#[test]
fn test_builders_consume_the_whole_slice() {
    let cases: Vec<(&str, bool, bool)> = vec![
        ("true", accepts(build_boolean_literal, "true"), true),
        ("true ;", accepts(build_boolean_literal, "true ;"), false),
        ("1", accepts(build_number_literal, "1"), true),
        ("1 2", accepts(build_number_literal, "1 2"), false),
        ("\"a\"", accepts(build_string_literal, "\"a\""), true),
        ("\"a\" \"b\"", accepts(build_string_literal, "\"a\" \"b\""), false),
        ("x", accepts(build_identifier, "x"), true),
        ("x y", accepts(build_identifier, "x y"), false),
        ("f(1)", accepts(build_call, "f(1)"), true),
        ("f(1) + 2", accepts(build_call, "f(1) + 2"), false),
        ("1 + 2", accepts(build_binary, "1 + 2"), true),
        ("1 + 2 3", accepts(build_binary, "1 + 2 3"), false),
        ("x y", accepts(build_binary, "x y"), false),
        ("x = 1", accepts(build_assignment, "x = 1"), true),
        ("x = 1 2", accepts(build_assignment, "x = 1 2"), false),
    ];
    for (source, accepted, expected) in cases {
        assert_eq!(accepted, expected, "source: {}", source);
    }
}

#[test]
fn test_trailing_tokens_after_call_are_malformed() {
    let failure = build_call(&tokens("f(1) + 2")).unwrap_err();
    assert!(failure.is_malformed());
    assert_eq!(failure.span, Some(Span::new(1, 6, 7)));
}
