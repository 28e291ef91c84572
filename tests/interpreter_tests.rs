// tests/interpreter_tests.rs

use slate_lang::environment::{Environment, VarType, VariableInfo};
use slate_lang::interpreter::{InterpretError, Interpreter};
use slate_lang::io::{BufferedOutput, QueuedInput};
use slate_lang::{Lexer, Program, Version, build_program};

fn parse(source: &str) -> Program {
    let tokens = Lexer::new(source).tokenize().unwrap();
    build_program(&tokens).unwrap()
}

fn version(text: &str) -> Version {
    text.parse().unwrap()
}

/// Runs `source` from an empty environment, returning the result and everything printed.
fn run(source: &str, lang_version: &str) -> (Result<Environment, InterpretError>, String) {
    run_with_input(source, lang_version, Vec::<&str>::new()).0
}

fn run_with_input(
    source: &str,
    lang_version: &str,
    answers: Vec<&str>,
) -> ((Result<Environment, InterpretError>, String), Vec<String>) {
    let program = parse(source);
    let mut output = BufferedOutput::new();
    let mut input = QueuedInput::new(answers);
    let result = Interpreter::new(version(lang_version), &mut output, &mut input)
        .run(&Environment::new(), &program);
    ((result, output.text), input.prompts)
}

fn value_of<'a>(env: &'a Environment, name: &str) -> Option<&'a str> {
    env.get(name).and_then(|info| info.value.as_deref())
}

// ============================================================================
// Conditionals
// ============================================================================

#[test]
fn test_truthy_branch_assigns() {
    let (result, _) = run(
        "let x: number = 5; if (x) { x = 10; } else { x = 0; }",
        "1.0.0",
    );
    let env = result.unwrap();
    assert_eq!(value_of(&env, "x"), Some("10"));
    assert_eq!(env.get("x").unwrap().var_type, VarType::Number);
}

#[test]
fn test_falsy_branch_assigns() {
    let (result, _) = run(
        "let x: number = 0; if (x) { x = 10; } else { x = 1; }",
        "1.0.0",
    );
    assert_eq!(value_of(&result.unwrap(), "x"), Some("1"));
}

#[test]
fn test_immutable_assignment_in_branch_keeps_environment() {
    let program = parse("const x: number = 5; if (x) { x = 10; } else { x = 0; }");
    let mut output = BufferedOutput::new();
    let mut input = QueuedInput::default();
    let mut interpreter = Interpreter::new(version("1.0.0"), &mut output, &mut input);

    let declared = interpreter
        .execute(&Environment::new(), &program.statements[0])
        .unwrap();
    let err = interpreter
        .execute(&declared, &program.statements[1])
        .unwrap_err();

    assert!(matches!(err, InterpretError::ImmutableAssignment { ref name, .. } if name == "x"));
    assert_eq!(value_of(&declared, "x"), Some("5"));
    assert!(!declared.get("x").unwrap().is_mutable);
}

#[test]
fn test_string_truthiness() {
    let (_, printed) = run(
        "let s: string = \"\"; if (s) { println(\"yes\"); } else { println(\"no\"); }",
        "1.0.0",
    );
    assert_eq!(printed, "no\n");
}

#[test]
fn test_boolean_condition() {
    let (_, printed) = run(
        "let ok: boolean = false; if (ok) { println(1); } else { println(2); }",
        "1.1.0",
    );
    assert_eq!(printed, "2\n");
}

#[test]
fn test_blocks_share_environment() {
    let (result, _) = run(
        "let flag: number = 1; if (flag) { let inner: string = \"in\"; }",
        "1.0.0",
    );
    assert_eq!(value_of(&result.unwrap(), "inner"), Some("in"));
}

#[test]
fn test_nested_conditionals_run_innermost_else() {
    let (_, printed) = run(
        "let a: number = 1; let b: number = 0; if (a) { if (b) { println(\"b\"); } else { println(\"not b\"); } }",
        "1.0.0",
    );
    assert_eq!(printed, "not b\n");
}

// ============================================================================
// Immutability and types
// ============================================================================

#[test]
fn test_const_rejects_any_value() {
    for value in ["1", "\"text\"", "true"] {
        let source = format!("const c: string = \"a\"; c = {};", value);
        let (result, _) = run(&source, "1.1.0");
        assert!(
            matches!(result, Err(InterpretError::ImmutableAssignment { .. })),
            "assigning {} to a const",
            value
        );
    }
}

#[test]
fn test_type_mismatch_matrix() {
    let samples = [
        ("number", "1"),
        ("string", "\"s\""),
        ("boolean", "true"),
    ];
    for (declared, init) in samples {
        for (actual, value) in samples {
            let source = format!("let v: {} = {}; v = {};", declared, init, value);
            let (result, _) = run(&source, "1.1.0");
            if declared == actual {
                assert!(result.is_ok(), "{} = {} should succeed", declared, value);
            } else {
                assert!(
                    matches!(result, Err(InterpretError::TypeMismatch { .. })),
                    "{} = {} should be a type mismatch, got {:?}",
                    declared,
                    value,
                    result
                );
            }
        }
    }
}

#[test]
fn test_declaration_initializer_type_is_checked() {
    let (result, _) = run("let n: number = \"five\";", "1.0.0");
    let Err(InterpretError::TypeMismatch { expected, found, .. }) = result else {
        panic!("Expected type mismatch, got {:?}", result);
    };
    assert_eq!(expected, VarType::Number);
    assert_eq!(found, VarType::String);
}

#[test]
fn test_const_without_initializer() {
    let (result, _) = run("const c: number;", "1.0.0");
    assert!(matches!(
        result,
        Err(InterpretError::ConstantWithoutInitializer { .. })
    ));
}

#[test]
fn test_uninitialized_read() {
    let (result, _) = run("let x: number; println(x);", "1.0.0");
    assert!(matches!(result, Err(InterpretError::UninitializedVariable { .. })));
}

#[test]
fn test_assignment_to_undeclared() {
    let (result, _) = run("y = 1;", "1.0.0");
    assert!(matches!(result, Err(InterpretError::VariableNotFound { ref name, .. }) if name == "y"));
}

#[test]
fn test_redeclaration_rebinds() {
    let (result, _) = run("let x: number = 1; let x: string = \"a\";", "1.0.0");
    let env = result.unwrap();
    assert_eq!(env.get("x").unwrap().var_type, VarType::String);
    assert_eq!(value_of(&env, "x"), Some("a"));
}

#[test]
fn test_declarators_see_earlier_ones() {
    let (result, _) = run("const a: number = 2, b: number = a * 3;", "1.0.0");
    assert_eq!(value_of(&result.unwrap(), "b"), Some("6"));
}

// ============================================================================
// Version gating
// ============================================================================

#[test]
fn test_boolean_requires_1_1_0() {
    for (lang_version, supported) in [
        ("0.9.0", false),
        ("1.0.0", false),
        ("1.0.9", false),
        ("1.1.0", true),
        ("1.2", true),
        ("2.0.0", true),
    ] {
        for literal in ["true", "false"] {
            let (result, _) = run(&format!("let b: boolean = {};", literal), lang_version);
            if supported {
                assert!(result.is_ok(), "{} at {}", literal, lang_version);
            } else {
                assert!(
                    matches!(result, Err(InterpretError::UnsupportedType { .. })),
                    "{} at {} gave {:?}",
                    literal,
                    lang_version,
                    result
                );
            }
        }
    }
}

#[test]
fn test_boolean_assignment_is_gated_before_type_check() {
    let (result, _) = run("let n: number = 1; n = true;", "1.0.0");
    assert!(matches!(result, Err(InterpretError::UnsupportedType { .. })));
}

#[test]
fn test_read_input_requires_1_1_0() {
    let ((result, _), _) =
        run_with_input("let s: string = readInput(\"?\");", "1.0.0", vec!["x"]);
    assert!(matches!(result, Err(InterpretError::UnsupportedFeature { .. })));
}

// ============================================================================
// Output and input
// ============================================================================

#[test]
fn test_println_arithmetic() {
    let (_, printed) = run("let a: number = 2; println(a * 3 + 1); println(7 / 2);", "1.0.0");
    assert_eq!(printed, "7\n3.5\n");
}

#[test]
fn test_string_concatenation() {
    let (_, printed) = run("const price: number = 2.50; println(\"total: \" + price);", "1.0.0");
    assert_eq!(printed, "total: 2.5\n");
}

#[test]
fn test_division_by_zero() {
    let (result, _) = run("let z: number = 0; println(1 / z);", "1.0.0");
    assert!(matches!(result, Err(InterpretError::DivisionByZero { .. })));
}

#[test]
fn test_unknown_function() {
    let (result, _) = run("print(1);", "1.0.0");
    assert!(matches!(result, Err(InterpretError::UnknownFunction { ref name, .. }) if name == "print"));
}

#[test]
fn test_println_has_no_value() {
    let (result, printed) = run("let n: number = println(1);", "1.0.0");
    assert!(matches!(result, Err(InterpretError::NoValue { .. })));
    assert_eq!(printed, "1\n");
}

#[test]
fn test_read_input_writes_prompt_first() {
    let ((result, printed), prompts) = run_with_input(
        "let name: string = readInput(\"Name: \"); println(\"hi \" + name);",
        "1.1.0",
        vec!["Ada"],
    );
    assert!(result.is_ok());
    assert_eq!(printed, "Name: hi Ada\n");
    assert_eq!(prompts, vec!["Name: "]);
}

#[test]
fn test_read_input_classifies_before_type_check() {
    let ((result, _), _) =
        run_with_input("let s: string = readInput(\"?\");", "1.1.0", vec!["42"]);
    assert!(matches!(
        result,
        Err(InterpretError::TypeMismatch {
            expected: VarType::String,
            found: VarType::Number,
            ..
        })
    ));

    let ((result, _), _) =
        run_with_input("let s: string = readInput(\"?\");", "1.1.0", vec!["\"42\""]);
    assert_eq!(value_of(&result.unwrap(), "s"), Some("42"));
}

#[test]
fn test_read_input_into_each_type() {
    let ((result, _), _) = run_with_input(
        "let n: number = readInput(\"n\"); let b: boolean = readInput(\"b\"); let s: string = readInput(\"s\");",
        "1.1.0",
        vec!["3.25", "true", "plain text"],
    );
    let env = result.unwrap();
    assert_eq!(value_of(&env, "n"), Some("3.25"));
    assert_eq!(value_of(&env, "b"), Some("true"));
    assert_eq!(value_of(&env, "s"), Some("plain text"));
}

#[test]
fn test_read_input_prompt_must_be_string() {
    let ((result, _), _) = run_with_input("let s: string = readInput(1);", "1.1.0", vec!["x"]);
    assert!(matches!(result, Err(InterpretError::ExpectedString { .. })));
}

#[test]
fn test_read_input_without_input() {
    let ((result, _), _) = run_with_input("let s: string = readInput(\"?\");", "1.1.0", vec![]);
    assert!(matches!(result, Err(InterpretError::InputUnavailable { .. })));
}

#[test]
fn test_read_env_undefined() {
    let (result, _) = run(
        "let s: string = readEnv(\"SLATE_TEST_SURELY_UNDEFINED_VARIABLE\");",
        "1.1.0",
    );
    assert!(matches!(result, Err(InterpretError::UndefinedEnvVar { .. })));
}

// ============================================================================
// Environment snapshots
// ============================================================================

#[test]
fn test_run_leaves_starting_environment_untouched() {
    let start: Environment = vec![(
        "count",
        VariableInfo::new(VarType::Number, Some("1".to_string()), true),
    )]
    .into_iter()
    .collect();

    let program = parse("count = count + 1;");
    let mut output = BufferedOutput::new();
    let mut input = QueuedInput::default();
    let end = Interpreter::new(version("1.0.0"), &mut output, &mut input)
        .run(&start, &program)
        .unwrap();

    assert_eq!(value_of(&start, "count"), Some("1"));
    assert_eq!(value_of(&end, "count"), Some("2"));
}

#[test]
fn test_final_environment_and_output_lines() {
    let program = parse("let a: number = 1; let b: string; const c: boolean = true; println(a); println(c);");
    let mut output = BufferedOutput::new();
    let mut input = QueuedInput::default();
    let env = {
        let mut interpreter = Interpreter::new(version("1.1"), &mut output, &mut input);
        assert_eq!(interpreter.version(), Version::new(1, 1, 0));
        interpreter.run(&Environment::new(), &program).unwrap()
    };

    assert_eq!(output.lines(), vec!["1", "true"]);

    let mut bindings: Vec<(&str, Option<&str>, bool)> = env
        .iter()
        .map(|(name, info)| (name.as_str(), info.value.as_deref(), info.is_mutable))
        .collect();
    bindings.sort();
    assert_eq!(
        bindings,
        vec![("a", Some("1"), true), ("b", None, true), ("c", Some("true"), false)]
    );
}

#[test]
fn test_error_display_has_position() {
    let (result, _) = run("let x: number = 1;\ny = 2;", "1.0.0");
    let err = result.unwrap_err();
    assert_eq!(err.span().line, 2);
    assert!(err.to_string().contains("(2:1)"), "{}", err);
}
