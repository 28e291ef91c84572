// tests/cli_tests.rs
#![cfg(feature = "cli")]

use std::io::Write;

use slate_lang::cli::{
    AnalyzeOptions, CheckResult, CliError, FormatOptions, RunOptions, execute_analyze,
    execute_ast, execute_check, execute_format, execute_run,
};
use slate_lang::io::{BufferedOutput, QueuedInput};

fn run(source: &str, lang_version: Option<&str>) -> (Result<(), CliError>, String) {
    let options = RunOptions {
        source: source.to_string(),
        lang_version: lang_version.map(str::to_string),
    };
    let mut output = BufferedOutput::new();
    let mut input = QueuedInput::default();
    let result = execute_run(&options, &mut output, &mut input).map(|_| ());
    (result, output.text)
}

#[test]
fn test_check_valid() {
    let result = execute_check("let x: number = 1; if (x) { println(x); }").unwrap();
    assert_eq!(result, CheckResult::SyntaxValid { statements: 2 });
}

#[test]
fn test_check_reports_syntax_errors() {
    assert!(matches!(execute_check("let x: number = 1"), Err(CliError::Build(_))));
    assert!(matches!(execute_check("let x = #;"), Err(CliError::Lex(_))));
}

#[test]
fn test_run_defaults_to_latest_version() {
    let (result, printed) = run("let ok: boolean = true; if (ok) { println(\"yes\"); }", None);
    assert!(result.is_ok());
    assert_eq!(printed, "yes\n");
}

#[test]
fn test_run_with_older_version() {
    let (result, printed) = run("let ok: boolean = true;", Some("1.0.0"));
    assert!(matches!(result, Err(CliError::Interpret(_))));
    assert!(printed.is_empty());
}

#[test]
fn test_run_with_bad_version() {
    let (result, _) = run("println(1);", Some("1.x"));
    let err = result.unwrap_err();
    assert!(matches!(err, CliError::Version(_)));
}

#[test]
fn test_ast_json() {
    let json = execute_ast("let x: number = 1;", false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let declaration = &value["statements"][0]["VariableDeclaration"];
    assert_eq!(declaration["kind"], "Let");
    assert_eq!(declaration["declarations"][0]["id"]["name"], "x");
    assert_eq!(declaration["span"]["line"], 1);
}

#[test]
fn test_ast_pretty() {
    let json = execute_ast("x = 1;", true).unwrap();
    assert!(json.contains('\n'));
}

#[test]
fn test_format_with_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "spacesInAssignSymbol": 1 }}"#).unwrap();

    let options = FormatOptions {
        source: "let a:number=1;".to_string(),
        config: Some(file.path().to_path_buf()),
    };
    assert_eq!(execute_format(&options).unwrap(), "let a: number = 1;\n");
}

#[test]
fn test_format_with_missing_config() {
    let options = FormatOptions {
        source: "a = 1;".to_string(),
        config: Some("/nonexistent/style.json".into()),
    };
    assert!(matches!(execute_format(&options), Err(CliError::Config(_))));
}

#[test]
fn test_analyze_with_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "mandatory-variable-or-literal-in-readInput": true }}"#).unwrap();

    let mut options = AnalyzeOptions {
        source: "let s: string = readInput(\"a\" + \"b\");".to_string(),
        config: Some(file.path().to_path_buf()),
        lang_version: None,
    };
    let diagnostics = execute_analyze(&options).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].span.start, 27);

    options.lang_version = Some("1.0.0".to_string());
    assert!(execute_analyze(&options).unwrap().is_empty());
}

#[test]
fn test_analyze_without_config() {
    let options = AnalyzeOptions {
        source: "let Bad_Name: number = 1; println(Bad_Name * 2);".to_string(),
        ..AnalyzeOptions::default()
    };
    assert!(execute_analyze(&options).unwrap().is_empty());
    assert_eq!(CliError::Diagnostics(2).to_string(), "2 rule violation(s) found");
}
