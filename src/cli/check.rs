//! Syntax checking and AST dumps

use super::CliError;
use crate::{Lexer, Program, build_program};

/// Result of a check operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid { statements: usize },
}

/// Tokenizes and builds a whole source file.
pub fn parse_source(source: &str) -> Result<Program, CliError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(tokens = tokens.len(), "tokenized source");
    Ok(build_program(&tokens)?)
}

/// Validate syntax without running anything
pub fn execute_check(source: &str) -> Result<CheckResult, CliError> {
    let program = parse_source(source)?;
    Ok(CheckResult::SyntaxValid {
        statements: program.statements.len(),
    })
}

/// Serialize the program tree as JSON
pub fn execute_ast(source: &str, pretty: bool) -> Result<String, CliError> {
    let program = parse_source(source)?;
    let json = if pretty {
        serde_json::to_string_pretty(&program)
    } else {
        serde_json::to_string(&program)
    }?;
    Ok(json)
}
