//! CLI support for slate-lang
//!
//! Provides programmatic access to the `slate` subcommands so they can be
//! driven from tests or embedded in other tools.

mod analyze;
mod check;
mod format;
mod run;

pub use analyze::{AnalyzeOptions, execute_analyze};
pub use check::{CheckResult, execute_ast, execute_check, parse_source};
pub use format::{FormatOptions, execute_format};
pub use run::{RunOptions, execute_run};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Lexer error
    Lex(crate::LexError),
    /// Token stream does not form a program
    Build(crate::BuildFailure),
    /// Runtime error
    Interpret(crate::InterpretError),
    /// Bad `--lang-version` value
    Version(crate::VersionError),
    /// Style config could not be loaded
    Config(crate::ConfigError),
    /// AST serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// The analyzer reported rule violations
    Diagnostics(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Lex(e) => write!(f, "Syntax error: {}", e),
            CliError::Build(e) => write!(f, "Syntax error: {}", e),
            CliError::Interpret(e) => write!(f, "Runtime error: {}", e),
            CliError::Version(e) => write!(f, "{}", e),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No input provided. Pass a file path or pipe a program to stdin.")
            }
            CliError::Diagnostics(count) => write!(f, "{} rule violation(s) found", count),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Lex(e) => Some(e),
            CliError::Build(e) => Some(e),
            CliError::Interpret(e) => Some(e),
            CliError::Version(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoInput | CliError::Diagnostics(_) => None,
        }
    }
}

impl From<crate::LexError> for CliError {
    fn from(e: crate::LexError) -> Self {
        CliError::Lex(e)
    }
}

impl From<crate::BuildFailure> for CliError {
    fn from(e: crate::BuildFailure) -> Self {
        CliError::Build(e)
    }
}

impl From<crate::InterpretError> for CliError {
    fn from(e: crate::InterpretError) -> Self {
        CliError::Interpret(e)
    }
}

impl From<crate::VersionError> for CliError {
    fn from(e: crate::VersionError) -> Self {
        CliError::Version(e)
    }
}

impl From<crate::ConfigError> for CliError {
    fn from(e: crate::ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
