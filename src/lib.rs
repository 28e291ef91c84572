pub mod analyzer;
pub mod ast;
pub mod builder;
pub mod config;
pub mod environment;
pub mod formatter;
pub mod interpreter;
pub mod io;
pub mod lexer;
pub mod value;
pub mod version;

#[cfg(feature = "cli")]
pub mod cli;

pub use analyzer::{Diagnostic, analyze, analyze_program};
pub use ast::{
    BinOp, ConditionalStatement, Expression, Program, Span, Statement, Token, TokenKind,
    VariableDeclaration,
};
pub use builder::{BuildFailure, BuildResult, build_expression, build_program, build_statement};
pub use config::{ConfigError, StyleConfig};
pub use environment::{Environment, VarType, VariableInfo};
pub use formatter::format_program;
pub use interpreter::{InterpretError, Interpreter};
pub use lexer::{LexError, Lexer};
pub use value::Value;
pub use version::{Feature, Version, VersionError};
