//! Static analysis of built statements against the style config.
//!
//! Rules are read from [`StyleConfig::rule`] by name:
//!
//! - `identifier_format`: `"camel case"` or `"snake case"`; every declared,
//!   assigned or referenced variable name must follow it.
//! - `mandatory-variable-or-literal-in-println`: when `true`, `println` only
//!   takes an identifier or a literal, not an operation or a call.
//! - `mandatory-variable-or-literal-in-readInput`: the same for
//!   `readInput`, checked only in versions that have `readInput`.
//!
//! Absent rules are off. A rule with a parameter of the wrong shape is
//! ignored with a warning.
//!
//! # Examples
//!
//! ```
//! use slate_lang::{Lexer, StyleConfig, Version, build_program};
//! use slate_lang::analyzer::analyze_program;
//!
//! let config = StyleConfig::from_json_str(
//!     r#"{ "identifier_format": "camel case", "mandatory-variable-or-literal-in-println": true }"#,
//! ).unwrap();
//! let tokens = Lexer::new("let my_total: number = 1; println(my_total + 1);").tokenize().unwrap();
//! let program = build_program(&tokens).unwrap();
//!
//! let diagnostics = analyze_program(&program, &config, Version::default());
//! assert_eq!(diagnostics.len(), 3);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    ast::{CallExpression, Expression, Identifier, Program, Span, Statement},
    config::StyleConfig,
    version::{Feature, Version},
};

pub const IDENTIFIER_FORMAT: &str = "identifier_format";
pub const PRINTLN_ARGUMENT: &str = "mandatory-variable-or-literal-in-println";
pub const READ_INPUT_ARGUMENT: &str = "mandatory-variable-or-literal-in-readInput";

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").expect("camel case pattern is valid"));
static SNAKE_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").expect("snake case pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IdentifierFormat {
    #[serde(rename = "camel case")]
    CamelCase,
    #[serde(rename = "snake case")]
    SnakeCase,
}

impl IdentifierFormat {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            IdentifierFormat::CamelCase => CAMEL_CASE.is_match(name),
            IdentifierFormat::SnakeCase => SNAKE_CASE.is_match(name),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            IdentifierFormat::CamelCase => "camel case",
            IdentifierFormat::SnakeCase => "snake case",
        }
    }
}

/// A rule violation found by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub message: String,
    pub span: Span,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {} [{}]", self.message, self.span, self.rule)
    }
}

/// Rules resolved from a [`StyleConfig`] once per analysis.
struct Rules {
    identifier_format: Option<IdentifierFormat>,
    println_argument: bool,
    read_input_argument: bool,
}

impl Rules {
    fn from_config(config: &StyleConfig, version: Version) -> Self {
        Rules {
            identifier_format: typed_rule(config, IDENTIFIER_FORMAT),
            println_argument: typed_rule(config, PRINTLN_ARGUMENT).unwrap_or(false),
            read_input_argument: version.supports(Feature::ReadInput)
                && typed_rule(config, READ_INPUT_ARGUMENT).unwrap_or(false),
        }
    }
}

fn typed_rule<T: for<'de> Deserialize<'de>>(config: &StyleConfig, name: &str) -> Option<T> {
    let value = config.rule(name)?;
    match T::deserialize(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(rule = name, error = %e, "ignoring rule with invalid parameter");
            None
        }
    }
}

struct Analyzer {
    rules: Rules,
    diagnostics: Vec<Diagnostic>,
}

impl Analyzer {
    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::VariableDeclaration(node) => {
                for declarator in &node.declarations {
                    self.identifier(&declarator.id);
                    if let Some(init) = &declarator.init {
                        self.expression(init);
                    }
                }
            }
            Statement::Expression(node) => self.expression(&node.expression),
            Statement::Conditional(node) => {
                self.identifier(&node.test);
                node.consequent
                    .iter()
                    .chain(&node.alternate)
                    .for_each(|s| self.statement(s));
            }
        }
    }

    fn expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Literal(_) => {}
            Expression::Identifier(node) => self.identifier(node),
            Expression::Binary(node) => {
                self.expression(&node.left);
                self.expression(&node.right);
            }
            Expression::Call(node) => self.call(node),
            Expression::Assignment(node) => {
                self.identifier(&node.left);
                self.expression(&node.right);
            }
        }
    }

    fn call(&mut self, node: &CallExpression) {
        let rule = match node.callee.name.as_str() {
            "println" if self.rules.println_argument => Some(PRINTLN_ARGUMENT),
            "readInput" if self.rules.read_input_argument => Some(READ_INPUT_ARGUMENT),
            _ => None,
        };
        if let Some(rule) = rule {
            for argument in &node.arguments {
                if !matches!(argument, Expression::Identifier(_) | Expression::Literal(_)) {
                    self.report(
                        rule,
                        format!(
                            "'{}' argument must be a variable or a literal",
                            node.callee.name
                        ),
                        argument.span(),
                    );
                }
            }
        }
        // Callees are built-ins, so only the arguments are name-checked.
        for argument in &node.arguments {
            self.expression(argument);
        }
    }

    fn identifier(&mut self, node: &Identifier) {
        let Some(format) = self.rules.identifier_format else {
            return;
        };
        if !format.matches(&node.name) {
            self.report(
                IDENTIFIER_FORMAT,
                format!("identifier '{}' is not in {}", node.name, format.describe()),
                node.span,
            );
        }
    }

    fn report(&mut self, rule: &'static str, message: String, span: Span) {
        self.diagnostics.push(Diagnostic { rule, message, span });
    }
}

/// Checks one statement (and the blocks nested in it).
pub fn analyze(statement: &Statement, config: &StyleConfig, version: Version) -> Vec<Diagnostic> {
    let mut analyzer = Analyzer {
        rules: Rules::from_config(config, version),
        diagnostics: Vec::new(),
    };
    analyzer.statement(statement);
    analyzer.diagnostics
}

/// Checks every top-level statement in order.
pub fn analyze_program(program: &Program, config: &StyleConfig, version: Version) -> Vec<Diagnostic> {
    let diagnostics: Vec<Diagnostic> = program
        .statements
        .iter()
        .flat_map(|statement| analyze(statement, config, version))
        .collect();
    debug!(count = diagnostics.len(), "analyzed program");
    diagnostics
}
