//! Tree-walking interpreter.
//!
//! Every evaluation takes the current [`Environment`] snapshot by reference
//! and either returns a value or a *new* environment; nothing is mutated in
//! place. Statements are run in program order by threading the returned
//! environment into the next one, so a failing statement leaves the caller's
//! last snapshot intact.
//!
//! The work is split by node kind:
//!
//! - [`identifier`] - variable reads
//! - [`expression`] - literals, binary operations, calls
//! - [`assignment`] - writes to existing variables
//! - [`declaration`] - `let`/`const`
//! - [`input`] - `readInput` / `readEnv` and input classification
//! - [`statement`] - statements, conditionals and whole programs
pub mod error;
pub mod identifier;
pub mod expression;
pub mod assignment;
pub mod declaration;
pub mod input;
pub mod statement;

pub use error::InterpretError;
pub use identifier::evaluate_identifier;
pub use input::classify_input;

use crate::{
    ast::Span,
    environment::VarType,
    io::{InputProvider, OutputProvider},
    value::Value,
    version::{Feature, Version},
};

pub type InterpretResult<T> = Result<T, InterpretError>;

/// Evaluates nodes against environment snapshots for one language version.
///
/// # Examples
///
/// ```
/// use slate_lang::{Environment, Interpreter, Lexer, Version, build_program};
/// use slate_lang::io::{BufferedOutput, QueuedInput};
///
/// let tokens = Lexer::new("let x: number = 2 * 3; println(x);").tokenize().unwrap();
/// let program = build_program(&tokens).unwrap();
///
/// let mut output = BufferedOutput::new();
/// let mut input = QueuedInput::default();
/// let mut interpreter = Interpreter::new(Version::new(1, 0, 0), &mut output, &mut input);
/// let env = interpreter.run(&Environment::new(), &program).unwrap();
///
/// assert_eq!(env.get("x").unwrap().value.as_deref(), Some("6"));
/// assert_eq!(output.text, "6\n");
/// ```
pub struct Interpreter<'io> {
    version: Version,
    output: &'io mut dyn OutputProvider,
    input: &'io mut dyn InputProvider,
}

impl<'io> Interpreter<'io> {
    pub fn new(
        version: Version,
        output: &'io mut dyn OutputProvider,
        input: &'io mut dyn InputProvider,
    ) -> Self {
        Interpreter {
            version,
            output,
            input,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub(crate) fn require_feature(&self, feature: Feature, span: Span) -> InterpretResult<()> {
        if self.version.supports(feature) {
            return Ok(());
        }
        Err(match feature {
            Feature::Boolean => InterpretError::UnsupportedType {
                type_name: feature.name(),
                version: self.version,
                span,
            },
            Feature::ReadInput | Feature::ReadEnv => InterpretError::UnsupportedFeature {
                feature: feature.name(),
                version: self.version,
                span,
            },
        })
    }

    /// Runtime type of `value`; booleans only exist from 1.1.0 on.
    pub(crate) fn runtime_type(&self, value: &Value, span: Span) -> InterpretResult<VarType> {
        let var_type = value.var_type();
        if var_type == VarType::Bool {
            self.require_feature(Feature::Boolean, span)?;
        }
        Ok(var_type)
    }

    /// Requires `value` to fit a variable declared as `declared`.
    pub(crate) fn check_type(
        &self,
        name: &str,
        declared: VarType,
        value: &Value,
        span: Span,
    ) -> InterpretResult<()> {
        let found = self.runtime_type(value, span)?;
        if found != declared {
            return Err(InterpretError::TypeMismatch {
                name: name.to_string(),
                expected: declared,
                found,
                span,
            });
        }
        Ok(())
    }
}
