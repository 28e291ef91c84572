use crate::{
    ast::{BinOp, Span},
    environment::VarType,
    version::Version,
};

/// Errors that can occur while interpreting a program.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretError {
    /// Read or write of a name that was never declared
    VariableNotFound { name: String, span: Span },

    /// Read of a variable declared without a value
    UninitializedVariable { name: String, span: Span },

    /// Write to a `const`
    ImmutableAssignment { name: String, span: Span },

    /// Value of the wrong type for the target variable
    TypeMismatch {
        name: String,
        expected: VarType,
        found: VarType,
        span: Span,
    },

    /// Type not available in the active language version
    UnsupportedType {
        type_name: &'static str,
        version: Version,
        span: Span,
    },

    /// Built-in not available in the active language version
    UnsupportedFeature {
        feature: &'static str,
        version: Version,
        span: Span,
    },

    /// `const` declared without an initializer
    ConstantWithoutInitializer { name: String, span: Span },

    /// Operator applied to values it does not accept
    InvalidOperands {
        operator: BinOp,
        left: VarType,
        right: VarType,
        span: Span,
    },

    DivisionByZero { span: Span },

    /// Result does not fit in a decimal
    NumericOverflow { span: Span },

    UnknownFunction { name: String, span: Span },

    ArgumentCount {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    /// Expression used as a value produced none (e.g. `println(...)`)
    NoValue { span: Span },

    /// Prompt or variable name argument that is not a string
    ExpectedString { found: VarType, span: Span },

    /// The input provider had nothing to give
    InputUnavailable { span: Span },

    /// Reference to an undefined environment variable in `readEnv`
    UndefinedEnvVar { name: String, span: Span },

    /// Stored text that does not parse as the variable's declared type
    InvalidStoredValue {
        name: String,
        var_type: VarType,
        value: String,
        span: Span,
    },
}

impl InterpretError {
    pub fn span(&self) -> Span {
        match self {
            InterpretError::VariableNotFound { span, .. }
            | InterpretError::UninitializedVariable { span, .. }
            | InterpretError::ImmutableAssignment { span, .. }
            | InterpretError::TypeMismatch { span, .. }
            | InterpretError::UnsupportedType { span, .. }
            | InterpretError::UnsupportedFeature { span, .. }
            | InterpretError::ConstantWithoutInitializer { span, .. }
            | InterpretError::InvalidOperands { span, .. }
            | InterpretError::DivisionByZero { span }
            | InterpretError::NumericOverflow { span }
            | InterpretError::UnknownFunction { span, .. }
            | InterpretError::ArgumentCount { span, .. }
            | InterpretError::NoValue { span }
            | InterpretError::ExpectedString { span, .. }
            | InterpretError::InputUnavailable { span }
            | InterpretError::UndefinedEnvVar { span, .. }
            | InterpretError::InvalidStoredValue { span, .. } => *span,
        }
    }
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpretError::VariableNotFound { name, span } => {
                write!(f, "Variable not found: '{}' at {}", name, span)
            }
            InterpretError::UninitializedVariable { name, span } => {
                write!(f, "Variable '{}' is used before it is initialized at {}", name, span)
            }
            InterpretError::ImmutableAssignment { name, span } => {
                write!(f, "Variable is not mutable: '{}' at {}", name, span)
            }
            InterpretError::TypeMismatch {
                name,
                expected,
                found,
                span,
            } => write!(
                f,
                "Type mismatch for '{}': expected {}, got {} at {}",
                name, expected, found, span
            ),
            InterpretError::UnsupportedType {
                type_name,
                version,
                span,
            } => write!(
                f,
                "Unsupported type '{}' in version {} at {}",
                type_name, version, span
            ),
            InterpretError::UnsupportedFeature {
                feature,
                version,
                span,
            } => write!(
                f,
                "'{}' is not available in version {} at {}",
                feature, version, span
            ),
            InterpretError::ConstantWithoutInitializer { name, span } => {
                write!(f, "Constant '{}' must be initialized at {}", name, span)
            }
            InterpretError::InvalidOperands {
                operator,
                left,
                right,
                span,
            } => write!(
                f,
                "Cannot apply '{}' to {} and {} at {}",
                operator.symbol(),
                left,
                right,
                span
            ),
            InterpretError::DivisionByZero { span } => write!(f, "Division by zero at {}", span),
            InterpretError::NumericOverflow { span } => {
                write!(f, "Numeric overflow at {}", span)
            }
            InterpretError::UnknownFunction { name, span } => {
                write!(f, "Unknown function '{}' at {}", name, span)
            }
            InterpretError::ArgumentCount {
                name,
                expected,
                found,
                span,
            } => write!(
                f,
                "'{}' takes {} argument(s) but {} were given at {}",
                name, expected, found, span
            ),
            InterpretError::NoValue { span } => {
                write!(f, "Expression does not produce a value at {}", span)
            }
            InterpretError::ExpectedString { found, span } => {
                write!(f, "Expected string argument but was {} at {}", found, span)
            }
            InterpretError::InputUnavailable { span } => {
                write!(f, "No input available at {}", span)
            }
            InterpretError::UndefinedEnvVar { name, span } => {
                write!(f, "Undefined environment variable '{}' at {}", name, span)
            }
            InterpretError::InvalidStoredValue {
                name,
                var_type,
                value,
                span,
            } => write!(
                f,
                "Stored value '{}' of '{}' is not a valid {} at {}",
                value, name, var_type, span
            ),
        }
    }
}

impl std::error::Error for InterpretError {}
