use rust_decimal::Decimal;

use crate::environment::VarType;

/// A runtime value of the Slate language.
///
/// Numbers are arbitrary-precision decimals, so `0.1 + 0.2` is exactly `0.3`.
///
/// # Examples
///
/// ```
/// use slate_lang::Value;
/// use rust_decimal::Decimal;
///
/// let number = Value::Number(Decimal::new(250, 2));
/// assert_eq!(number.canonical(), "2.5");
///
/// let text = Value::String("hi".to_string());
/// assert!(text.is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(Decimal),
    String(String),
    Boolean(bool),
}

impl Value {
    /// Check if the value is truthy (for conditions)
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
        }
    }

    /// The type a variable needs to hold this value.
    pub fn var_type(&self) -> VarType {
        match self {
            Value::Number(_) => VarType::Number,
            Value::String(_) => VarType::String,
            Value::Boolean(_) => VarType::Bool,
        }
    }

    /// Canonical text form, as stored in the environment and printed.
    ///
    /// Numbers drop trailing fractional zeros: `10.50` becomes `10.5`.
    pub fn canonical(&self) -> String {
        match self {
            Value::Number(n) => n.normalize().to_string(),
            Value::String(s) => s.clone(),
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}
