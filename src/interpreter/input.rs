use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    ast::{Expression, LiteralValue},
    environment::Environment,
    interpreter::{InterpretError, InterpretResult, Interpreter},
    value::Value,
};

static BOOLEAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(true|false)$").expect("boolean pattern is valid"));
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("number pattern is valid"));
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^("[^"]*"|'[^']*')$"#).expect("quoted pattern is valid"));

/// Classifies raw input text by its shape alone.
///
/// `true`/`false` become booleans, unsigned integers and decimals become
/// numbers, a fully quoted string loses its quotes, and anything else stays
/// as-is. Whether the result fits its target variable is checked later, on
/// assignment or declaration.
pub fn classify_input(raw: &str) -> Value {
    if BOOLEAN.is_match(raw) {
        return Value::Boolean(raw == "true");
    }
    if NUMBER.is_match(raw)
        && let Ok(number) = Decimal::from_str(raw)
    {
        return Value::Number(number);
    }
    if QUOTED.is_match(raw) {
        return Value::String(raw[1..raw.len() - 1].to_string());
    }
    Value::String(raw.to_string())
}

impl Interpreter<'_> {
    /// Resolves a string argument from a literal, identifier or call.
    fn resolve_string_argument(
        &mut self,
        env: &Environment,
        argument: &Expression,
    ) -> InterpretResult<String> {
        let value = match argument {
            Expression::Literal(literal) => match &literal.value {
                LiteralValue::String(text) => return Ok(text.clone()),
                _ => self.evaluate_literal(literal)?,
            },
            Expression::Identifier(identifier) => self.evaluate_identifier(env, identifier)?,
            Expression::Call(call) => self
                .evaluate_call(env, call)?
                .ok_or(InterpretError::NoValue { span: call.span })?,
            other => self.evaluate_value(env, other)?,
        };

        match value {
            Value::String(text) => Ok(text),
            other => Err(InterpretError::ExpectedString {
                found: other.var_type(),
                span: argument.span(),
            }),
        }
    }

    /// `readInput(prompt)`: shows the prompt, reads one line and classifies it.
    pub fn read_input(&mut self, env: &Environment, prompt: &Expression) -> InterpretResult<Value> {
        let text = self.resolve_string_argument(env, prompt)?;
        self.output.write(&text);

        let raw = self
            .input
            .read_input(&text)
            .ok_or(InterpretError::InputUnavailable {
                span: prompt.span(),
            })?;
        let value = classify_input(&raw);
        debug!(prompt = %text, kind = %value.var_type(), "read input");
        Ok(value)
    }

    /// `readEnv(name)`: reads a process environment variable and classifies it like input.
    pub fn read_env(&mut self, env: &Environment, name: &Expression) -> InterpretResult<Value> {
        let variable = self.resolve_string_argument(env, name)?;
        match std::env::var(&variable) {
            Ok(raw) => Ok(classify_input(&raw)),
            Err(_) => Err(InterpretError::UndefinedEnvVar {
                name: variable,
                span: name.span(),
            }),
        }
    }
}
