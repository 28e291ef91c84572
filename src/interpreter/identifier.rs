use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    ast::Identifier,
    environment::{Environment, VarType},
    interpreter::{InterpretError, InterpretResult, Interpreter},
    value::Value,
    version::{Feature, Version},
};

/// Reads a variable, re-parsing its stored text by declared type.
pub fn evaluate_identifier(
    env: &Environment,
    version: Version,
    node: &Identifier,
) -> InterpretResult<Value> {
    let info = env
        .get(&node.name)
        .ok_or_else(|| InterpretError::VariableNotFound {
            name: node.name.clone(),
            span: node.span,
        })?;

    let stored = info
        .value
        .as_deref()
        .ok_or_else(|| InterpretError::UninitializedVariable {
            name: node.name.clone(),
            span: node.span,
        })?;

    let invalid = || InterpretError::InvalidStoredValue {
        name: node.name.clone(),
        var_type: info.var_type,
        value: stored.to_string(),
        span: node.span,
    };

    match info.var_type {
        VarType::String => Ok(Value::String(stored.to_string())),
        VarType::Number => Decimal::from_str(stored)
            .map(Value::Number)
            .map_err(|_| invalid()),
        VarType::Bool => {
            if !version.supports(Feature::Boolean) {
                return Err(InterpretError::UnsupportedType {
                    type_name: Feature::Boolean.name(),
                    version,
                    span: node.span,
                });
            }
            match stored {
                "true" => Ok(Value::Boolean(true)),
                "false" => Ok(Value::Boolean(false)),
                _ => Err(invalid()),
            }
        }
    }
}

impl Interpreter<'_> {
    pub fn evaluate_identifier(
        &self,
        env: &Environment,
        node: &Identifier,
    ) -> InterpretResult<Value> {
        evaluate_identifier(env, self.version(), node)
    }
}
