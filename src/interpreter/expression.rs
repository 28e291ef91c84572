use tracing::trace;

use crate::{
    ast::{BinOp, BinaryExpression, CallExpression, Expression, Literal, LiteralValue, Span},
    environment::Environment,
    interpreter::{InterpretError, InterpretResult, Interpreter},
    value::Value,
    version::Feature,
};

impl Interpreter<'_> {
    /// Evaluates an expression. Calls such as `println` produce `None`.
    pub fn evaluate(
        &mut self,
        env: &Environment,
        expr: &Expression,
    ) -> InterpretResult<Option<Value>> {
        match expr {
            Expression::Literal(literal) => self.evaluate_literal(literal).map(Some),
            Expression::Identifier(identifier) => {
                self.evaluate_identifier(env, identifier).map(Some)
            }
            Expression::Binary(binary) => self.evaluate_binary(env, binary).map(Some),
            Expression::Call(call) => self.evaluate_call(env, call),
            // Assignments yield a new environment, not a value; statements run them directly.
            Expression::Assignment(assignment) => Err(InterpretError::NoValue {
                span: assignment.span,
            }),
        }
    }

    /// Evaluates an expression that must produce a value.
    pub fn evaluate_value(&mut self, env: &Environment, expr: &Expression) -> InterpretResult<Value> {
        self.evaluate(env, expr)?
            .ok_or(InterpretError::NoValue { span: expr.span() })
    }

    pub fn evaluate_literal(&self, literal: &Literal) -> InterpretResult<Value> {
        match &literal.value {
            LiteralValue::Number(n) => Ok(Value::Number(*n)),
            LiteralValue::String(s) => Ok(Value::String(s.clone())),
            LiteralValue::Boolean(b) => {
                self.require_feature(Feature::Boolean, literal.span)?;
                Ok(Value::Boolean(*b))
            }
        }
    }

    pub fn evaluate_binary(
        &mut self,
        env: &Environment,
        node: &BinaryExpression,
    ) -> InterpretResult<Value> {
        let left = self.evaluate_value(env, &node.left)?;
        let right = self.evaluate_value(env, &node.right)?;
        apply_binop(node.operator, left, right, node.span)
    }

    pub fn evaluate_call(
        &mut self,
        env: &Environment,
        call: &CallExpression,
    ) -> InterpretResult<Option<Value>> {
        trace!(callee = %call.callee.name, args = call.arguments.len(), "call");
        match call.callee.name.as_str() {
            "println" => {
                let argument = single_argument(call)?;
                let value = self.evaluate_value(env, argument)?;
                self.output.write(&format!("{}\n", value));
                Ok(None)
            }
            "readInput" => {
                self.require_feature(Feature::ReadInput, call.span)?;
                let argument = single_argument(call)?;
                self.read_input(env, argument).map(Some)
            }
            "readEnv" => {
                self.require_feature(Feature::ReadEnv, call.span)?;
                let argument = single_argument(call)?;
                self.read_env(env, argument).map(Some)
            }
            other => Err(InterpretError::UnknownFunction {
                name: other.to_string(),
                span: call.callee.span,
            }),
        }
    }
}

fn single_argument(call: &CallExpression) -> InterpretResult<&Expression> {
    match call.arguments.as_slice() {
        [argument] => Ok(argument),
        arguments => Err(InterpretError::ArgumentCount {
            name: call.callee.name.clone(),
            expected: 1,
            found: arguments.len(),
            span: call.span,
        }),
    }
}

/// `+` concatenates when either side is a string; everything else is decimal arithmetic.
fn apply_binop(op: BinOp, left: Value, right: Value, span: Span) -> InterpretResult<Value> {
    match (op, left, right) {
        (BinOp::Add, Value::String(a), b) => Ok(Value::String(format!("{}{}", a, b))),
        (BinOp::Add, a, Value::String(b)) => Ok(Value::String(format!("{}{}", a, b))),
        (op, Value::Number(a), Value::Number(b)) => {
            let result = match op {
                BinOp::Add => a.checked_add(b),
                BinOp::Subtract => a.checked_sub(b),
                BinOp::Multiply => a.checked_mul(b),
                BinOp::Divide => {
                    if b.is_zero() {
                        return Err(InterpretError::DivisionByZero { span });
                    }
                    a.checked_div(b)
                }
            };
            result
                .map(Value::Number)
                .ok_or(InterpretError::NumericOverflow { span })
        }
        (op, a, b) => Err(InterpretError::InvalidOperands {
            operator: op,
            left: a.var_type(),
            right: b.var_type(),
            span,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn number(n: i64) -> Value {
        Value::Number(Decimal::from(n))
    }

    #[test]
    fn string_concatenation_uses_canonical_numbers() {
        let value = apply_binop(
            BinOp::Add,
            Value::String("total: ".into()),
            Value::Number(Decimal::new(1050, 2)),
            Span::default(),
        )
        .unwrap();
        assert_eq!(value, Value::String("total: 10.5".into()));
    }

    #[test]
    fn division_by_zero() {
        let err = apply_binop(BinOp::Divide, number(1), number(0), Span::default()).unwrap_err();
        assert!(matches!(err, InterpretError::DivisionByZero { .. }));
    }

    #[test]
    fn booleans_are_not_numbers() {
        let err = apply_binop(BinOp::Multiply, Value::Boolean(true), number(2), Span::default())
            .unwrap_err();
        assert!(matches!(err, InterpretError::InvalidOperands { .. }));
    }

    #[test]
    fn exact_decimal_arithmetic() {
        let sum = apply_binop(
            BinOp::Add,
            Value::Number(Decimal::new(1, 1)),
            Value::Number(Decimal::new(2, 1)),
            Span::default(),
        )
        .unwrap();
        assert_eq!(sum.canonical(), "0.3");
    }
}
