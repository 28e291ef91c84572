use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    ast::{Literal, LiteralValue, Token, TokenKind},
    builder::{BuildFailure, BuildResult, slice_span},
};

fn single_token(tokens: &[Token], kind: TokenKind) -> Option<&Token> {
    match tokens {
        [token] if token.is(kind) => Some(token),
        _ => None,
    }
}

pub fn build_boolean_literal(tokens: &[Token]) -> BuildResult<Literal> {
    let token = single_token(tokens, TokenKind::Boolean)
        .ok_or_else(|| BuildFailure::mismatch("Invalid boolean", slice_span(tokens)))?;

    let value = match token.value.as_str() {
        "true" => true,
        "false" => false,
        other => {
            return Err(BuildFailure::malformed(
                format!("invalid boolean literal '{}'", other),
                token.span,
            ));
        }
    };

    Ok(Literal {
        value: LiteralValue::Boolean(value),
        span: token.span,
    })
}

pub fn build_number_literal(tokens: &[Token]) -> BuildResult<Literal> {
    let token = single_token(tokens, TokenKind::Number)
        .ok_or_else(|| BuildFailure::mismatch("Invalid number", slice_span(tokens)))?;

    let value = Decimal::from_str(&token.value).map_err(|e| {
        BuildFailure::malformed(
            format!("invalid number literal '{}': {}", token.value, e),
            token.span,
        )
    })?;

    Ok(Literal {
        value: LiteralValue::Number(value),
        span: token.span,
    })
}

pub fn build_string_literal(tokens: &[Token]) -> BuildResult<Literal> {
    let token = single_token(tokens, TokenKind::String)
        .ok_or_else(|| BuildFailure::mismatch("Invalid string", slice_span(tokens)))?;

    Ok(Literal {
        value: LiteralValue::String(token.value.clone()),
        span: token.span,
    })
}

/// Tries each literal builder in turn.
pub fn build_literal(tokens: &[Token]) -> BuildResult<Literal> {
    for builder in [build_number_literal, build_string_literal, build_boolean_literal] {
        match builder(tokens) {
            Ok(literal) => return Ok(literal),
            Err(failure) if failure.is_malformed() => return Err(failure),
            Err(_) => {}
        }
    }
    Err(BuildFailure::mismatch("expected a literal", slice_span(tokens)))
}
