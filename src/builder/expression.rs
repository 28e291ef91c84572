use rust_decimal::Decimal;

use crate::{
    ast::{
        AssignmentExpression, BinOp, BinaryExpression, CallExpression, Expression, Identifier,
        Literal, LiteralValue, Span, Token, TokenKind,
    },
    builder::{
        BuildFailure, BuildResult, build_literal, describe_found, find_matching, slice_span,
        split_top_level_commas,
    },
};

pub fn build_identifier(tokens: &[Token]) -> BuildResult<Identifier> {
    match tokens {
        [token] if token.is(TokenKind::Identifier) => Ok(Identifier {
            name: token.value.clone(),
            span: token.span,
        }),
        _ => Err(BuildFailure::mismatch("Invalid identifier", slice_span(tokens))),
    }
}

/// True when `token` can end an operand, so a following `-` is binary.
fn ends_operand(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Number
            | TokenKind::String
            | TokenKind::Boolean
            | TokenKind::Identifier
            | TokenKind::CParen
    )
}

fn binary_operator(tokens: &[Token], index: usize) -> Option<BinOp> {
    let op = match tokens[index].kind {
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Subtract,
        TokenKind::Multiply => BinOp::Multiply,
        TokenKind::Divide => BinOp::Divide,
        _ => return None,
    };
    let previous = tokens.get(index.checked_sub(1)?)?;
    ends_operand(previous).then_some(op)
}

/// Right-most lowest-precedence operator outside parentheses.
///
/// Taking the right-most operator of the weakest level makes the split
/// left-associative: `a - b - c` splits before `c`.
fn find_split(tokens: &[Token]) -> BuildResult<Option<(usize, BinOp)>> {
    let mut open_parens: Vec<usize> = Vec::new();
    let mut split: Option<(usize, BinOp)> = None;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OParen => open_parens.push(index),
            TokenKind::CParen => {
                if open_parens.pop().is_none() {
                    return Err(BuildFailure::malformed("unmatched ')'", token.span));
                }
            }
            _ if open_parens.is_empty() => {
                if let Some(op) = binary_operator(tokens, index)
                    && split.is_none_or(|(_, current)| op.precedence() <= current.precedence())
                {
                    split = Some((index, op));
                }
            }
            _ => {}
        }
    }

    if let Some(&unclosed) = open_parens.last() {
        return Err(BuildFailure::malformed("unclosed '('", tokens[unclosed].span));
    }
    Ok(split)
}

fn build_binary_at(tokens: &[Token], index: usize, operator: BinOp) -> BuildResult<BinaryExpression> {
    let op_span = tokens[index].span;
    let (left_tokens, right_tokens) = (&tokens[..index], &tokens[index + 1..]);

    if right_tokens.is_empty() {
        return Err(BuildFailure::malformed(
            format!("expected expression after '{}'", operator.symbol()),
            op_span.after(),
        ));
    }

    let left = build_expression(left_tokens).map_err(|f| f.committed().or_at(Some(op_span)))?;
    let right = build_expression(right_tokens).map_err(|f| f.committed().or_at(Some(op_span.after())))?;

    Ok(BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        span: Span::cover(tokens[0].span, tokens[tokens.len() - 1].span),
    })
}

/// Builds `left <op> right`, splitting at the weakest top-level operator.
pub fn build_binary(tokens: &[Token]) -> BuildResult<BinaryExpression> {
    match find_split(tokens)? {
        Some((index, operator)) => build_binary_at(tokens, index, operator),
        None => Err(BuildFailure::mismatch(
            "not a binary expression",
            slice_span(tokens),
        )),
    }
}

/// `-x` is represented as `0 - x`, with a zero-width span on the synthesized `0`.
fn build_negation(tokens: &[Token]) -> BuildResult<BinaryExpression> {
    let minus = &tokens[0];
    let operand = &tokens[1..];
    if operand.is_empty() {
        return Err(BuildFailure::malformed(
            "expected expression after '-'",
            minus.span.after(),
        ));
    }
    let right = build_expression(operand).map_err(BuildFailure::committed)?;

    Ok(BinaryExpression {
        operator: BinOp::Subtract,
        left: Box::new(Expression::Literal(Literal {
            value: LiteralValue::Number(Decimal::ZERO),
            span: Span::new(minus.span.line, minus.span.start, minus.span.start),
        })),
        right: Box::new(right),
        span: Span::cover(minus.span, tokens[tokens.len() - 1].span),
    })
}

pub fn build_parenthesized(tokens: &[Token]) -> BuildResult<Expression> {
    let Some(open) = tokens.first().filter(|t| t.is(TokenKind::OParen)) else {
        return Err(BuildFailure::mismatch("expected '('", slice_span(tokens)));
    };

    let close = find_matching(tokens, 0, TokenKind::OParen, TokenKind::CParen)
        .ok_or_else(|| BuildFailure::malformed("unclosed '('", open.span))?;

    if close != tokens.len() - 1 {
        let extra = &tokens[close + 1];
        return Err(BuildFailure::malformed(
            format!("unexpected {} after ')'", describe_found(extra)),
            extra.span,
        ));
    }

    let inner = &tokens[1..close];
    if inner.is_empty() {
        return Err(BuildFailure::malformed(
            "expected expression inside parentheses",
            open.span.after(),
        ));
    }
    build_expression(inner).map_err(BuildFailure::committed)
}

/// `callee(arg, ...)`, with the call's closing parenthesis as the last token.
pub fn build_call(tokens: &[Token]) -> BuildResult<CallExpression> {
    let (callee_token, open) = match tokens {
        [callee, open, ..] if callee.is(TokenKind::Identifier) && open.is(TokenKind::OParen) => {
            (callee, open)
        }
        _ => return Err(BuildFailure::mismatch("not a call expression", slice_span(tokens))),
    };

    let close = find_matching(tokens, 1, TokenKind::OParen, TokenKind::CParen)
        .ok_or_else(|| BuildFailure::malformed("unclosed '(' in call", open.span))?;

    if close != tokens.len() - 1 {
        let extra = &tokens[close + 1];
        return Err(BuildFailure::malformed(
            format!("unexpected {} after call to '{}'", describe_found(extra), callee_token.value),
            extra.span,
        ));
    }

    let argument_tokens = &tokens[2..close];
    let mut arguments = Vec::new();
    if !argument_tokens.is_empty() {
        for part in split_top_level_commas(argument_tokens) {
            if part.is_empty() {
                return Err(BuildFailure::malformed(
                    "expected argument",
                    slice_span(argument_tokens).unwrap_or(open.span),
                ));
            }
            arguments.push(build_expression(part).map_err(BuildFailure::committed)?);
        }
    }

    Ok(CallExpression {
        callee: Identifier {
            name: callee_token.value.clone(),
            span: callee_token.span,
        },
        arguments,
        span: Span::cover(callee_token.span, tokens[close].span),
    })
}

/// `name = expression`.
pub fn build_assignment(tokens: &[Token]) -> BuildResult<AssignmentExpression> {
    let (target, assign) = match tokens {
        [target, assign, ..] if target.is(TokenKind::Identifier) && assign.is(TokenKind::Assign) => {
            (target, assign)
        }
        _ => return Err(BuildFailure::mismatch("not an assignment", slice_span(tokens))),
    };

    let value_tokens = &tokens[2..];
    if value_tokens.is_empty() {
        return Err(BuildFailure::malformed(
            "expected expression after '='",
            assign.span.after(),
        ));
    }
    let right = build_expression(value_tokens).map_err(BuildFailure::committed)?;

    Ok(AssignmentExpression {
        left: Identifier {
            name: target.value.clone(),
            span: target.span,
        },
        right: Box::new(right),
        span: Span::cover(target.span, tokens[tokens.len() - 1].span),
    })
}

/// Expression dispatcher.
///
/// Any failure returned from here is final: the caller has already decided
/// that the slice must be an expression.
pub fn build_expression(tokens: &[Token]) -> BuildResult<Expression> {
    let Some(first) = tokens.first() else {
        return Err(BuildFailure::malformed_at("expected expression", None));
    };

    if let Some((index, operator)) = find_split(tokens)? {
        return build_binary_at(tokens, index, operator).map(Expression::Binary);
    }

    if tokens.len() == 1 {
        if let Ok(identifier) = build_identifier(tokens) {
            return Ok(Expression::Identifier(identifier));
        }
        return build_literal(tokens).map(Expression::Literal).map_err(|failure| {
            if failure.is_malformed() {
                failure
            } else {
                BuildFailure::malformed(
                    format!("unexpected {} in expression", describe_found(first)),
                    first.span,
                )
            }
        });
    }

    match first.kind {
        TokenKind::Minus => build_negation(tokens).map(Expression::Binary),
        TokenKind::OParen => build_parenthesized(tokens),
        TokenKind::Identifier if tokens[1].is(TokenKind::OParen) => {
            build_call(tokens).map(Expression::Call)
        }
        _ => {
            let unexpected = &tokens[1];
            Err(BuildFailure::malformed(
                format!("unexpected {} in expression", describe_found(unexpected)),
                unexpected.span,
            ))
        }
    }
}
