use tracing::{debug, trace};

use crate::{
    ast::{Expression, ExpressionStatement, Span, Statement, Token, TokenKind},
    builder::{
        BuildFailure, BuildResult, build_assignment, build_conditional, build_expression,
        build_variable_declaration, slice_span,
    },
};

/// `(assignment | expression) ;`
pub fn build_expression_statement(tokens: &[Token]) -> BuildResult<ExpressionStatement> {
    let Some((last, body)) = tokens.split_last() else {
        return Err(BuildFailure::mismatch("empty statement", None));
    };

    if matches!(
        tokens[0].kind,
        TokenKind::Let | TokenKind::Const | TokenKind::If
    ) {
        return Err(BuildFailure::mismatch(
            "not an expression statement",
            slice_span(tokens),
        ));
    }
    if !last.is(TokenKind::Semicolon) {
        return Err(BuildFailure::malformed(
            "expected ';' at end of statement",
            last.span.after(),
        ));
    }
    if body.is_empty() {
        return Err(BuildFailure::malformed("empty statement", last.span));
    }

    let expression = if body.len() >= 2 && body[1].is(TokenKind::Assign) {
        let assignment = build_assignment(body).map_err(|failure| {
            if failure.is_malformed() {
                failure
            } else {
                BuildFailure::malformed("invalid assignment target", body[0].span)
            }
        })?;
        Expression::Assignment(assignment)
    } else {
        build_expression(body).map_err(|f| f.or_at(Some(last.span)))?
    };

    Ok(ExpressionStatement {
        expression,
        span: Span::cover(tokens[0].span, last.span),
    })
}

type StatementBuilder = fn(&[Token]) -> BuildResult<Statement>;

/// Statement dispatcher.
///
/// Tries declaration, expression statement and conditional in that order.
/// The first success wins; otherwise the first builder that recognised the
/// slice as its own construct reports why it is malformed.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn build_statement(tokens: &[Token]) -> BuildResult<Statement> {
    let builders: [(&str, StatementBuilder); 3] = [
        ("declaration", |t| {
            build_variable_declaration(t).map(Statement::VariableDeclaration)
        }),
        ("expression", |t| {
            build_expression_statement(t).map(Statement::Expression)
        }),
        ("conditional", |t| build_conditional(t).map(Statement::Conditional)),
    ];

    let mut most_specific: Option<BuildFailure> = None;
    for (name, builder) in builders {
        match builder(tokens) {
            Ok(statement) => {
                debug!(kind = name, span = %statement.span(), "built statement");
                return Ok(statement);
            }
            Err(failure) => {
                trace!(builder = name, %failure, "builder rejected slice");
                if failure.is_malformed() && most_specific.is_none() {
                    most_specific = Some(failure);
                }
            }
        }
    }

    Err(most_specific.unwrap_or_else(|| {
        BuildFailure::malformed_at("unrecognised statement", tokens.first().map(|t| t.span))
    }))
}
