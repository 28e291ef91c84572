//! Token-slice builders.
//!
//! Each builder tries to read one specific construct out of a token slice and
//! either returns the node or a [`BuildFailure`]. A builder only succeeds when
//! the construct covers the *whole* slice; a slice that merely starts with a
//! valid construct is rejected.
//!
//! Higher-level builders compose the lower ones:
//!
//! ```text
//! build_program
//!   └─ build_statement ── build_variable_declaration ─┐
//!        │                build_expression_statement ─┼─ build_expression ── literal / identifier / call / binary
//!        └─────────────── build_conditional ──────────┘
//!                            └─ build_statement (block bodies, recursively)
//! ```
pub mod result;
pub mod literal;
pub mod expression;
pub mod declaration;
pub mod statement;
pub mod conditional;
pub mod program;

pub use result::{BuildFailure, BuildResult, FailureKind};
pub use literal::{build_boolean_literal, build_literal, build_number_literal, build_string_literal};
pub use expression::{
    build_assignment, build_binary, build_call, build_expression, build_identifier,
    build_parenthesized,
};
pub use declaration::build_variable_declaration;
pub use statement::{build_expression_statement, build_statement};
pub use conditional::build_conditional;
pub use program::build_program;

use crate::ast::{Span, Token, TokenKind};

/// Span covering a non-empty slice, or `None` for an empty one.
pub(crate) fn slice_span(tokens: &[Token]) -> Option<Span> {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => Some(Span::cover(first.span, last.span)),
        _ => None,
    }
}

/// How a token reads in a "found ..." message.
pub(crate) fn describe_found(token: &Token) -> String {
    match token.kind {
        TokenKind::Identifier | TokenKind::Number | TokenKind::Boolean => {
            format!("'{}'", token.value)
        }
        TokenKind::String => format!("\"{}\"", token.value),
        other => other.describe().to_string(),
    }
}

/// Requires `tokens[index]` to be of `kind`.
///
/// A missing token is reported right after the previous one, a wrong token at
/// its own position. `context` completes the sentence "expected X ...".
pub(crate) fn expect_token<'a>(
    tokens: &'a [Token],
    index: usize,
    kind: TokenKind,
    context: &str,
) -> BuildResult<&'a Token> {
    match tokens.get(index) {
        Some(token) if token.is(kind) => Ok(token),
        Some(token) => Err(BuildFailure::malformed(
            format!(
                "expected {} {}, found {}",
                kind.describe(),
                context,
                describe_found(token)
            ),
            token.span,
        )),
        None => Err(BuildFailure::malformed_at(
            format!("expected {} {}", kind.describe(), context),
            tokens.last().map(|t| t.span.after()),
        )),
    }
}

/// Index of the token closing the delimiter opened at `open_index`.
pub(crate) fn find_matching(
    tokens: &[Token],
    open_index: usize,
    open: TokenKind,
    close: TokenKind,
) -> Option<usize> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open_index) {
        if token.is(open) {
            depth += 1;
        } else if token.is(close) {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Splits on commas outside parentheses.
pub(crate) fn split_top_level_commas(tokens: &[Token]) -> Vec<&[Token]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OParen => depth += 1,
            TokenKind::CParen => depth = depth.saturating_sub(1),
            TokenKind::Comma if depth == 0 => {
                parts.push(&tokens[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}
