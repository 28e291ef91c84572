use tracing::debug;

use crate::{
    ast::{Program, Token, TokenKind},
    builder::{BuildFailure, BuildResult, build_statement, conditional::NestedConditional},
};

/// Splits a whole token stream into top-level statements.
///
/// Same single pass as the conditional block scan, one level up: `;` at
/// depth 0 ends a simple statement, and a conditional ends at its closing
/// brace unless an `else` follows it.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn build_program(tokens: &[Token]) -> BuildResult<Program> {
    let mut statements = Vec::new();
    let mut depth = 0usize;
    let mut pending = 0usize;
    let mut conditional: Option<NestedConditional> = None;

    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];

        match token.kind {
            TokenKind::If if depth == 0 && conditional.is_none() => {
                if pending != index {
                    return Err(BuildFailure::malformed(
                        "expected ';' before 'if'",
                        tokens[index - 1].span.after(),
                    ));
                }
                conditional = Some(NestedConditional { else_taken: false });
            }

            TokenKind::OBrace => {
                if depth == 0 && conditional.is_none() {
                    return Err(BuildFailure::malformed("unexpected '{'", token.span));
                }
                depth += 1;
            }

            TokenKind::CBrace => {
                if depth == 0 {
                    return Err(BuildFailure::malformed("unmatched '}'", token.span));
                }
                depth -= 1;

                if depth == 0
                    && let Some(current) = conditional.as_mut()
                {
                    let else_follows = tokens
                        .get(index + 1)
                        .is_some_and(|next| next.is(TokenKind::Else));
                    if else_follows && !current.else_taken {
                        current.else_taken = true;
                        index += 2;
                        continue;
                    }

                    statements.push(build_statement(&tokens[pending..=index])?);
                    pending = index + 1;
                    conditional = None;
                }
            }

            TokenKind::Else if depth == 0 => {
                return Err(BuildFailure::malformed("unexpected 'else'", token.span));
            }

            TokenKind::Semicolon if depth == 0 && conditional.is_none() => {
                statements.push(build_statement(&tokens[pending..=index])?);
                pending = index + 1;
            }

            _ => {}
        }

        index += 1;
    }

    if depth != 0 {
        return Err(BuildFailure::malformed_at(
            "unmatched braces: block is never closed",
            tokens.last().map(|t| t.span.after()),
        ));
    }
    if pending < tokens.len() {
        // Trailing tokens without a terminator.
        let rest = &tokens[pending..];
        let failure = match build_statement(rest) {
            Err(failure) => failure,
            Ok(_) => BuildFailure::malformed_at(
                "expected ';' at end of statement",
                rest.last().map(|t| t.span.after()),
            ),
        };
        return Err(failure);
    }

    debug!(statements = statements.len(), "built program");
    Ok(Program { statements })
}
