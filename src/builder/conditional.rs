//! `if (<identifier>) { ... } [else { ... }]`
//!
//! The block bodies are split into statements by one left-to-right scan over
//! the tokens from the opening brace onwards. The scan tracks:
//!
//! - the brace depth (1 inside a body, more inside a nested conditional),
//! - which body is active ([`Block`]),
//! - where the statement being accumulated started,
//! - the nested conditional being accumulated, if any, and whether its
//!   `else` was already consumed.
//!
//! A finished statement slice is handed back to [`build_statement`], which is
//! how nested conditionals are built recursively. An `else` right after a
//! nested conditional's closing brace belongs to that nested conditional.

use tracing::trace;

use crate::{
    ast::{ConditionalStatement, Identifier, Span, Statement, Token, TokenKind},
    builder::{BuildFailure, BuildResult, build_statement, describe_found, expect_token, slice_span},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    /// Before the consequent's opening brace
    Opening,
    Consequent,
    /// Consequent closed; only `else` may follow
    AwaitingElse,
    /// `else` seen; its opening brace must follow
    ElseKeyword,
    Alternate,
    /// Alternate closed; nothing may follow
    Closed,
}

/// A conditional nested directly inside the active body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NestedConditional {
    pub(crate) else_taken: bool,
}

pub fn build_conditional(tokens: &[Token]) -> BuildResult<ConditionalStatement> {
    let Some(first) = tokens.first() else {
        return Err(BuildFailure::mismatch(
            "Not enough tokens to build conditional statement",
            None,
        ));
    };
    if !first.is(TokenKind::If) {
        return Err(BuildFailure::mismatch(
            "Invalid conditional statement",
            slice_span(tokens),
        ));
    }

    expect_token(tokens, 1, TokenKind::OParen, "after 'if'")?;
    let test = expect_token(tokens, 2, TokenKind::Identifier, "after '('")?;
    expect_token(tokens, 3, TokenKind::CParen, "after condition")?;
    let open = expect_token(tokens, 4, TokenKind::OBrace, "after ')'")?;
    if tokens.len() == 5 {
        return Err(BuildFailure::malformed("unclosed block", open.span));
    }

    let (consequent, alternate) = scan_blocks(&tokens[4..])?;
    trace!(
        consequent = consequent.len(),
        alternate = alternate.len(),
        "built conditional blocks"
    );

    Ok(ConditionalStatement {
        test: Identifier {
            name: test.value.clone(),
            span: test.span,
        },
        consequent,
        alternate,
        span: Span::cover(first.span, tokens[tokens.len() - 1].span),
    })
}

fn push_statement(
    tokens: &[Token],
    block: Block,
    consequent: &mut Vec<Statement>,
    alternate: &mut Vec<Statement>,
) -> BuildResult<()> {
    let statement = build_statement(tokens).map_err(BuildFailure::committed)?;
    if block == Block::Alternate {
        alternate.push(statement);
    } else {
        consequent.push(statement);
    }
    Ok(())
}

/// Scans `{ ... } [else { ... }]`; `tokens[0]` is the consequent's opening brace.
fn scan_blocks(tokens: &[Token]) -> BuildResult<(Vec<Statement>, Vec<Statement>)> {
    let mut consequent = Vec::new();
    let mut alternate = Vec::new();
    let mut depth = 0usize;
    let mut block = Block::Opening;
    let mut pending = 0usize;
    let mut nested: Option<NestedConditional> = None;

    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];

        match token.kind {
            TokenKind::OBrace => {
                if depth == 0 {
                    block = match block {
                        Block::Opening => Block::Consequent,
                        Block::ElseKeyword => Block::Alternate,
                        _ => return Err(BuildFailure::malformed("unexpected '{'", token.span)),
                    };
                    pending = index + 1;
                } else if depth == 1 && nested.is_none() {
                    return Err(BuildFailure::malformed(
                        "unexpected '{' inside block",
                        token.span,
                    ));
                }
                depth += 1;
            }

            TokenKind::CBrace => {
                if depth == 0 {
                    return Err(BuildFailure::malformed("unmatched '}'", token.span));
                }
                depth -= 1;

                if depth == 0 {
                    if pending < index {
                        // Statement left open when the body closed, e.g. `{ x = 1 }`.
                        let failure = match build_statement(&tokens[pending..index]) {
                            Err(failure) => failure.committed(),
                            Ok(_) => BuildFailure::malformed(
                                "expected ';' before '}'",
                                tokens[index - 1].span.after(),
                            ),
                        };
                        return Err(failure);
                    }
                    block = if block == Block::Consequent {
                        Block::AwaitingElse
                    } else {
                        Block::Closed
                    };
                } else if depth == 1
                    && let Some(conditional) = nested.as_mut()
                {
                    let else_follows = tokens
                        .get(index + 1)
                        .is_some_and(|next| next.is(TokenKind::Else));
                    if else_follows && !conditional.else_taken {
                        conditional.else_taken = true;
                        index += 2;
                        continue;
                    }

                    push_statement(&tokens[pending..=index], block, &mut consequent, &mut alternate)?;
                    pending = index + 1;
                    nested = None;
                }
            }

            TokenKind::If => {
                if depth == 0 {
                    return Err(BuildFailure::malformed("unexpected 'if'", token.span));
                }
                if depth == 1 && nested.is_none() {
                    if pending != index {
                        return Err(BuildFailure::malformed(
                            "expected ';' before 'if'",
                            tokens[index - 1].span.after(),
                        ));
                    }
                    nested = Some(NestedConditional { else_taken: false });
                }
            }

            TokenKind::Else => {
                if depth == 0 && block == Block::AwaitingElse {
                    block = Block::ElseKeyword;
                } else if !(depth >= 2 && nested.is_some()) {
                    return Err(BuildFailure::malformed("unexpected 'else'", token.span));
                }
            }

            TokenKind::Semicolon if depth == 1 && nested.is_none() => {
                push_statement(&tokens[pending..=index], block, &mut consequent, &mut alternate)?;
                pending = index + 1;
            }

            _ if depth == 0 => {
                let message = if block == Block::ElseKeyword {
                    format!("expected '{{' after 'else', found {}", describe_found(token))
                } else {
                    format!("unexpected {} after conditional block", describe_found(token))
                };
                return Err(BuildFailure::malformed(message, token.span));
            }

            _ => {}
        }

        index += 1;
    }

    let end = tokens[tokens.len() - 1].span.after();
    if depth != 0 {
        return Err(BuildFailure::malformed("unmatched braces: block is never closed", end));
    }
    if block == Block::ElseKeyword {
        return Err(BuildFailure::malformed("expected '{' after 'else'", end));
    }

    Ok((consequent, alternate))
}
