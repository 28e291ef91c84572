use crate::{
    ast::{
        DeclarationKind, Identifier, Span, Token, TokenKind, TypeAnnotation, VariableDeclaration,
        VariableDeclarator,
    },
    builder::{
        BuildFailure, BuildResult, build_expression, describe_found, expect_token, slice_span,
        split_top_level_commas,
    },
};

fn type_annotation(token: &Token) -> Option<TypeAnnotation> {
    match token.kind {
        TokenKind::NumberType => Some(TypeAnnotation::Number),
        TokenKind::StringType => Some(TypeAnnotation::String),
        TokenKind::BooleanType => Some(TypeAnnotation::Boolean),
        _ => None,
    }
}

/// `name : type [= expression]`
fn build_declarator(tokens: &[Token]) -> BuildResult<VariableDeclarator> {
    let id = expect_token(tokens, 0, TokenKind::Identifier, "in declaration")?;
    let colon = expect_token(tokens, 1, TokenKind::Colon, "after variable name")?;

    let type_token = tokens.get(2).ok_or_else(|| {
        BuildFailure::malformed("expected type after ':'", colon.span.after())
    })?;
    let var_type = type_annotation(type_token).ok_or_else(|| {
        BuildFailure::malformed(
            format!("expected type after ':', found {}", describe_found(type_token)),
            type_token.span,
        )
    })?;

    let init = match tokens.get(3) {
        None => None,
        Some(assign) if assign.is(TokenKind::Assign) => {
            let value_tokens = &tokens[4..];
            if value_tokens.is_empty() {
                return Err(BuildFailure::malformed(
                    "expected expression after '='",
                    assign.span.after(),
                ));
            }
            Some(build_expression(value_tokens).map_err(|f| f.or_at(Some(assign.span.after())))?)
        }
        Some(other) => {
            return Err(BuildFailure::malformed(
                format!("expected '=' or ';' after type, found {}", describe_found(other)),
                other.span,
            ));
        }
    };

    Ok(VariableDeclarator {
        id: Identifier {
            name: id.value.clone(),
            span: id.span,
        },
        var_type,
        init,
        span: Span::cover(id.span, tokens[tokens.len() - 1].span),
    })
}

/// `let|const declarator (, declarator)* ;`
pub fn build_variable_declaration(tokens: &[Token]) -> BuildResult<VariableDeclaration> {
    let kind = match tokens.first().map(|t| t.kind) {
        Some(TokenKind::Let) => DeclarationKind::Let,
        Some(TokenKind::Const) => DeclarationKind::Const,
        _ => {
            return Err(BuildFailure::mismatch(
                "not a variable declaration",
                slice_span(tokens),
            ));
        }
    };

    let keyword = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    if tokens.len() == 1 {
        return Err(BuildFailure::malformed(
            format!("expected identifier after {}", keyword.kind.describe()),
            keyword.span.after(),
        ));
    }
    if !last.is(TokenKind::Semicolon) {
        return Err(BuildFailure::malformed(
            "expected ';' at end of declaration",
            last.span.after(),
        ));
    }

    let body = &tokens[1..tokens.len() - 1];
    if body.is_empty() {
        return Err(BuildFailure::malformed(
            format!("expected identifier after {}", keyword.kind.describe()),
            keyword.span.after(),
        ));
    }

    let mut declarations = Vec::new();
    for part in split_top_level_commas(body) {
        if part.is_empty() {
            return Err(BuildFailure::malformed("expected declarator", last.span));
        }
        declarations.push(build_declarator(part).map_err(BuildFailure::committed)?);
    }

    Ok(VariableDeclaration {
        kind,
        declarations,
        span: Span::cover(keyword.span, last.span),
    })
}
