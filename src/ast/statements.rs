use serde::Serialize;

use crate::ast::{Expression, Identifier, Span};

/// `let` declares a mutable binding, `const` an immutable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclarationKind {
    Let,
    Const,
}

/// Declared type as written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeAnnotation {
    Number,
    String,
    Boolean,
}

impl TypeAnnotation {
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeAnnotation::Number => "number",
            TypeAnnotation::String => "string",
            TypeAnnotation::Boolean => "boolean",
        }
    }
}

/// One `name: type [= init]` entry of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub var_type: TypeAnnotation,
    pub init: Option<Expression>,
    pub span: Span,
}

/// Variable declaration
///
/// # Examples
/// ```text
/// let count: number = 0;
/// const a: string = "x", b: string = a;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    pub kind: DeclarationKind,
    pub declarations: Vec<VariableDeclarator>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

/// Conditional statement
///
/// The test is always a single identifier; `alternate` is empty when there is no `else`.
///
/// # Example
/// ```text
/// if (ready) { println("go"); } else { println("wait"); }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalStatement {
    pub test: Identifier,
    pub consequent: Vec<Statement>,
    pub alternate: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    Expression(ExpressionStatement),
    Conditional(ConditionalStatement),
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::VariableDeclaration(node) => node.span,
            Statement::Expression(node) => node.span,
            Statement::Conditional(node) => node.span,
        }
    }

    /// Short label for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::VariableDeclaration(_) => "declaration",
            Statement::Expression(_) => "expression",
            Statement::Conditional(_) => "conditional",
        }
    }
}

/// A whole source file: statements in program order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}
