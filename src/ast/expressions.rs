use rust_decimal::Decimal;
use serde::Serialize;

use crate::ast::{BinOp, Span};

/// Value carried by a literal node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralValue {
    /// Arbitrary-precision decimal
    ///
    /// # Example
    /// ```text
    /// 42
    /// 0.5
    /// ```
    Number(Decimal),

    /// String literal
    ///
    /// # Example
    /// ```text
    /// "hello"
    /// ```
    String(String),

    /// Boolean literal, only evaluable from version 1.1.0 on
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
    pub span: Span,
}

/// A variable or function name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Binary operation
///
/// # Example
/// ```text
/// price * 2 + fee
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    pub operator: BinOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

impl BinaryExpression {
    /// Whether this is a unary `-operand`, stored as `0 - operand`.
    ///
    /// The builder gives the synthesized zero an empty span, which no source
    /// literal can have.
    pub fn is_negation(&self) -> bool {
        self.operator == BinOp::Subtract
            && matches!(
                &*self.left,
                Expression::Literal(Literal { value: LiteralValue::Number(n), span })
                    if n.is_zero() && span.start == span.end
            )
    }
}

/// Function call
///
/// # Examples
/// ```text
/// println(total)
/// readInput("Name: ")
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// Assignment to an existing variable
///
/// # Example
/// ```text
/// total = total + 1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentExpression {
    pub left: Identifier,
    pub right: Box<Expression>,
    pub span: Span,
}

/// Expression node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    Binary(BinaryExpression),
    Call(CallExpression),
    Assignment(AssignmentExpression),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Literal(node) => node.span,
            Expression::Identifier(node) => node.span,
            Expression::Binary(node) => node.span,
            Expression::Call(node) => node.span,
            Expression::Assignment(node) => node.span,
        }
    }
}
