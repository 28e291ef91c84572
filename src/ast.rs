//! # Slate - Abstract Syntax Tree
//!
//! This module defines the tree produced by the [`crate::builder`] layer and
//! consumed by the interpreter and the formatter.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Tokens and source spans handed over by the lexer
//! - **[expressions]** - Literals, identifiers, binary, call and assignment expressions
//! - **[operators]** - Binary operators
//! - **[statements]** - Declarations, expression statements, conditionals and the program root
//!
//! ## Quick Start
//!
//! ```text
//! let limit: number = 10;
//! const greeting: string = "hi";
//! if (limit) {
//!     println(greeting + " " + limit);
//! } else {
//!     println("nothing to do");
//! }
//! ```
//!
//! ## Core Concepts
//!
//! The node set is closed: every consumer matches exhaustively over
//! [`Statement`] and [`Expression`], so adding a variant is a compile error at
//! every dispatch site rather than a runtime fallthrough.
//!
//! Every node carries the [`Span`] it was built from so diagnostics can point
//! back at the source without re-scanning it.
pub mod tokens;
pub mod expressions;
pub mod operators;
pub mod statements;

pub use tokens::{Span, Token, TokenKind};
pub use expressions::{
    AssignmentExpression, BinaryExpression, CallExpression, Expression, Identifier, Literal,
    LiteralValue,
};
pub use operators::BinOp;
pub use statements::{
    ConditionalStatement, DeclarationKind, ExpressionStatement, Program, Statement,
    TypeAnnotation, VariableDeclaration, VariableDeclarator,
};
