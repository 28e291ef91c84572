//! Source formatter driven by a [`StyleConfig`].
//!
//! Formatting works on the AST, so comments and original spacing are not
//! preserved. Output always ends with a newline unless the program is empty.
//!
//! # Examples
//!
//! ```
//! use slate_lang::{Lexer, StyleConfig, build_program, format_program};
//!
//! let tokens = Lexer::new("let x:number=5;if(x){println(x);}").tokenize().unwrap();
//! let program = build_program(&tokens).unwrap();
//!
//! let config = StyleConfig { spaces_in_assign_symbol: 1, ..StyleConfig::default() };
//! assert_eq!(
//!     format_program(&program, &config),
//!     "let x: number = 5;\nif (x) {\n    println(x);\n}\n"
//! );
//! ```

use crate::{
    ast::{
        BinaryExpression, ConditionalStatement, DeclarationKind, Expression, LiteralValue,
        Program, Statement, VariableDeclaration, VariableDeclarator,
    },
    config::StyleConfig,
};

pub struct SourcePrinter<'c> {
    config: &'c StyleConfig,
}

impl<'c> SourcePrinter<'c> {
    pub fn new(config: &'c StyleConfig) -> Self {
        SourcePrinter { config }
    }

    pub fn print(&self, program: &Program) -> String {
        let mut out = String::new();
        self.print_block(&program.statements, 0, &mut out);
        out
    }

    fn print_block(&self, statements: &[Statement], level: usize, out: &mut String) {
        for statement in statements {
            self.print_statement(statement, level, out);
        }
    }

    fn print_statement(&self, statement: &Statement, level: usize, out: &mut String) {
        match statement {
            Statement::VariableDeclaration(node) => {
                out.push_str(&self.indent(level));
                out.push_str(&self.print_declaration(node));
            }
            Statement::Expression(node) => {
                if is_println(&node.expression) {
                    out.push_str(&"\n".repeat(self.config.line_breaks_before_println));
                }
                out.push_str(&self.indent(level));
                out.push_str(&self.print_expression(&node.expression));
                out.push(';');
            }
            Statement::Conditional(node) => self.print_conditional(node, level, out),
        }
        out.push('\n');
    }

    fn print_declaration(&self, node: &VariableDeclaration) -> String {
        let keyword = match node.kind {
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        };
        let declarators: Vec<String> = node
            .declarations
            .iter()
            .map(|d| self.print_declarator(d))
            .collect();
        format!("{} {};", keyword, declarators.join(", "))
    }

    fn print_declarator(&self, node: &VariableDeclarator) -> String {
        let before = if self.config.space_before_colon { " " } else { "" };
        let after = if self.config.space_after_colon { " " } else { "" };
        let mut text = format!("{}{}:{}{}", node.id.name, before, after, node.var_type.keyword());
        if let Some(init) = &node.init {
            text.push_str(&self.assign_symbol());
            text.push_str(&self.print_expression(init));
        }
        text
    }

    // Closing `}` and `else` share a line; the branch bodies go one level deeper.
    fn print_conditional(&self, node: &ConditionalStatement, level: usize, out: &mut String) {
        let indent = self.indent(level);
        out.push_str(&format!("{}if ({}) {{\n", indent, node.test.name));
        self.print_block(&node.consequent, level + 1, out);
        if node.alternate.is_empty() {
            out.push_str(&indent);
            out.push('}');
            return;
        }
        out.push_str(&format!("{}}} else {{\n", indent));
        self.print_block(&node.alternate, level + 1, out);
        out.push_str(&indent);
        out.push('}');
    }

    fn print_expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::Literal(node) => match &node.value {
                LiteralValue::Number(n) => n.to_string(),
                LiteralValue::String(s) => format!("\"{}\"", self.escape_string(s)),
                LiteralValue::Boolean(b) => b.to_string(),
            },
            Expression::Identifier(node) => node.name.clone(),
            Expression::Binary(node) => self.print_binary(node),
            Expression::Call(node) => {
                let arguments: Vec<String> = node
                    .arguments
                    .iter()
                    .map(|a| self.print_expression(a))
                    .collect();
                format!("{}({})", node.callee.name, arguments.join(", "))
            }
            Expression::Assignment(node) => format!(
                "{}{}{}",
                node.left.name,
                self.assign_symbol(),
                self.print_expression(&node.right)
            ),
        }
    }

    fn print_binary(&self, node: &BinaryExpression) -> String {
        if node.is_negation() {
            return format!("-{}", self.print_operand(&node.right, |_| true));
        }
        let precedence = node.operator.precedence();
        // Operators associate left, so an equal-precedence right operand needs parentheses too.
        let left = self.print_operand(&node.left, |p| p < precedence);
        let right = self.print_operand(&node.right, |p| p <= precedence);
        format!("{} {} {}", left, node.operator.symbol(), right)
    }

    fn print_operand(&self, operand: &Expression, needs_parens: impl Fn(u8) -> bool) -> String {
        let text = self.print_expression(operand);
        match operand {
            Expression::Binary(inner)
                if !inner.is_negation() && needs_parens(inner.operator.precedence()) =>
            {
                format!("({})", text)
            }
            _ => text,
        }
    }

    fn assign_symbol(&self) -> String {
        let padding = " ".repeat(self.config.spaces_in_assign_symbol);
        format!("{}={}", padding, padding)
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.config.if_block_indent)
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c => vec![c],
            })
            .collect()
    }
}

fn is_println(expression: &Expression) -> bool {
    matches!(expression, Expression::Call(call) if call.callee.name == "println")
}

/// Formats a program with the given style.
pub fn format_program(program: &Program, config: &StyleConfig) -> String {
    SourcePrinter::new(config).print(program)
}
