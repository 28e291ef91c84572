use tracing::debug;

use crate::{
    ast::{ConditionalStatement, Expression, Program, Statement},
    environment::Environment,
    interpreter::{InterpretResult, Interpreter},
};

impl Interpreter<'_> {
    /// Runs a program from `env`, returning the final environment.
    pub fn run(&mut self, env: &Environment, program: &Program) -> InterpretResult<Environment> {
        self.execute_block(env, &program.statements)
    }

    /// Runs statements in order, each against the environment left by the previous one.
    pub fn execute_block(
        &mut self,
        env: &Environment,
        statements: &[Statement],
    ) -> InterpretResult<Environment> {
        statements
            .iter()
            .try_fold(env.clone(), |current, statement| self.execute(&current, statement))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(kind = statement.kind_name()))]
    pub fn execute(
        &mut self,
        env: &Environment,
        statement: &Statement,
    ) -> InterpretResult<Environment> {
        debug!(span = %statement.span(), "executing statement");
        match statement {
            Statement::VariableDeclaration(node) => self.evaluate_declaration(env, node),
            Statement::Expression(node) => match &node.expression {
                Expression::Assignment(assignment) => self.evaluate_assignment(env, assignment),
                other => {
                    self.evaluate(env, other)?;
                    Ok(env.clone())
                }
            },
            Statement::Conditional(node) => self.evaluate_conditional(env, node),
        }
    }

    /// Runs the consequent when the test variable is truthy, the alternate otherwise.
    ///
    /// Blocks share the enclosing environment: assignments and declarations
    /// made inside a branch stay visible afterwards.
    pub fn evaluate_conditional(
        &mut self,
        env: &Environment,
        node: &ConditionalStatement,
    ) -> InterpretResult<Environment> {
        let test = self.evaluate_identifier(env, &node.test)?;
        let taken = test.is_truthy();
        debug!(test = %node.test.name, taken, "conditional");

        let branch = if taken {
            &node.consequent
        } else {
            &node.alternate
        };
        self.execute_block(env, branch)
    }
}
