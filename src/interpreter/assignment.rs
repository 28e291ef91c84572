use tracing::debug;

use crate::{
    ast::AssignmentExpression,
    environment::Environment,
    interpreter::{InterpretError, InterpretResult, Interpreter},
};

impl Interpreter<'_> {
    /// `name = value`: returns `env` with that one binding's value replaced.
    ///
    /// Checks run in order: the variable exists, it is mutable, the right-hand
    /// side yields a value, and that value's type is the declared type.
    pub fn evaluate_assignment(
        &mut self,
        env: &Environment,
        node: &AssignmentExpression,
    ) -> InterpretResult<Environment> {
        let name = &node.left.name;
        let not_found = || InterpretError::VariableNotFound {
            name: name.clone(),
            span: node.left.span,
        };

        let info = env.get(name).ok_or_else(not_found)?;
        if !info.is_mutable {
            return Err(InterpretError::ImmutableAssignment {
                name: name.clone(),
                span: node.left.span,
            });
        }
        let declared = info.var_type;

        let value = self.evaluate_value(env, &node.right)?;
        self.check_type(name, declared, &value, node.right.span())?;

        debug!(name = %name, value = %value, "assigned variable");
        env.with_value(name, value.canonical()).ok_or_else(not_found)
    }
}
