use tracing::debug;

use crate::{
    ast::{DeclarationKind, VariableDeclaration, VariableDeclarator},
    environment::{Environment, VarType, VariableInfo},
    interpreter::{InterpretError, InterpretResult, Interpreter},
    version::Feature,
};

impl Interpreter<'_> {
    /// Folds the declarators left to right; each one sees the bindings made
    /// by the ones before it.
    pub fn evaluate_declaration(
        &mut self,
        env: &Environment,
        node: &VariableDeclaration,
    ) -> InterpretResult<Environment> {
        node.declarations
            .iter()
            .try_fold(env.clone(), |current, declarator| {
                self.evaluate_declarator(&current, node.kind, declarator)
            })
    }

    fn evaluate_declarator(
        &mut self,
        env: &Environment,
        kind: DeclarationKind,
        node: &VariableDeclarator,
    ) -> InterpretResult<Environment> {
        let declared = VarType::from(node.var_type);
        if declared == VarType::Bool {
            self.require_feature(Feature::Boolean, node.span)?;
        }

        let value = match &node.init {
            Some(init) => {
                let value = self.evaluate_value(env, init)?;
                self.check_type(&node.id.name, declared, &value, init.span())?;
                Some(value.canonical())
            }
            None if kind == DeclarationKind::Const => {
                return Err(InterpretError::ConstantWithoutInitializer {
                    name: node.id.name.clone(),
                    span: node.id.span,
                });
            }
            None => None,
        };

        debug!(
            name = %node.id.name,
            var_type = %declared,
            initialized = value.is_some(),
            "declared variable"
        );
        let info = VariableInfo::new(declared, value, kind == DeclarationKind::Let);
        Ok(env.with_binding(node.id.name.clone(), info))
    }
}
