//! The variable environment.
//!
//! `Environment` is a persistent map: every write returns a new environment
//! and leaves the old one untouched. `im::HashMap` shares all unchanged
//! entries between the two, so keeping a snapshot per statement is cheap and
//! snapshots can be handed across threads without locks.

use im::HashMap;

use crate::ast::TypeAnnotation;

/// Declared type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Number,
    String,
    Bool,
}

impl VarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VarType::Number => "number",
            VarType::String => "string",
            VarType::Bool => "bool",
        }
    }
}

impl From<TypeAnnotation> for VarType {
    fn from(annotation: TypeAnnotation) -> Self {
        match annotation {
            TypeAnnotation::Number => VarType::Number,
            TypeAnnotation::String => VarType::String,
            TypeAnnotation::Boolean => VarType::Bool,
        }
    }
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the environment knows about one variable.
///
/// `value` holds the canonical text of the current value and is re-parsed
/// according to `var_type` on every read; `None` means declared but never
/// initialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInfo {
    pub var_type: VarType,
    pub value: Option<String>,
    pub is_mutable: bool,
}

impl VariableInfo {
    pub fn new(var_type: VarType, value: Option<String>, is_mutable: bool) -> Self {
        VariableInfo {
            var_type,
            value,
            is_mutable,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, VariableInfo>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&VariableInfo> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// New environment with `name` bound (or rebound) to `info`.
    #[must_use]
    pub fn with_binding(&self, name: impl Into<String>, info: VariableInfo) -> Environment {
        Environment {
            bindings: self.bindings.update(name.into(), info),
        }
    }

    /// New environment where the existing `name` holds `value`; type and
    /// mutability are kept. Returns `None` if `name` is unbound.
    #[must_use]
    pub fn with_value(&self, name: &str, value: String) -> Option<Environment> {
        let info = self.get(name)?;
        let updated = VariableInfo {
            value: Some(value),
            ..info.clone()
        };
        Some(self.with_binding(name, updated))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VariableInfo)> {
        self.bindings.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, VariableInfo)> for Environment {
    fn from_iter<T: IntoIterator<Item = (K, VariableInfo)>>(iter: T) -> Self {
        Environment {
            bindings: iter
                .into_iter()
                .map(|(name, info)| (name.into(), info))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: &str, is_mutable: bool) -> VariableInfo {
        VariableInfo::new(VarType::Number, Some(value.to_string()), is_mutable)
    }

    #[test]
    fn writes_leave_the_original_untouched() {
        let before = Environment::new().with_binding("x", number("1", true));
        let after = before.with_value("x", "2".to_string()).unwrap();

        assert_eq!(before.get("x").unwrap().value.as_deref(), Some("1"));
        assert_eq!(after.get("x").unwrap().value.as_deref(), Some("2"));
    }

    #[test]
    fn with_value_keeps_type_and_mutability() {
        let env = Environment::new().with_binding("x", number("1", false));
        let updated = env.with_value("x", "3".to_string()).unwrap();
        let info = updated.get("x").unwrap();
        assert_eq!(info.var_type, VarType::Number);
        assert!(!info.is_mutable);
    }

    #[test]
    fn with_value_on_unbound_name_is_none() {
        assert!(Environment::new().with_value("nope", "1".into()).is_none());
    }

    #[test]
    fn collects_from_pairs() {
        let env: Environment = vec![("a", number("1", true)), ("b", number("2", true))]
            .into_iter()
            .collect();
        assert_eq!(env.len(), 2);
        assert!(env.contains("b"));
    }
}
