use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::BuildError;
use super::Value;

/// A registered property or action callable, shareable across threads.
pub type HandlerFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// A named callable together with the context type that routes its input.
#[derive(Clone)]
pub(crate) struct Handler {
    pub(crate) context_type: String,
    pub(crate) func: HandlerFn,
}

/// Explicit name → (context type, callable) tables for properties and
/// actions. Built once by the engine builder; lookups at evaluation time are
/// plain map gets, never name reflection.
#[derive(Clone, Default)]
pub(crate) struct Registry {
    properties: HashMap<String, Handler>,
    actions: HashMap<String, Handler>,
}

impl Registry {
    pub(crate) fn register_property(
        &mut self,
        name: &str,
        context_type: &str,
        func: HandlerFn,
    ) -> Result<(), BuildError> {
        if self.properties.contains_key(name) {
            return Err(BuildError::DuplicateProperty {
                name: name.to_owned(),
            });
        }
        self.properties.insert(
            name.to_owned(),
            Handler {
                context_type: context_type.to_owned(),
                func,
            },
        );
        Ok(())
    }

    pub(crate) fn register_action(
        &mut self,
        name: &str,
        context_type: &str,
        func: HandlerFn,
    ) -> Result<(), BuildError> {
        if self.actions.contains_key(name) {
            return Err(BuildError::DuplicateAction {
                name: name.to_owned(),
            });
        }
        self.actions.insert(
            name.to_owned(),
            Handler {
                context_type: context_type.to_owned(),
                func,
            },
        );
        Ok(())
    }

    pub(crate) fn property(&self, name: &str) -> Option<&Handler> {
        self.properties.get(name)
    }

    pub(crate) fn action(&self, name: &str) -> Option<&Handler> {
        self.actions.get(name)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("properties", &self.properties.keys())
            .field("actions", &self.actions.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> HandlerFn {
        Arc::new(|v: &Value| v.clone())
    }

    #[test]
    fn register_and_look_up() {
        let mut reg = Registry::default();
        reg.register_property("get_color", "color", identity())
            .unwrap();
        let handler = reg.property("get_color").unwrap();
        assert_eq!(handler.context_type, "color");
        assert!(reg.property("other").is_none());
    }

    #[test]
    fn duplicate_property_rejected() {
        let mut reg = Registry::default();
        reg.register_property("get_color", "color", identity())
            .unwrap();
        let err = reg
            .register_property("get_color", "color", identity())
            .unwrap_err();
        assert!(matches!(err, BuildError::DuplicateProperty { name } if name == "get_color"));
    }

    #[test]
    fn property_and_action_namespaces_are_separate() {
        let mut reg = Registry::default();
        reg.register_property("tick", "counter", identity()).unwrap();
        reg.register_action("tick", "counter", identity()).unwrap();
        assert!(reg.property("tick").is_some());
        assert!(reg.action("tick").is_some());
    }
}
