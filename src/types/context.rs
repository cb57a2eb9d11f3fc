use std::collections::HashMap;

use super::Value;

/// Runtime context mapping context-type names to values, supplied fresh per
/// evaluation call. Property functions read from it; action results are
/// recorded separately in the call's [`Outcome`](super::Outcome).
#[derive(Debug, Clone, Default)]
pub struct Context {
    data: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a context-type value, chainable.
    #[must_use]
    pub fn set(mut self, context_type: &str, value: impl Into<Value>) -> Self {
        self.insert(context_type, value.into());
        self
    }

    /// Insert a context-type value (mutable reference version).
    pub fn insert(&mut self, context_type: &str, value: Value) {
        self.data.insert(context_type.to_owned(), value);
    }

    /// Look up the value for a context type.
    #[must_use]
    pub fn get(&self, context_type: &str) -> Option<&Value> {
        self.data.get(context_type)
    }
}
