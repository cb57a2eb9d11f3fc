use std::collections::HashMap;

use serde::Serialize;

use super::Value;

/// The result of one evaluation call: action results keyed by context type,
/// plus the names of the rules whose guards held, in evaluation order.
///
/// An empty outcome means no rule in the list matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use]
pub struct Outcome {
    results: HashMap<String, Value>,
    fired: Vec<String>,
}

impl Outcome {
    pub(crate) fn record(&mut self, context_type: &str, value: Value) {
        self.results.insert(context_type.to_owned(), value);
    }

    pub(crate) fn mark_fired(&mut self, rule_name: &str) {
        self.fired.push(rule_name.to_owned());
    }

    /// The action result recorded for a context type, if any.
    #[must_use]
    pub fn get(&self, context_type: &str) -> Option<&Value> {
        self.results.get(context_type)
    }

    /// All recorded action results, keyed by context type.
    #[must_use]
    pub fn results(&self) -> &HashMap<String, Value> {
        &self.results
    }

    /// Names of the rules whose guards evaluated true, in order.
    #[must_use]
    pub fn fired(&self) -> &[String] {
        &self.fired
    }

    /// True when no rule matched (and therefore no action ran).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcome() {
        let outcome = Outcome::default();
        assert!(outcome.is_empty());
        assert!(outcome.results().is_empty());
        assert_eq!(outcome.get("anything"), None);
    }

    #[test]
    fn record_and_get() {
        let mut outcome = Outcome::default();
        outcome.mark_fired("turn-yellow");
        outcome.record("trafficlight", Value::from("yellow"));
        assert!(!outcome.is_empty());
        assert_eq!(outcome.get("trafficlight"), Some(&Value::from("yellow")));
        assert_eq!(outcome.fired(), ["turn-yellow".to_owned()]);
    }

    #[test]
    fn fired_without_action_result() {
        // A matching rule bound to no action fires but records nothing.
        let mut outcome = Outcome::default();
        outcome.mark_fired("observe");
        assert!(!outcome.is_empty());
        assert!(outcome.results().is_empty());
    }
}
