use crate::error::RuleTreeError;
use crate::logic::compile;
use crate::resolve::{resolve, MissingConditionError};

use super::expr::{ResolvedExpr, SymbolicExpr};
use super::Condition;

/// A named rule: a logic string over numbered conditions, the ordered
/// condition list those numbers refer to, and an optional bound action.
///
/// The logic string is compiled once at construction. The resolved tree is
/// rebuilt from the stored symbolic tree whenever the condition set changes;
/// evaluation reuses it without recompilation.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    logic: String,
    conditions: Vec<Condition>,
    action: Option<String>,
    symbolic: SymbolicExpr,
    resolved: ResolvedExpr,
}

impl Rule {
    /// Compile `logic` against `conditions` (1-based order) and resolve the
    /// tree. `action` is the name of the action to dispatch when the guard
    /// holds; `None` means "do nothing".
    ///
    /// # Errors
    ///
    /// Returns [`RuleTreeError::Grammar`] for a malformed logic string and
    /// [`RuleTreeError::MissingCondition`] when the condition list is short.
    pub fn new(
        name: &str,
        logic: &str,
        conditions: Vec<Condition>,
        action: Option<String>,
    ) -> Result<Self, RuleTreeError> {
        let symbolic = compile(logic, conditions.len())?;
        let resolved = resolve(&symbolic, &conditions)?;
        Ok(Self {
            name: name.to_owned(),
            logic: logic.to_owned(),
            conditions,
            action,
            symbolic,
            resolved,
        })
    }

    /// Replace the condition set and re-resolve, without re-parsing the
    /// logic string. The new set must cover the same number of conditions.
    ///
    /// # Errors
    ///
    /// Returns [`MissingConditionError`] when a placeholder has no condition
    /// in the new set; the rule is left unchanged in that case.
    pub fn set_conditions(
        &mut self,
        conditions: Vec<Condition>,
    ) -> Result<(), MissingConditionError> {
        let resolved = resolve(&self.symbolic, &conditions)?;
        self.conditions = conditions;
        self.resolved = resolved;
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn logic(&self) -> &str {
        &self.logic
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The action dispatched when the guard holds, if any.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[must_use]
    pub fn symbolic(&self) -> &SymbolicExpr {
        &self.symbolic
    }

    #[must_use]
    pub fn resolved(&self) -> &ResolvedExpr {
        &self.resolved
    }
}
