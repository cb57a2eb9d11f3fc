use thiserror::Error;

use crate::logic::GrammarError;
use crate::resolve::MissingConditionError;

/// Errors detected while building a [`RuleEngine`](super::RuleEngine).
///
/// All registration problems surface here, before any evaluation runs:
/// evaluation-time dispatch can then assume every name resolves.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("duplicate rule name '{name}'")]
    DuplicateRule { name: String },

    #[error("duplicate property '{name}'")]
    DuplicateProperty { name: String },

    #[error("duplicate action '{name}'")]
    DuplicateAction { name: String },

    #[error("invalid logic for rule '{rule}': {source}")]
    InvalidLogic {
        rule: String,
        source: GrammarError,
    },

    #[error("rule '{rule}': {source}")]
    UnresolvedCondition {
        rule: String,
        source: MissingConditionError,
    },

    #[error("rule '{rule}' references unknown property '{property}'")]
    UnknownProperty { rule: String, property: String },

    #[error("rule '{rule}' references unknown action '{action}'")]
    UnknownAction { rule: String, action: String },
}
