use thiserror::Error;

use crate::evaluate::DispatchError;
use crate::logic::GrammarError;
use crate::resolve::MissingConditionError;
use crate::serial::SerializeError;
use crate::types::BuildError;

/// Any error this crate can produce, for callers that want a single type.
///
/// The per-stage errors remain available where finer handling matters.
#[derive(Debug, Error)]
pub enum RuleTreeError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    MissingCondition(#[from] MissingConditionError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}
