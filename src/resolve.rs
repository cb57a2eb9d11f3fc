use thiserror::Error;

use crate::types::{Condition, ResolvedExpr, SymbolicExpr};

/// The substitutor found a placeholder with no corresponding condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no condition supplied for placeholder {index}")]
pub struct MissingConditionError {
    /// The 1-based condition index that could not be resolved.
    pub index: usize,
}

/// Replace every placeholder in a symbolic tree with a snapshot copy of the
/// corresponding condition (1-based indices into `conditions`).
///
/// The single-condition marker resolves to condition 1 with no boolean
/// wrapper. Substitution is pure: resolving the same inputs twice yields
/// structurally equal trees, and the resolved tree owns its conditions, so
/// later condition-store changes never reach an existing tree.
///
/// # Errors
///
/// Returns [`MissingConditionError`] if a referenced index has no condition.
pub fn resolve(
    expr: &SymbolicExpr,
    conditions: &[Condition],
) -> Result<ResolvedExpr, MissingConditionError> {
    match expr {
        SymbolicExpr::Single => condition_at(conditions, 1).map(ResolvedExpr::Condition),
        SymbolicExpr::Placeholder(index) => {
            condition_at(conditions, *index).map(ResolvedExpr::Condition)
        }
        SymbolicExpr::Not(inner) => Ok(ResolvedExpr::Not(Box::new(resolve(inner, conditions)?))),
        SymbolicExpr::And(a, b) => Ok(ResolvedExpr::And(
            Box::new(resolve(a, conditions)?),
            Box::new(resolve(b, conditions)?),
        )),
        SymbolicExpr::Or(a, b) => Ok(ResolvedExpr::Or(
            Box::new(resolve(a, conditions)?),
            Box::new(resolve(b, conditions)?),
        )),
    }
}

fn condition_at(conditions: &[Condition], index: usize) -> Result<Condition, MissingConditionError> {
    index
        .checked_sub(1)
        .and_then(|i| conditions.get(i))
        .cloned()
        .ok_or(MissingConditionError { index })
}
