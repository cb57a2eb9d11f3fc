use std::collections::HashMap;

use thiserror::Error;

use crate::types::{Context, Operand, Outcome, Registry, ResolvedExpr, Rule, RuleEngine, Value};

/// Evaluation-time dispatch failures: misconfigured rule sets, not expected
/// at steady state. The evaluation call aborts; nothing is silently skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },

    #[error("no property '{name}' registered")]
    UnknownProperty { name: String },

    #[error("no action '{name}' registered")]
    UnknownAction { name: String },

    #[error("context entry '{context_type}' required by '{name}' is missing")]
    MissingContext { name: String, context_type: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Policy {
    FirstMatch,
    All,
}

pub(crate) fn evaluate(
    engine: &RuleEngine,
    rule_names: &[&str],
    ctx: &Context,
    policy: Policy,
) -> Result<Outcome, DispatchError> {
    let mut selected: Vec<&Rule> = Vec::with_capacity(rule_names.len());
    for name in rule_names {
        let rule = engine.rule(name).ok_or_else(|| DispatchError::UnknownRule {
            name: (*name).to_owned(),
        })?;
        selected.push(rule);
    }

    // Property values are snapshotted once per call: the same property used
    // by several rules is computed exactly once, and guards never observe
    // mid-call action results.
    let snapshot = snapshot_properties(&selected, engine.registry(), ctx)?;

    let mut outcome = Outcome::default();
    for rule in selected {
        if !eval_expr(rule.resolved(), &snapshot)? {
            continue;
        }
        outcome.mark_fired(rule.name());
        if let Some(action) = rule.action() {
            dispatch_action(action, engine.registry(), ctx, &mut outcome)?;
        }
        if policy == Policy::FirstMatch {
            break;
        }
    }
    Ok(outcome)
}

fn snapshot_properties(
    rules: &[&Rule],
    registry: &Registry,
    ctx: &Context,
) -> Result<HashMap<String, Value>, DispatchError> {
    let mut names = Vec::new();
    for rule in rules {
        rule.resolved().property_names(&mut names);
    }
    let mut snapshot = HashMap::with_capacity(names.len());
    for name in names {
        let handler = registry
            .property(&name)
            .ok_or_else(|| DispatchError::UnknownProperty { name: name.clone() })?;
        let input =
            ctx.get(&handler.context_type)
                .ok_or_else(|| DispatchError::MissingContext {
                    name: name.clone(),
                    context_type: handler.context_type.clone(),
                })?;
        snapshot.insert(name, (handler.func)(input));
    }
    Ok(snapshot)
}

fn dispatch_action(
    name: &str,
    registry: &Registry,
    ctx: &Context,
    outcome: &mut Outcome,
) -> Result<(), DispatchError> {
    let handler = registry
        .action(name)
        .ok_or_else(|| DispatchError::UnknownAction {
            name: name.to_owned(),
        })?;
    let result = {
        // An earlier action in this call may already have produced a value
        // for this context type; chain off it, else use the caller's context.
        let input = outcome
            .get(&handler.context_type)
            .or_else(|| ctx.get(&handler.context_type))
            .ok_or_else(|| DispatchError::MissingContext {
                name: name.to_owned(),
                context_type: handler.context_type.clone(),
            })?;
        (handler.func)(input)
    };
    outcome.record(&handler.context_type, result);
    Ok(())
}

fn eval_expr(
    expr: &ResolvedExpr,
    snapshot: &HashMap<String, Value>,
) -> Result<bool, DispatchError> {
    match expr {
        ResolvedExpr::Condition(c) => {
            let subject = operand_value(&c.subject, snapshot)?;
            let object = operand_value(&c.object, snapshot)?;
            // Incomparable operand types make the leaf false, not an error.
            Ok(subject.compare(c.op, object).unwrap_or(false))
        }
        // Both children are always evaluated; no short-circuiting.
        ResolvedExpr::And(a, b) => Ok(eval_expr(a, snapshot)? & eval_expr(b, snapshot)?),
        ResolvedExpr::Or(a, b) => Ok(eval_expr(a, snapshot)? | eval_expr(b, snapshot)?),
        ResolvedExpr::Not(inner) => Ok(!eval_expr(inner, snapshot)?),
    }
}

fn operand_value<'a>(
    operand: &'a Operand,
    snapshot: &'a HashMap<String, Value>,
) -> Result<&'a Value, DispatchError> {
    match operand {
        Operand::Literal(value) => Ok(value),
        Operand::Property(name) => {
            snapshot
                .get(name)
                .ok_or_else(|| DispatchError::UnknownProperty { name: name.clone() })
        }
    }
}
