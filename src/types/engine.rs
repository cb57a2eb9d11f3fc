use std::collections::HashMap;

use crate::evaluate::{self, DispatchError, Policy};

use super::error::BuildError;
use super::registry::{HandlerFn, Registry};
use super::rule::Rule;
use super::{CompareOp, Condition, Context, Operand, Outcome};

/// Builder for a [`RuleEngine`].
///
/// Properties, actions, and rules are declared up front; `build()` compiles
/// every logic string, resolves every condition set, and validates all name
/// references, so evaluation never has to.
///
/// # Example
///
/// ```
/// use ruletree::{literal, property, CompareOp, Context, RuleEngineBuilder};
///
/// let engine = RuleEngineBuilder::new()
///     .property("get_color", "trafficlight_color", |color| color.clone())
///     .action("set_color_to_yellow", "trafficlight", |_| "yellow".into())
///     .rule("turn-yellow", "1", |r| {
///         r.condition(property("get_color"), CompareOp::Eq, literal("green"))
///             .action("set_color_to_yellow")
///     })
///     .build()
///     .unwrap();
///
/// let ctx = Context::new()
///     .set("trafficlight_color", "green")
///     .set("trafficlight", "green");
/// let outcome = engine.eval_first_match(&["turn-yellow"], &ctx).unwrap();
/// assert_eq!(outcome.get("trafficlight"), Some(&"yellow".into()));
/// ```
#[derive(Default)]
pub struct RuleEngineBuilder {
    properties: Vec<(String, String, HandlerFn)>,
    actions: Vec<(String, String, HandlerFn)>,
    rules: Vec<PendingRule>,
}

struct PendingRule {
    name: String,
    logic: String,
    conditions: Vec<Condition>,
    action: Option<String>,
}

/// Intermediate builder passed to the rule definition closure.
#[derive(Debug, Default)]
pub struct RuleBuilder {
    conditions: Vec<Condition>,
    action: Option<String>,
}

impl RuleBuilder {
    /// Append the next numbered condition (conditions are 1-based, in
    /// declaration order).
    #[must_use]
    pub fn condition(mut self, subject: Operand, op: CompareOp, object: Operand) -> Self {
        self.conditions.push(Condition::new(subject, op, object));
        self
    }

    /// Bind the action dispatched when this rule's guard holds.
    #[must_use]
    pub fn action(mut self, name: &str) -> Self {
        self.action = Some(name.to_owned());
        self
    }
}

impl RuleEngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named property function routed through `context_type`.
    #[must_use]
    pub fn property(
        mut self,
        name: &str,
        context_type: &str,
        func: impl Fn(&super::Value) -> super::Value + Send + Sync + 'static,
    ) -> Self {
        self.properties.push((
            name.to_owned(),
            context_type.to_owned(),
            std::sync::Arc::new(func),
        ));
        self
    }

    /// Register a named action function routed through `context_type`.
    #[must_use]
    pub fn action(
        mut self,
        name: &str,
        context_type: &str,
        func: impl Fn(&super::Value) -> super::Value + Send + Sync + 'static,
    ) -> Self {
        self.actions.push((
            name.to_owned(),
            context_type.to_owned(),
            std::sync::Arc::new(func),
        ));
        self
    }

    /// Define a rule. The closure declares the ordered condition list the
    /// logic string's numbers refer to, and optionally binds an action.
    #[must_use]
    pub fn rule(mut self, name: &str, logic: &str, f: impl FnOnce(RuleBuilder) -> RuleBuilder) -> Self {
        let builder = f(RuleBuilder::default());
        self.rules.push(PendingRule {
            name: name.to_owned(),
            logic: logic.to_owned(),
            conditions: builder.conditions,
            action: builder.action,
        });
        self
    }

    /// Compile and validate everything into an immutable [`RuleEngine`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] for duplicate names, malformed logic strings,
    /// short condition lists, or unknown property/action references.
    pub fn build(self) -> Result<RuleEngine, BuildError> {
        let mut registry = Registry::default();
        for (name, context_type, func) in self.properties {
            registry.register_property(&name, &context_type, func)?;
        }
        for (name, context_type, func) in self.actions {
            registry.register_action(&name, &context_type, func)?;
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        let mut index = HashMap::new();
        for pending in self.rules {
            if index.contains_key(&pending.name) {
                return Err(BuildError::DuplicateRule { name: pending.name });
            }
            let rule = Rule::new(
                &pending.name,
                &pending.logic,
                pending.conditions,
                pending.action,
            )
            .map_err(|e| match e {
                crate::error::RuleTreeError::Grammar(source) => BuildError::InvalidLogic {
                    rule: pending.name.clone(),
                    source,
                },
                crate::error::RuleTreeError::MissingCondition(source) => {
                    BuildError::UnresolvedCondition {
                        rule: pending.name.clone(),
                        source,
                    }
                }
                // Rule::new only produces the two variants above.
                other => unreachable!("unexpected rule error: {other}"),
            })?;
            check_references(&rule, &registry)?;
            index.insert(rule.name().to_owned(), rules.len());
            rules.push(rule);
        }

        Ok(RuleEngine {
            rules,
            index,
            registry,
        })
    }
}

fn check_references(rule: &Rule, registry: &Registry) -> Result<(), BuildError> {
    let mut names = Vec::new();
    rule.resolved().property_names(&mut names);
    for name in names {
        if registry.property(&name).is_none() {
            return Err(BuildError::UnknownProperty {
                rule: rule.name().to_owned(),
                property: name,
            });
        }
    }
    if let Some(action) = rule.action() {
        if registry.action(action).is_none() {
            return Err(BuildError::UnknownAction {
                rule: rule.name().to_owned(),
                action: action.to_owned(),
            });
        }
    }
    Ok(())
}

/// A compiled, immutable rule engine. Thread-safe and designed to live
/// behind `Arc`: concurrent evaluations against different contexts share
/// nothing but the read-only rule trees and registry.
#[derive(Debug)]
pub struct RuleEngine {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
    registry: Registry,
}

impl RuleEngine {
    /// Evaluate rules in the given order, stopping at the first whose guard
    /// holds; that rule's action runs once and its result is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] for unknown rule names or missing context
    /// entries; the call aborts rather than skipping the faulting rule.
    pub fn eval_first_match(
        &self,
        rule_names: &[&str],
        ctx: &Context,
    ) -> Result<Outcome, DispatchError> {
        evaluate::evaluate(self, rule_names, ctx, Policy::FirstMatch)
    }

    /// Evaluate every rule in the given order regardless of earlier matches,
    /// applying each triggered rule's action in sequence.
    ///
    /// Property values are snapshotted once at the start of the call; an
    /// action's input reflects earlier action results for the same context
    /// type, but guards never see mid-call mutations.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] as for
    /// [`eval_first_match`](Self::eval_first_match).
    pub fn eval_all(&self, rule_names: &[&str], ctx: &Context) -> Result<Outcome, DispatchError> {
        evaluate::evaluate(self, rule_names, ctx, Policy::All)
    }

    /// Look up a rule by name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&i| &self.rules[i])
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }
}
