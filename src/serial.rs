//! jsonlogic interchange form for resolved rule trees.
//!
//! Boolean nodes serialize as `{"and": [..]}`, `{"or": [..]}`, and
//! `{"!": [..]}`; comparison leaves as `{"==": [subject, object]}` with
//! property operands rendered as `{"var": name}`. A whole rule serializes as
//! an `if` statement whose branches are action names.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use thiserror::Error;

use crate::types::{Condition, Operand, ResolvedExpr, Rule, Value};

/// Action name used for the no-op branches of a serialized `if` statement.
pub const DO_NOTHING: &str = "do_nothing";

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to serialize rule tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a resolved tree to its jsonlogic form.
///
/// # Errors
///
/// Returns [`SerializeError`] when JSON construction fails.
pub fn to_json(expr: &ResolvedExpr) -> Result<serde_json::Value, SerializeError> {
    Ok(serde_json::to_value(expr)?)
}

/// Serialize a guard and optional action as a jsonlogic `if` statement:
/// `{"if": [guard, action, "do_nothing"]}`. A rule with no bound action uses
/// [`DO_NOTHING`] for both branches.
///
/// # Errors
///
/// Returns [`SerializeError`] when JSON construction fails.
pub fn if_statement(
    expr: &ResolvedExpr,
    action: Option<&str>,
) -> Result<serde_json::Value, SerializeError> {
    let guard = serde_json::to_value(expr)?;
    Ok(serde_json::json!({
        "if": [guard, action.unwrap_or(DO_NOTHING), DO_NOTHING]
    }))
}

impl Rule {
    /// This rule's jsonlogic `if` statement.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError`] when JSON construction fails.
    pub fn if_statement(&self) -> Result<serde_json::Value, SerializeError> {
        if_statement(self.resolved(), self.action())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Operand::Literal(value) => value.serialize(serializer),
            Operand::Property(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("var", name)?;
                map.end()
            }
        }
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.op.symbol(), &(&self.subject, &self.object))?;
        map.end()
    }
}

impl Serialize for ResolvedExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedExpr::Condition(c) => c.serialize(serializer),
            ResolvedExpr::And(a, b) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("and", &(a, b))?;
                map.end()
            }
            ResolvedExpr::Or(a, b) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("or", &(a, b))?;
                map.end()
            }
            ResolvedExpr::Not(inner) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("!", &(inner,))?;
                map.end()
            }
        }
    }
}
