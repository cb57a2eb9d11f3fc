use std::fmt;

use super::Value;

/// Comparison operators available to condition leaves.
///
/// These are the seven jsonlogic operators the condition store may reference;
/// `In` covers both substring and list-membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl CompareOp {
    /// The jsonlogic symbol for this operator, used as the key in the
    /// serialized interchange form.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Neq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::In => "in",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One side of a comparison: either a named-property reference resolved
/// through the registry at evaluation time, or a literal used as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Property(String),
    Literal(Value),
}

/// A fully resolved comparison leaf, supplied by the condition store and
/// substituted into the symbolic tree in place of a numbered placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub subject: Operand,
    pub op: CompareOp,
    pub object: Operand,
}

impl Condition {
    #[must_use]
    pub fn new(subject: Operand, op: CompareOp, object: Operand) -> Self {
        Self {
            subject,
            op,
            object,
        }
    }
}

#[must_use]
pub fn property(name: &str) -> Operand {
    Operand::Property(name.to_owned())
}

#[must_use]
pub fn literal(value: impl Into<Value>) -> Operand {
    Operand::Literal(value.into())
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Property(name) => write!(f, "{name}"),
            Operand::Literal(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.subject, self.op, self.object)
    }
}
