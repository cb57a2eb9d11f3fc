use std::collections::BTreeSet;
use std::fmt;

use super::Condition;

/// Symbolic operator tree produced by compiling a logic string. Leaves are
/// numbered placeholders referencing 1-based condition indices; resolution
/// replaces them with [`Condition`] values to form a [`ResolvedExpr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolicExpr {
    /// The degenerate logic string `"1"`: use condition 1 directly, with no
    /// boolean wrapper around it.
    Single,
    /// A leaf referencing the condition at this 1-based index.
    Placeholder(usize),
    Not(Box<SymbolicExpr>),
    And(Box<SymbolicExpr>, Box<SymbolicExpr>),
    Or(Box<SymbolicExpr>, Box<SymbolicExpr>),
}

impl SymbolicExpr {
    /// The set of condition indices this tree references.
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<usize> {
        let mut out = BTreeSet::new();
        self.collect_placeholders(&mut out);
        out
    }

    fn collect_placeholders(&self, out: &mut BTreeSet<usize>) {
        match self {
            SymbolicExpr::Single => {
                out.insert(1);
            }
            SymbolicExpr::Placeholder(index) => {
                out.insert(*index);
            }
            SymbolicExpr::Not(inner) => inner.collect_placeholders(out),
            SymbolicExpr::And(a, b) | SymbolicExpr::Or(a, b) => {
                a.collect_placeholders(out);
                b.collect_placeholders(out);
            }
        }
    }
}

impl fmt::Display for SymbolicExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolicExpr::Single => write!(f, "1"),
            SymbolicExpr::Placeholder(index) => write!(f, "{index}"),
            SymbolicExpr::Not(inner) => write!(f, "(NOT {inner})"),
            SymbolicExpr::And(a, b) => write!(f, "({a} AND {b})"),
            SymbolicExpr::Or(a, b) => write!(f, "({a} OR {b})"),
        }
    }
}

/// Expression tree with every placeholder replaced by its condition.
/// The single-condition shortcut degenerates to a bare `Condition` leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedExpr {
    Condition(Condition),
    Not(Box<ResolvedExpr>),
    And(Box<ResolvedExpr>, Box<ResolvedExpr>),
    Or(Box<ResolvedExpr>, Box<ResolvedExpr>),
}

impl ResolvedExpr {
    /// Collect every property name referenced by the tree's leaves, in
    /// left-to-right encounter order, without duplicates.
    pub(crate) fn property_names(&self, out: &mut Vec<String>) {
        match self {
            ResolvedExpr::Condition(c) => {
                for operand in [&c.subject, &c.object] {
                    if let super::Operand::Property(name) = operand {
                        if !out.iter().any(|n| n == name) {
                            out.push(name.clone());
                        }
                    }
                }
            }
            ResolvedExpr::Not(inner) => inner.property_names(out),
            ResolvedExpr::And(a, b) | ResolvedExpr::Or(a, b) => {
                a.property_names(out);
                b.property_names(out);
            }
        }
    }
}

impl fmt::Display for ResolvedExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedExpr::Condition(c) => write!(f, "{c}"),
            ResolvedExpr::Not(inner) => write!(f, "(NOT {inner})"),
            ResolvedExpr::And(a, b) => write!(f, "({a} AND {b})"),
            ResolvedExpr::Or(a, b) => write!(f, "({a} OR {b})"),
        }
    }
}
