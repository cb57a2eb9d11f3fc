mod condition;
mod context;
mod engine;
mod error;
mod expr;
mod outcome;
mod registry;
mod rule;
mod value;

pub use condition::{literal, property, CompareOp, Condition, Operand};
pub use context::Context;
pub use engine::{RuleBuilder, RuleEngine, RuleEngineBuilder};
pub use error::BuildError;
pub use expr::{ResolvedExpr, SymbolicExpr};
pub use outcome::Outcome;
pub use registry::HandlerFn;
pub use rule::Rule;
pub use value::Value;

pub(crate) use registry::Registry;
