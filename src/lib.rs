//! A compiler and evaluation engine for boolean rule logic.
//!
//! Rules are written as logic strings over numbered conditions, e.g.
//! `"(1 AND 2) OR NOT 3"`. The string is tokenized, checked against a small
//! grammar, and compiled into a symbolic operator tree; the numbered
//! placeholders are then substituted with comparison conditions to form a
//! resolved tree ready for evaluation. A [`RuleEngine`] holds named rules
//! together with the property and action functions they reference, evaluates
//! rule lists under first-match or evaluate-all policies, and serializes
//! resolved trees to a jsonlogic interchange form.
//!
//! ```
//! use ruletree::{literal, property, CompareOp, Context, RuleEngineBuilder};
//!
//! let engine = RuleEngineBuilder::new()
//!     .property("get_color", "trafficlight_color", |color| color.clone())
//!     .action("set_color_to_yellow", "trafficlight", |_| "yellow".into())
//!     .rule("turn-yellow", "1", |r| {
//!         r.condition(property("get_color"), CompareOp::Eq, literal("green"))
//!             .action("set_color_to_yellow")
//!     })
//!     .build()?;
//!
//! let ctx = Context::new()
//!     .set("trafficlight_color", "green")
//!     .set("trafficlight", "green");
//! let outcome = engine.eval_first_match(&["turn-yellow"], &ctx)?;
//! assert_eq!(outcome.get("trafficlight"), Some(&"yellow".into()));
//! # Ok::<(), ruletree::RuleTreeError>(())
//! ```

mod error;
mod evaluate;
mod logic;
mod resolve;
mod serial;
mod types;

pub use error::RuleTreeError;
pub use evaluate::DispatchError;
pub use logic::{compile, tokenize, validate, GrammarError, Token};
pub use resolve::{resolve, MissingConditionError};
pub use serial::{if_statement, to_json, SerializeError, DO_NOTHING};
pub use types::{
    literal, property, BuildError, CompareOp, Condition, Context, HandlerFn, Operand, Outcome,
    ResolvedExpr, Rule, RuleBuilder, RuleEngine, RuleEngineBuilder, SymbolicExpr, Value,
};
