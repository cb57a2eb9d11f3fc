mod compile;
mod error;
mod token;
mod validate;

pub use compile::compile;
pub use error::GrammarError;
pub use token::{tokenize, Token};
pub use validate::validate;
