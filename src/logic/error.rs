use thiserror::Error;

/// Errors raised while validating or compiling a logic string.
///
/// Validation runs before compilation, so the compiler-side variants
/// (`ImbalancedParens` on a checked pop, `Malformed`) are defensive: they
/// indicate the stack machine was fed an unvalidated stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("logic string contains characters outside the token set")]
    InvalidToken,

    #[error("logic string contains no tokens")]
    Empty,

    #[error("misplaced opening parenthesis")]
    MisplacedOpenParen,

    #[error("misplaced closing parenthesis")]
    MisplacedCloseParen,

    #[error("adjacent AND/OR operators")]
    AdjacentOperators,

    #[error("misplaced NOT operator")]
    MisplacedNot,

    #[error("adjacent condition numbers without an operator between them")]
    AdjacentNumbers,

    #[error("condition number {index} outside 1..={count}")]
    ConditionOutOfRange { index: usize, count: usize },

    #[error("referenced conditions do not cover 1..={count} exactly")]
    IncompleteCoverage { count: usize },

    #[error("imbalanced parentheses")]
    ImbalancedParens,

    #[error("malformed logic expression")]
    Malformed,
}
