use winnow::combinator::{alt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// One atomic element of a logic string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    And,
    Or,
    Not,
    /// A 1-based condition reference.
    Number(usize),
    OpenParen,
    CloseParen,
}

fn token(input: &mut &str) -> ModalResult<Token> {
    alt((
        "AND".value(Token::And),
        "OR".value(Token::Or),
        "NOT".value(Token::Not),
        take_while(1.., |c: char| c.is_ascii_digit())
            .try_map(|s: &str| s.parse::<usize>())
            .map(Token::Number),
        '('.value(Token::OpenParen),
        ')'.value(Token::CloseParen),
    ))
    .parse_next(input)
}

fn spaces(input: &mut &str) -> ModalResult<()> {
    take_while(0.., ' ').void().parse_next(input)
}

/// Split a raw logic string into tokens, silently dropping any substring that
/// is not part of the token set. Malformed input is the validator's problem,
/// not the tokenizer's.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut rest = input;
    let mut out = Vec::new();
    while !rest.is_empty() {
        let start = rest.checkpoint();
        match token.parse_next(&mut rest) {
            Ok(t) => out.push(t),
            Err(_) => {
                rest.reset(&start);
                let _: ModalResult<char> = any.parse_next(&mut rest);
            }
        }
    }
    out
}

/// Strict tokenization: the whole input must consist of tokens and spaces.
/// Returns `None` when any other character is present.
#[must_use]
pub(crate) fn tokenize_strict(input: &str) -> Option<Vec<Token>> {
    fn all_tokens(input: &mut &str) -> ModalResult<Vec<Token>> {
        let tokens = repeat(0.., preceded(spaces, token)).parse_next(input)?;
        spaces.parse_next(input)?;
        Ok(tokens)
    }
    all_tokens.parse(input).ok()
}
