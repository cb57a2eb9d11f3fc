use std::collections::BTreeSet;

use super::error::GrammarError;
use super::token::{tokenize_strict, Token};

/// Decide whether `logic` together with a declared condition count is
/// well-formed, before any compilation happens.
///
/// The checks mirror the grammar rules one-to-one: token validity,
/// parenthesis placement on both sides, AND/OR adjacency, NOT placement,
/// operand adjacency and coverage of exactly `1..=count`, and balance.
/// On success the token stream is returned so the compiler can reuse it.
///
/// # Errors
///
/// Returns the [`GrammarError`] for the first failing rule.
pub fn validate(logic: &str, count: usize) -> Result<Vec<Token>, GrammarError> {
    let tokens = tokenize_strict(logic).ok_or(GrammarError::InvalidToken)?;
    if tokens.is_empty() {
        return Err(GrammarError::Empty);
    }
    check_open_parens(&tokens)?;
    check_close_parens(&tokens)?;
    check_and_or(&tokens)?;
    check_not(&tokens)?;
    check_operands(&tokens, count)?;
    check_balance(&tokens)?;
    Ok(tokens)
}

fn neighbors(tokens: &[Token], i: usize) -> (Option<Token>, Option<Token>) {
    let prev = if i == 0 { None } else { Some(tokens[i - 1]) };
    (prev, tokens.get(i + 1).copied())
}

/// `(` must not be followed by AND, OR, or `)`, and unless it opens the
/// string it must follow AND, OR, NOT, or another `(`.
fn check_open_parens(tokens: &[Token]) -> Result<(), GrammarError> {
    for (i, t) in tokens.iter().enumerate() {
        if *t != Token::OpenParen {
            continue;
        }
        let (prev, next) = neighbors(tokens, i);
        if matches!(
            next,
            Some(Token::And) | Some(Token::Or) | Some(Token::CloseParen)
        ) {
            return Err(GrammarError::MisplacedOpenParen);
        }
        match prev {
            None | Some(Token::And) | Some(Token::Or) | Some(Token::Not)
            | Some(Token::OpenParen) => {}
            _ => return Err(GrammarError::MisplacedOpenParen),
        }
    }
    Ok(())
}

/// `)` must be followed by AND, OR, `)`, or end of input, and must not
/// follow AND, OR, or NOT.
fn check_close_parens(tokens: &[Token]) -> Result<(), GrammarError> {
    for (i, t) in tokens.iter().enumerate() {
        if *t != Token::CloseParen {
            continue;
        }
        let (prev, next) = neighbors(tokens, i);
        match next {
            None | Some(Token::And) | Some(Token::Or) | Some(Token::CloseParen) => {}
            _ => return Err(GrammarError::MisplacedCloseParen),
        }
        if matches!(prev, Some(Token::And) | Some(Token::Or) | Some(Token::Not)) {
            return Err(GrammarError::MisplacedCloseParen);
        }
    }
    Ok(())
}

/// No two of AND/OR in a row.
fn check_and_or(tokens: &[Token]) -> Result<(), GrammarError> {
    for pair in tokens.windows(2) {
        let both_binary = matches!(pair[0], Token::And | Token::Or)
            && matches!(pair[1], Token::And | Token::Or);
        if both_binary {
            return Err(GrammarError::AdjacentOperators);
        }
    }
    Ok(())
}

/// NOT only after AND, OR, `(`, or start of input, and only before a
/// condition number or `(`.
fn check_not(tokens: &[Token]) -> Result<(), GrammarError> {
    for (i, t) in tokens.iter().enumerate() {
        if *t != Token::Not {
            continue;
        }
        let (prev, next) = neighbors(tokens, i);
        match prev {
            None | Some(Token::And) | Some(Token::Or) | Some(Token::OpenParen) => {}
            _ => return Err(GrammarError::MisplacedNot),
        }
        match next {
            Some(Token::Number(_)) | Some(Token::OpenParen) => {}
            _ => return Err(GrammarError::MisplacedNot),
        }
    }
    Ok(())
}

/// No two condition numbers in a row; every referenced number in
/// `1..=count`; the distinct set equal to exactly `1..=count`.
fn check_operands(tokens: &[Token], count: usize) -> Result<(), GrammarError> {
    let mut referenced = BTreeSet::new();
    let mut prev_was_number = false;
    for t in tokens {
        if let Token::Number(index) = t {
            if prev_was_number {
                return Err(GrammarError::AdjacentNumbers);
            }
            if *index < 1 || *index > count {
                return Err(GrammarError::ConditionOutOfRange {
                    index: *index,
                    count,
                });
            }
            referenced.insert(*index);
            prev_was_number = true;
        } else {
            prev_was_number = false;
        }
    }
    if referenced.len() != count {
        return Err(GrammarError::IncompleteCoverage { count });
    }
    Ok(())
}

/// Open/close depth never goes negative and ends at zero.
fn check_balance(tokens: &[Token]) -> Result<(), GrammarError> {
    let mut depth = 0_i64;
    for t in tokens {
        match t {
            Token::OpenParen => depth += 1,
            Token::CloseParen => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(GrammarError::ImbalancedParens);
        }
    }
    if depth != 0 {
        return Err(GrammarError::ImbalancedParens);
    }
    Ok(())
}
