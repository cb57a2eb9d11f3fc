use super::error::GrammarError;
use super::token::Token;
use super::validate::validate;
use crate::types::SymbolicExpr;

/// Pending operator on the shunting-yard stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingOp {
    And,
    Or,
    Not,
    OpenParen,
}

/// Validate a logic string and compile it into a symbolic tree.
///
/// Precedence is `NOT > AND = OR`; AND and OR associate left-to-right at
/// equal precedence. Binary node children keep stack pop order: the
/// first-popped operand becomes the left child.
///
/// # Errors
///
/// Returns [`GrammarError`] when validation rejects the string. The
/// imbalance checks inside the stack machine itself are defensive; they are
/// unreachable for a validated stream but still fail loudly rather than
/// returning a partial tree.
pub fn compile(logic: &str, count: usize) -> Result<SymbolicExpr, GrammarError> {
    let tokens = validate(logic, count)?;
    build_tree(&tokens)
}

pub(crate) fn build_tree(tokens: &[Token]) -> Result<SymbolicExpr, GrammarError> {
    // The single-condition shortcut bypasses the stack machine entirely.
    if tokens == [Token::Number(1)] {
        return Ok(SymbolicExpr::Single);
    }

    let mut operands: Vec<SymbolicExpr> = Vec::new();
    let mut operators: Vec<PendingOp> = Vec::new();

    for t in tokens {
        match t {
            Token::Number(index) => operands.push(SymbolicExpr::Placeholder(*index)),
            Token::OpenParen => operators.push(PendingOp::OpenParen),
            Token::CloseParen => {
                loop {
                    match operators.pop() {
                        Some(PendingOp::OpenParen) => break,
                        Some(op) => finalize(op, &mut operands)?,
                        None => return Err(GrammarError::ImbalancedParens),
                    }
                }
            }
            // NOT binds tighter than AND/OR: push unconditionally.
            Token::Not => operators.push(PendingOp::Not),
            Token::And | Token::Or => {
                while let Some(&top) = operators.last() {
                    if top == PendingOp::OpenParen {
                        break;
                    }
                    operators.pop();
                    finalize(top, &mut operands)?;
                }
                operators.push(if *t == Token::And {
                    PendingOp::And
                } else {
                    PendingOp::Or
                });
            }
        }
    }

    while let Some(op) = operators.pop() {
        if op == PendingOp::OpenParen {
            return Err(GrammarError::ImbalancedParens);
        }
        finalize(op, &mut operands)?;
    }

    let root = operands.pop().ok_or(GrammarError::Malformed)?;
    if !operands.is_empty() {
        return Err(GrammarError::Malformed);
    }
    Ok(root)
}

fn finalize(op: PendingOp, operands: &mut Vec<SymbolicExpr>) -> Result<(), GrammarError> {
    match op {
        PendingOp::Not => {
            let inner = operands.pop().ok_or(GrammarError::Malformed)?;
            operands.push(SymbolicExpr::Not(Box::new(inner)));
        }
        PendingOp::And | PendingOp::Or => {
            let left = operands.pop().ok_or(GrammarError::Malformed)?;
            let right = operands.pop().ok_or(GrammarError::Malformed)?;
            let node = if op == PendingOp::And {
                SymbolicExpr::And(Box::new(left), Box::new(right))
            } else {
                SymbolicExpr::Or(Box::new(left), Box::new(right))
            };
            operands.push(node);
        }
        PendingOp::OpenParen => return Err(GrammarError::ImbalancedParens),
    }
    Ok(())
}
