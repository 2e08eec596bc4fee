use log::trace;
use thiserror::Error;
use lexers::{Token, TokenKind};
use crate::ops::{log_base, BinOp, Func};
use crate::parser::RPNExpr;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum EvalErr {
    #[error("nothing to evaluate")]
    EmptyExpression,
    #[error("not enough operands")]
    WrongNumberOfArgs,
    #[error("log_ needs a number right after its base")]
    BadLogArgument,
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("can't evaluate token '{0}'")]
    BadToken(String),
    #[error("bad number '{0}'")]
    BadNumber(String),
}

fn parse_number(token: &Token) -> Result<f64, EvalErr> {
    token.text.parse::<f64>().map_err(|_| EvalErr::BadNumber(token.text.clone()))
}

fn pop(operands: &mut Vec<f64>) -> Result<f64, EvalErr> {
    operands.pop().ok_or(EvalErr::WrongNumberOfArgs)
}

/// Reduce a postfix expression to a single value.
///
/// `log_` takes its second argument straight from the postfix queue instead
/// of the operand stack: the token following it must be a number.
///
/// When more than one value is left on the stack (eg: `2(3)`), the top is
/// returned instead of failing.
pub fn eval(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    if rpn.is_empty() {
        return Err(EvalErr::EmptyExpression);
    }
    let mut operands = Vec::new();
    let mut queue = rpn.iter();

    while let Some(token) = queue.next() {
        let value = match token.kind {
            TokenKind::Number => parse_number(token)?,
            TokenKind::Unary => -pop(&mut operands)?,
            TokenKind::Operator => {
                let r = pop(&mut operands)?;
                let l = pop(&mut operands)?;
                match BinOp::from_symbol(&token.text) {
                    Some(op) => op.apply(l, r),
                    None => return Err(EvalErr::UnknownOperator(token.text.clone())),
                }
            }
            TokenKind::Function => {
                let a = pop(&mut operands)?;
                match Func::from_name(&token.text) {
                    Some(Func::LogBase) => match queue.next() {
                        Some(next) if next.kind == TokenKind::Number => {
                            log_base(a, parse_number(next)?)
                        }
                        _ => return Err(EvalErr::BadLogArgument),
                    },
                    Some(Func::Unary(f)) => f.apply(a),
                    None => return Err(EvalErr::UnknownFunction(token.text.clone())),
                }
            }
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(EvalErr::BadToken(token.text.clone()))
            }
        };
        trace!("{} -> {}", token, value);
        operands.push(value);
    }
    pop(&mut operands)
}
