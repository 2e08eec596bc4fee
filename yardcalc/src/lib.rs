//! Evaluate single-line arithmetic expressions.
//!
//! Input goes through three stages: `lexers::tokenize` turns the
//! whitespace-stripped line into tokens, `ShuntingParser` reorders them into
//! postfix and `rpneval::eval` reduces the postfix stream to a number.
//!
//! ```
//! assert_eq!(yardcalc::evaluate("(2+3)*4"), Ok(20.0));
//! ```
use thiserror::Error;

pub use lexers::{LexError, Token, TokenKind};

pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;

pub use self::ops::{BinOp, Func, MathFn};
pub use self::rpneval::EvalErr;

pub mod ops;
mod rpnprint;
pub mod rpneval;

/// Broad category of a failure, independent of the stage that raised it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    Lexical,
    Structural,
    Arity,
    Semantic,
    Precondition,
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Eval error: {0}")]
    Eval(#[from] EvalErr),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lexical,
            Error::Parse(_) => ErrorKind::Structural,
            Error::Eval(e) => match e {
                EvalErr::EmptyExpression => ErrorKind::Precondition,
                EvalErr::WrongNumberOfArgs | EvalErr::BadLogArgument => ErrorKind::Arity,
                EvalErr::UnknownOperator(_)
                | EvalErr::UnknownFunction(_)
                | EvalErr::BadToken(_)
                | EvalErr::BadNumber(_) => ErrorKind::Semantic,
            },
        }
    }
}

/// Run the whole pipeline on one raw input line.
pub fn evaluate(input: &str) -> Result<f64, Error> {
    let rpn = ShuntingParser::parse_str(input)?;
    Ok(rpneval::eval(&rpn)?)
}

/// Evaluate one line and render what a caller should print for it: the
/// result, preceded by the postfix form on its own line when `show_rpn` is
/// set. Any failure yields the error and no text.
pub fn eval_line(input: &str, show_rpn: bool) -> Result<String, Error> {
    let rpn = ShuntingParser::parse_str(input)?;
    let result = rpneval::eval(&rpn)?;
    if show_rpn {
        Ok(format!("{}\n{}", rpn, result))
    } else {
        Ok(format!("{}", result))
    }
}
