use std::ops::Deref;
use log::{debug, trace};
use thiserror::Error;
use lexers::{Token, TokenKind};
use crate::ops::BinOp;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum ParseError {
    #[error("mismatched parentheses, missing opening paren")]
    MissingOParen,
    #[error("mismatched parentheses, missing closing paren")]
    MissingCParen,
}

// Parens and functions sit at -1 so the operator loop never pops them.
// NEGATE is only ever pushed, its precedence matters when an operator
// arrives and finds it on the stack.
pub fn precedence(token: &Token) -> i32 {
    match token.kind {
        TokenKind::Unary => i32::MAX,
        TokenKind::Operator => BinOp::from_symbol(&token.text).map_or(-1, BinOp::precedence),
        _ => -1,
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] { &self.0 }
}

pub struct ShuntingParser;

impl ShuntingParser {
    /// Strip whitespace, tokenize and convert to postfix.
    pub fn parse_str(expr: &str) -> Result<RPNExpr, crate::Error> {
        let tokens = lexers::tokenize(&lexers::strip_whitespace(expr))?;
        Ok(Self::parse(tokens)?)
    }

    pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens {
            trace!("shunting {:?} {:?}", token.kind, token.text);
            match token.kind {
                TokenKind::Number => out.push(token),
                TokenKind::Function => stack.push(token),
                TokenKind::Unary => stack.push(token),
                TokenKind::LeftParen => stack.push(token),
                TokenKind::Operator => {
                    let prec_rhs = precedence(&token);
                    while let Some(top) = stack.last() {
                        let grouping = matches!(top.kind, TokenKind::LeftParen | TokenKind::Function);
                        if grouping || precedence(top) < prec_rhs {
                            break;
                        }
                        out.extend(stack.pop());
                    }
                    stack.push(token);
                }
                TokenKind::RightParen => {
                    loop {
                        match stack.pop() {
                            None => return Err(ParseError::MissingOParen),
                            Some(top) if top.kind == TokenKind::LeftParen => break,
                            Some(top) => out.push(top),
                        }
                    }
                    // the group was a function's argument
                    if stack.last().map(|t| t.kind) == Some(TokenKind::Function) {
                        out.extend(stack.pop());
                    }
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top.kind {
                TokenKind::LeftParen => return Err(ParseError::MissingCParen),
                _ => out.push(top),
            }
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}
