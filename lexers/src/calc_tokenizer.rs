#![deny(warnings)]

use std::fmt;
use log::{debug, trace};
use thiserror::Error;

use crate::char_scanner::{ALPHA, CLOSE, OPEN};
use crate::scanner::Scanner;

/// Literal text carried by unary minus tokens.
pub const NEGATE: &str = "NEGATE";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Number,
    Function,
    Operator,
    LeftParen,
    RightParen,
    Unary,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Token{text: text.into(), kind}
    }

    pub fn negate() -> Self {
        Token::new(NEGATE, TokenKind::Unary)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum LexError {
    #[error("stray identifier '{0}', functions must be followed by '(' or '{{'")]
    StrayIdentifier(String),
}

/// Tokenizer for whitespace-free calculator input.
///
/// Letters accumulate until a grouping symbol turns them into a `Function`
/// token; operators in between do not flush them. Minus becomes a `NEGATE`
/// token only at the start of input or right after `)`, an operator or a
/// function name.
pub struct CalcTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    letters: String,
    prev: Option<TokenKind>,
}

impl<I: Iterator<Item=char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer{src: Scanner::new(source), letters: String::new(), prev: None}
    }

    // None stands for the start of input
    fn makes_unary(prev: Option<TokenKind>) -> bool {
        match prev {
            None => true,
            Some(TokenKind::RightParen) => true,
            Some(TokenKind::Operator) => true,
            Some(TokenKind::Function) => true,
            Some(_) => false,
        }
    }

    fn get_token(&mut self) -> Option<Result<Token, LexError>> {
        loop {
            if let Some(num) = self.src.scan_number() {
                return Some(Ok(Token::new(num, TokenKind::Number)));
            }
            if let Some(op) = self.src.scan_math_op() {
                return Some(Ok(match op {
                    '-' if Self::makes_unary(self.prev) => Token::negate(),
                    _ => Token::new(op, TokenKind::Operator),
                }));
            }
            let c = match self.src.next() {
                Some(c) => c,
                None if self.letters.is_empty() => return None,
                None => {
                    let stray = std::mem::take(&mut self.letters);
                    return Some(Err(LexError::StrayIdentifier(stray)));
                }
            };
            if ALPHA.contains(&c) {
                self.letters.push(c);
                self.src.ignore();
                continue;
            }
            if OPEN.contains(&c) || CLOSE.contains(&c) {
                if !self.letters.is_empty() {
                    // leave the paren to be scanned next round
                    self.src.prev();
                    let name = std::mem::take(&mut self.letters);
                    return Some(Ok(Token::new(name, TokenKind::Function)));
                }
                self.src.ignore();
                return Some(Ok(if OPEN.contains(&c) {
                    Token::new("(", TokenKind::LeftParen)
                } else {
                    Token::new(")", TokenKind::RightParen)
                }));
            }
            trace!("skipping {:?}", c);
            self.src.ignore();
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for CalcTokenizer<I> {
    type Item = Result<Token, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        if let Some(Ok(ref t)) = token {
            trace!("token {:?} {:?}", t.kind, t.text);
            self.prev = Some(t.kind);
        }
        token
    }
}

/// Tokenize an already whitespace-stripped expression.
pub fn tokenize(cleaned: &str) -> Result<Vec<Token>, LexError> {
    let tokens = CalcTokenizer::new(cleaned.chars())
        .collect::<Result<Vec<_>, _>>()?;
    debug!("tokenized {:?} into {} tokens", cleaned, tokens.len());
    Ok(tokens)
}

///////////////////////////////////////////////////////////////////////////////
