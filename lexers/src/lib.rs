mod scanner;
mod char_scanner;
mod calc_tokenizer;

pub use scanner::Scanner;
pub use char_scanner::strip_whitespace;
pub use calc_tokenizer::{tokenize, CalcTokenizer, LexError, Token, TokenKind, NEGATE};

#[cfg(test)]
mod scanner_test;
