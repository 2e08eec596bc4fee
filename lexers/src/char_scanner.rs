#![deny(warnings)]

use crate::scanner::Scanner;

pub(crate) static NUMERIC: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
pub(crate) static ALPHA: &[char] = &['_',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];
pub(crate) static MATH_OPS: &[char] = &['+', '-', '*', '/', '^'];
pub(crate) static OPEN: &[char] = &['(', '{'];
pub(crate) static CLOSE: &[char] = &[')', '}'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // scan a run of [0-9.]+, no attempt to validate the placement of '.'
    pub fn scan_number(&mut self) -> Option<String> {
        if !self.skip_all(NUMERIC) {
            return None;
        }
        Some(self.extract_string())
    }

    // scan a single operator out of MATH_OPS
    pub fn scan_math_op(&mut self) -> Option<char> {
        let op = self.accept_any(MATH_OPS)?;
        self.ignore();
        Some(op)
    }
}

/// Drop every whitespace character, `" 1 +\t2 "` becomes `"1+2"`.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

///////////////////////////////////////////////////////////////////////////////
