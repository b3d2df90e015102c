pub mod cursor;
pub mod lexer;
pub mod token;

use crate::error::ScanError;
use token::Token;

/// Everything one scan produces: tokens and lexical errors, both in source
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<ScanError>) {
        (self.tokens, self.errors)
    }
}

/// Scan source code into tokens, collecting lexical errors along the way.
pub fn scan(source: &str) -> ScanOutput {
    lexer::scan_all(source)
}
