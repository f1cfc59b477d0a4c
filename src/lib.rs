pub mod error;
pub mod scanner;
pub mod token;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::scanner::Scanner;
pub use crate::token::{Literal, Token, TokenKind};

/// Scans `source` in one pass, returning its tokens ending with `EndOfFile`.
pub fn scan(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source)?.scan()
}
