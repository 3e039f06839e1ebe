/*!
# Rust Language Module

This Rust module provides lexical analysis of Rap assembly.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use lex::next_token;
pub use lex::Lexeme;
pub use token::Keyword;
pub use token::Token;
pub use token::KEYWORD_COUNT;

/// Byte range of a construct within its source line.
pub type Column = std::ops::Range<usize>;
