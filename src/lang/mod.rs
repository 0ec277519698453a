/*!
# Rust Language Module

This Rust module provides lexical analysis of the doggo language
and the error type shared by the compiler and machine.

*/

#[macro_use]
mod error;
mod lex;
mod stream;
mod token;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use stream::Token;
pub use stream::TokenStream;
pub use token::Dialect;
pub use token::Operator;
pub use token::Word;
