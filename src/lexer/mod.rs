//! Lexical analysis module.
//!
//! This module contains the token model and the token sources the parser
//! pulls from:
//!
//! - Token kinds, tokens and the reserved-word lookup
//! - The `TokenSource` trait the parser is written against
//! - A regex-driven, pull-based `Lexer`
//! - `TokenStream`, a source over pre-built tokens

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
