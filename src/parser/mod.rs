//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, grouping, `if`,
//!   function literals, calls)
//! - Non-fatal diagnostics collected while parsing continues
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with a precedence table for operator binding.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
