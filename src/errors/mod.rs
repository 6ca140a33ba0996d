//! Diagnostic types for the parser.
//!
//! This module defines the diagnostics recorded while parsing. It includes:
//!
//! - Error structures with source position information
//! - One variant per diagnostic kind
//! - Suggestions shown alongside rendered diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
