//! Error types and error handling for the RPN pipeline.
//!
//! This module defines the error types produced by the two pipeline stages:
//!
//! - `LexError` for characters and numeric literals the lexer rejects
//! - `ParseError` for comma and parenthesis nesting violations
//! - `Error`, wrapping both, with names and suggestions for diagnostics

pub mod errors;
