//! Lexical analysis module for arithmetic expressions.
//!
//! This module contains the lexer (tokenizer) that converts expression text
//! into a stream of tokens for the RPN parser. It handles:
//!
//! - Whitespace removal, keeping the original offset of every character
//! - Classification of characters using regex patterns
//! - Collection and validation of decimal literals
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
