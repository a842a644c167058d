//! Parser module for restructuring tokens into Reverse Polish Notation.
//!
//! This module contains a shunting-yard parser that turns the lexer's token
//! stream into postfix order. It handles:
//!
//! - Operator precedence and associativity via the operator lookup table
//! - Parentheses and comma-separated argument lists
//! - Reporting of unbalanced parentheses and misplaced commas

pub mod lookups;
pub mod parser;
