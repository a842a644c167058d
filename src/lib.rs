#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::to_rpn,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Character offset into the original, un-stripped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub u32);

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes `input` and restructures the tokens into RPN order.
pub fn convert(input: &str) -> Result<Vec<Token>, Error> {
    let tokens = tokenize(input)?;
    Ok(to_rpn(tokens)?)
}

/// Joins the token texts with single spaces, e.g. `5 3 7 - 10 * +`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.value.as_str())
        .collect::<Vec<&str>>()
        .join(" ")
}

pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // Errors reported at end of input point one past the last character
    let last = source.split_inclusive('\n').last().unwrap_or("");
    let line_pos = last.chars().count();
    (line_number.saturating_sub(1).max(1), last.to_string(), line_pos)
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
           |
        1  | 5 + (3 # 7)
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
