use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character {character:?} at {position}")]
    UnexpectedCharacter { character: char, position: Position },
    #[error("invalid numeric literal {literal:?} at {position}")]
    InvalidNumericLiteral { literal: String, position: Position },
}

impl LexError {
    pub fn get_position(&self) -> Position {
        match self {
            LexError::UnexpectedCharacter { position, .. } => *position,
            LexError::InvalidNumericLiteral { position, .. } => *position,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("misplaced comma at {position}")]
    MisplacedComma { position: Position },
    #[error("unmatched right parenthesis at {position}")]
    UnmatchedRightParenthesis { position: Position },
    #[error("unmatched left parenthesis at {position}")]
    UnmatchedLeftParenthesis { position: Position },
}

impl ParseError {
    pub fn get_position(&self) -> Position {
        match self {
            ParseError::MisplacedComma { position } => *position,
            ParseError::UnmatchedRightParenthesis { position } => *position,
            ParseError::UnmatchedLeftParenthesis { position } => *position,
        }
    }
}

/// Any failure of the text -> tokens -> RPN pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn get_position(&self) -> Position {
        match self {
            Error::Lex(error) => error.get_position(),
            Error::Parse(error) => error.get_position(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Lex(LexError::UnexpectedCharacter { .. }) => "UnexpectedCharacter",
            Error::Lex(LexError::InvalidNumericLiteral { .. }) => "InvalidNumericLiteral",
            Error::Parse(ParseError::MisplacedComma { .. }) => "MisplacedComma",
            Error::Parse(ParseError::UnmatchedRightParenthesis { .. }) => {
                "UnmatchedRightParenthesis"
            }
            Error::Parse(ParseError::UnmatchedLeftParenthesis { .. }) => {
                "UnmatchedLeftParenthesis"
            }
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Lex(LexError::UnexpectedCharacter { character, .. }) => {
                ErrorTip::Suggestion(format!("Unexpected character `{}`", character))
            }
            Error::Lex(LexError::InvalidNumericLiteral { literal, .. }) => {
                ErrorTip::Suggestion(format!(
                    "Invalid number: `{}`, a number may not start with or contain more than one `.`",
                    literal
                ))
            }
            Error::Parse(ParseError::MisplacedComma { .. }) => ErrorTip::Suggestion(
                String::from("Commas may only separate arguments inside parentheses"),
            ),
            Error::Parse(ParseError::UnmatchedRightParenthesis { .. }) => {
                ErrorTip::Suggestion(String::from("Did you forget an opening `(`?"))
            }
            Error::Parse(ParseError::UnmatchedLeftParenthesis { .. }) => {
                ErrorTip::Suggestion(String::from("Did you forget a closing `)`?"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
