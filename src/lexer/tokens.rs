use std::{collections::HashSet, fmt::Display};

use crate::{
    parser::lookups::{Associativity, OperatorInfo, OPERATOR_LOOKUP},
    Span,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Literal,
    Variable,
    Operator,
    Comma,
    LeftParenthesis,
    RightParenthesis,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Literal | TokenKind::Variable | TokenKind::Operator => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Symbols the operator table knows about.
pub fn operator_symbols() -> HashSet<&'static str> {
    OPERATOR_LOOKUP.keys().copied().collect()
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind == TokenKind::Literal
    }

    pub fn is_variable(&self) -> bool {
        self.kind == TokenKind::Variable
    }

    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    pub fn is_comma(&self) -> bool {
        self.kind == TokenKind::Comma
    }

    pub fn is_left_parenthesis(&self) -> bool {
        self.kind == TokenKind::LeftParenthesis
    }

    pub fn is_right_parenthesis(&self) -> bool {
        self.kind == TokenKind::RightParenthesis
    }

    /// Operator metadata for this token, `None` unless it is a known operator.
    pub fn operator_info(&self) -> Option<&'static OperatorInfo> {
        if !self.is_operator() {
            return None;
        }

        OPERATOR_LOOKUP.get(self.value.as_str())
    }

    pub fn precedence(&self) -> Option<u8> {
        self.operator_info().map(|info| info.binding_power.precedence())
    }

    pub fn associativity(&self) -> Option<Associativity> {
        self.operator_info().map(|info| info.associativity)
    }

    pub fn is_left_associative(&self) -> bool {
        self.associativity() == Some(Associativity::Left)
    }

    pub fn is_right_associative(&self) -> bool {
        self.associativity() == Some(Associativity::Right)
    }
}
