//! Shunting-yard conversion of a token stream into Reverse Polish Notation.
//!
//! The parser keeps two pieces of working state for a single conversion:
//! - an output queue that becomes the result
//! - an operator stack of pending operators and left parentheses
//!
//! Each token is dispatched on its kind to one of the `parse_*` handlers
//! below. Both collections are discarded once `to_rpn` returns.

use crate::{
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::lookups::operator_info;

/// Working state of one `to_rpn` call.
#[derive(Debug, Default)]
pub struct Parser {
    /// Tokens already placed in RPN order
    output: Vec<Token>,
    /// Pending operators and left parentheses, top is last
    stack: Vec<Token>,
}

impl Parser {
    pub fn new() -> Self {
        Parser::default()
    }

    pub fn emit(&mut self, token: Token) {
        self.output.push(token);
    }

    pub fn push(&mut self, token: Token) {
        self.stack.push(token);
    }

    pub fn peek(&self) -> Option<&Token> {
        self.stack.last()
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.stack.pop()
    }

    /// Moves tokens from the stack to the output until a left parenthesis is
    /// on top, leaving it there. Returns `false` if the stack runs out first.
    pub fn emit_until_left_parenthesis(&mut self) -> bool {
        while let Some(top) = self.peek() {
            if top.is_left_parenthesis() {
                return true;
            }

            if let Some(token) = self.pop() {
                self.emit(token);
            }
        }

        false
    }

    /// Empties the stack onto the output and returns the finished queue.
    pub fn finish(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some(token) = self.pop() {
            if token.is_left_parenthesis() {
                return Err(ParseError::UnmatchedLeftParenthesis {
                    position: token.span.start,
                });
            }

            self.emit(token);
        }

        Ok(self.output)
    }
}

pub fn parse_operand(parser: &mut Parser, token: Token) {
    parser.emit(token);
}

pub fn parse_comma(parser: &mut Parser, token: Token) -> Result<(), ParseError> {
    if parser.emit_until_left_parenthesis() {
        Ok(())
    } else {
        Err(ParseError::MisplacedComma {
            position: token.span.start,
        })
    }
}

pub fn parse_operator(parser: &mut Parser, token: Token) {
    let incoming = operator_info(&token.value);

    while let Some(top) = parser.peek() {
        if !top.is_operator() || !operator_info(&top.value).pops_before(incoming) {
            break;
        }

        if let Some(top) = parser.pop() {
            parser.emit(top);
        }
    }

    parser.push(token);
}

pub fn parse_left_parenthesis(parser: &mut Parser, token: Token) {
    parser.push(token);
}

pub fn parse_right_parenthesis(parser: &mut Parser, token: Token) -> Result<(), ParseError> {
    if !parser.emit_until_left_parenthesis() {
        return Err(ParseError::UnmatchedRightParenthesis {
            position: token.span.start,
        });
    }

    // Discard the matching left parenthesis
    parser.pop();
    Ok(())
}

/// Restructures `tokens` into RPN order.
///
/// No operator arity or variable checks happen here, the output is only
/// guaranteed to be well nested.
///
/// # Panics
///
/// Panics if an operator token's text is not in the operator lookup table.
pub fn to_rpn(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut parser = Parser::new();

    for token in tokens {
        match token.kind {
            TokenKind::Literal | TokenKind::Variable => parse_operand(&mut parser, token),
            TokenKind::Comma => parse_comma(&mut parser, token)?,
            TokenKind::Operator => parse_operator(&mut parser, token),
            TokenKind::LeftParenthesis => parse_left_parenthesis(&mut parser, token),
            TokenKind::RightParenthesis => parse_right_parenthesis(&mut parser, token)?,
        }
    }

    parser.finish()
}
