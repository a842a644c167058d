//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Variables, literals, operators and punctuation
//! - Numeric literal validation
//! - Whitespace handling and source positions
//! - Error cases

use crate::{errors::errors::LexError, Position, Span};

use super::{
    lexer::{tokenize, NumericBuffer},
    tokens::{operator_symbols, Token, TokenKind},
};

fn values(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.value.as_str()).collect()
}

#[test]
fn test_tokenize_empty_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ").unwrap().is_empty());
    assert!(tokenize(" \t\n ").unwrap().is_empty());
}

#[test]
fn test_tokenize_expression() {
    let tokens = tokenize("(432.3 + 5) * x - 32.572").unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParenthesis,
            TokenKind::Literal,
            TokenKind::Operator,
            TokenKind::Literal,
            TokenKind::RightParenthesis,
            TokenKind::Operator,
            TokenKind::Variable,
            TokenKind::Operator,
            TokenKind::Literal,
        ]
    );
    assert_eq!(
        values(&tokens),
        vec!["(", "432.3", "+", "5", ")", "*", "x", "-", "32.572"]
    );
}

#[test]
fn test_tokenize_decimal_literal() {
    let tokens = tokenize("432.3").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].value, "432.3");
}

#[test]
fn test_tokenize_trailing_dot_literal() {
    let tokens = tokenize("5.").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].value, "5.");
}

#[test]
fn test_tokenize_leading_dot_rejected() {
    let error = tokenize(".5").unwrap_err();

    assert_eq!(
        error,
        LexError::InvalidNumericLiteral {
            literal: String::from("."),
            position: Position(0),
        }
    );
}

#[test]
fn test_tokenize_second_dot_rejected() {
    let error = tokenize("3.1.4").unwrap_err();

    assert_eq!(
        error,
        LexError::InvalidNumericLiteral {
            literal: String::from("3.1."),
            position: Position(3),
        }
    );
}

#[test]
fn test_tokenize_dot_after_operator_rejected() {
    let error = tokenize("1 + .5").unwrap_err();
    assert!(matches!(
        error,
        LexError::InvalidNumericLiteral { position: Position(4), .. }
    ));
}

#[test]
fn test_tokenize_letter_then_digit_not_merged() {
    let tokens = tokenize("x5").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Literal);
    assert_eq!(tokens[1].value, "5");
}

#[test]
fn test_tokenize_adjacent_letters_are_separate_variables() {
    let tokens = tokenize("ab").unwrap();

    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|token| token.is_variable()));
    assert_eq!(values(&tokens), vec!["a", "b"]);
}

#[test]
fn test_tokenize_uppercase_variable() {
    let tokens = tokenize("X").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].value, "X");
}

#[test]
fn test_tokenize_whitespace_inside_literal() {
    // Whitespace is removed before scanning
    let tokens = tokenize("1 2 . 5").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, "12.5");
    assert_eq!(
        tokens[0].span,
        Span {
            start: Position(0),
            end: Position(7),
        }
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / ^").unwrap();

    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Operator));
    assert_eq!(values(&tokens), vec!["+", "-", "*", "/", "^"]);
}

#[test]
fn test_every_operator_symbol_lexes_as_operator() {
    for symbol in operator_symbols() {
        let tokens = tokenize(symbol).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_operator(), "`{}` should be an operator", symbol);
        assert!(tokens[0].operator_info().is_some());
    }
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( , )").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LeftParenthesis);
    assert_eq!(tokens[1].kind, TokenKind::Comma);
    assert_eq!(tokens[2].kind, TokenKind::RightParenthesis);
}

#[test]
fn test_tokenize_unexpected_character() {
    let error = tokenize("5 + 3 % 2").unwrap_err();

    assert_eq!(
        error,
        LexError::UnexpectedCharacter {
            character: '%',
            position: Position(6),
        }
    );
}

#[test]
fn test_tokenize_non_ascii_letter_rejected() {
    let error = tokenize("1 + é").unwrap_err();
    assert_eq!(
        error,
        LexError::UnexpectedCharacter {
            character: 'é',
            position: Position(4),
        }
    );
}

#[test]
fn test_token_spans_use_original_offsets() {
    let tokens = tokenize("  x  +  10").unwrap();

    assert_eq!(tokens[0].span, Span { start: Position(2), end: Position(3) });
    assert_eq!(tokens[1].span, Span { start: Position(5), end: Position(6) });
    assert_eq!(tokens[2].span, Span { start: Position(8), end: Position(10) });
}

#[test]
fn test_tokenize_is_lossless() {
    let source = "max(a, 2.5) ^ (b - 3) / 4";
    let tokens = tokenize(source).unwrap();

    let joined: String = tokens.iter().map(|token| token.value.as_str()).collect();
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(joined, stripped);
}

#[test]
fn test_tokenize_is_idempotent() {
    let source = "(432.3 + 5) * x - 32.572";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn test_numeric_buffer_rejects_without_mutating() {
    let mut buffer = NumericBuffer::new();
    assert!(buffer.is_empty());

    buffer.append('1', Position(0)).unwrap();
    buffer.append('.', Position(1)).unwrap();
    buffer.append('2', Position(2)).unwrap();

    let error = buffer.append('.', Position(3)).unwrap_err();
    assert!(matches!(error, LexError::InvalidNumericLiteral { .. }));
    assert_eq!(buffer.as_str(), "1.2");
    assert_eq!(buffer.into_string(), "1.2");
}

#[test]
fn test_numeric_buffer_rejects_leading_dot() {
    let mut buffer = NumericBuffer::new();
    assert!(buffer.append('.', Position(0)).is_err());
    assert!(buffer.is_empty());
}

#[test]
fn test_token_display() {
    let tokens = tokenize("x + (").unwrap();

    assert_eq!(tokens[0].to_string(), "Variable (x)");
    assert_eq!(tokens[1].to_string(), "Operator (+)");
    assert_eq!(tokens[2].to_string(), "LeftParenthesis");
}

#[test]
fn test_token_operator_metadata() {
    let tokens = tokenize("^ * x").unwrap();

    assert_eq!(tokens[0].precedence(), Some(4));
    assert!(tokens[0].is_right_associative());
    assert!(!tokens[0].is_left_associative());

    assert_eq!(tokens[1].precedence(), Some(3));
    assert!(tokens[1].is_left_associative());

    assert_eq!(tokens[2].precedence(), None);
    assert_eq!(tokens[2].associativity(), None);
    assert!(!tokens[2].is_left_associative());
}
