//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single-character tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Literal, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler that emits the current character as a token of
/// the given kind and advances the lexer by one character.
///
/// # Example
///
/// ```ignore
/// CharPattern {
///     regex: Regex::new("^,$").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Comma),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer| -> Result<(), $crate::errors::errors::LexError> {
            let start = lexer.position();
            let value = lexer.at().to_string();
            lexer.push($crate::MK_TOKEN!(
                $kind,
                value,
                $crate::Span {
                    start,
                    end: $crate::Position(start.0 + 1),
                }
            ));
            lexer.advance_n(1);
            Ok(())
        }
    };
}
