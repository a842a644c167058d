use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::LexError, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type PatternHandler = fn(&mut Lexer) -> Result<(), LexError>;

/// A single-character class and the handler run when the current character
/// belongs to it.
#[derive(Clone)]
pub struct CharPattern {
    regex: Regex,
    handler: PatternHandler,
}

impl CharPattern {
    fn matches(&self, c: char) -> bool {
        self.regex.is_match(c.encode_utf8(&mut [0; 4]))
    }
}

lazy_static! {
    static ref DIGIT: Regex = Regex::new("^[0-9]$").unwrap();

    // Checked in order, first match wins
    static ref PATTERNS: Vec<CharPattern> = vec![
        CharPattern { regex: Regex::new("^[a-zA-Z]$").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Variable) },
        // A leading `.` also starts a literal so the buffer can reject it
        CharPattern { regex: Regex::new("^[0-9.]$").unwrap(), handler: number_handler },
        CharPattern { regex: Regex::new("^[-+*/^]$").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
        CharPattern { regex: Regex::new("^,$").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        CharPattern { regex: Regex::new("^\\($").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParenthesis) },
        CharPattern { regex: Regex::new("^\\)$").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParenthesis) },
    ];
}

/// Accumulates the text of a decimal literal, refusing any character that
/// would give it a leading dot or a second dot.
#[derive(Debug, Default, Clone)]
pub struct NumericBuffer {
    buffer: String,
    dots: usize,
}

impl NumericBuffer {
    pub fn new() -> Self {
        NumericBuffer::default()
    }

    /// Appends `c`, or returns `InvalidNumericLiteral` reporting `position`
    /// and leaves the buffer untouched.
    pub fn append(&mut self, c: char, position: Position) -> Result<(), LexError> {
        if c == '.' && (self.buffer.is_empty() || self.dots > 0) {
            let mut literal = self.buffer.clone();
            literal.push(c);
            return Err(LexError::InvalidNumericLiteral { literal, position });
        }

        if c == '.' {
            self.dots += 1;
        }
        self.buffer.push(c);
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

pub struct Lexer {
    tokens: Vec<Token>,
    /// Input with whitespace removed
    source: Vec<char>,
    /// Offset in the original input of each character in `source`
    offsets: Vec<u32>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let (offsets, source): (Vec<u32>, Vec<char>) = source
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(offset, c)| (offset as u32, c))
            .unzip();

        Lexer {
            tokens: vec![],
            source,
            offsets,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    /// Original offset of the current character.
    pub fn position(&self) -> Position {
        Position(self.offsets[self.pos])
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn is_literal_char(c: char) -> bool {
    c == '.' || DIGIT.is_match(c.encode_utf8(&mut [0; 4]))
}

fn number_handler(lexer: &mut Lexer) -> Result<(), LexError> {
    let start = lexer.position();
    let mut end = start;
    let mut buffer = NumericBuffer::new();

    while !lexer.at_eof() && is_literal_char(lexer.at()) {
        let position = lexer.position();
        buffer.append(lexer.at(), position)?;
        end = Position(position.0 + 1);
        lexer.advance_n(1);
    }

    lexer.push(MK_TOKEN!(TokenKind::Literal, buffer.into_string(), Span { start, end }));
    Ok(())
}

/// Splits `source` into tokens. Whitespace is dropped before scanning, so it
/// never separates tokens: `"1 2"` is the single literal `12`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let current = lex.at();
        let handler = PATTERNS
            .iter()
            .find(|pattern| pattern.matches(current))
            .map(|pattern| pattern.handler);

        match handler {
            Some(handler) => handler(&mut lex)?,
            None => {
                return Err(LexError::UnexpectedCharacter {
                    character: current,
                    position: lex.position(),
                })
            }
        }
    }

    Ok(lex.tokens)
}
