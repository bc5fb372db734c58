use std::fmt;
use std::iter::FusedIterator;

use crate::token::{Span, Token, TokenKind};

/// Classifies a scanner error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    IllegalCharacter(char),
    /// Double-quoted string with no closing quote before end of input.
    UnterminatedString,
    /// `!` not followed by `=`.
    LoneBang,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter(ch) => {
                write!(f, "illegal character: {ch:?}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
            Self::LoneBang => {
                write!(f, "unexpected '!', expected '!='")
            }
        }
    }
}

/// Error produced during scanning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Scan `input` up to and including the end-of-input token.
///
/// # Errors
///
/// Returns the first `LexError` encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(input).collect()
}

/// Scan the whole of `input`, collecting every token and every error.
///
/// Scanning resumes after each error, so one pass reports all of them.
/// The token list always ends with the end-of-input token.
#[must_use]
pub fn tokenize_all(input: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for result in Scanner::new(input) {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }
    (tokens, errors)
}

/// Pull-based scanner over a single source string.
///
/// Each call to [`Scanner::next_token`] skips whitespace and returns the
/// next token. Once the input is exhausted every call returns an equal
/// end-of-input token.
///
/// ```
/// use rescfg_lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("service api {}");
/// let token = scanner.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::Service);
/// assert_eq!(scanner.next_token().unwrap().text, "api");
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    // Set once the iterator has yielded the end-of-input token.
    eof_yielded: bool,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 0,
            eof_yielded: false,
        }
    }

    /// Current cursor position.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    /// Whether the cursor has reached the end of the input.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Scan the next token.
    ///
    /// On error the cursor is left past the offending character, so the
    /// caller may call again to resume scanning.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on an illegal character, a lone `!`, or an
    /// unterminated string literal.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.peek() else {
            return Ok(self.make_token(TokenKind::Eof, String::new()));
        };

        if ch.is_alphabetic() {
            Ok(self.read_word())
        } else if ch.is_ascii_digit() {
            Ok(self.read_number())
        } else if ch == '"' {
            self.read_string()
        } else {
            self.read_symbol(ch)
        }
    }

    const fn make_token(&self, kind: TokenKind, text: String) -> Token {
        Token {
            kind,
            text,
            span: self.span(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            if ch == '\n' {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Consume `expected` if it is the next character.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\n') => self.advance(),
                // CRLF line break
                Some('\r') if self.peek_at(1) == Some('\n') => self.advance(),
                _ => break,
            }
        }
    }

    fn read_word(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;

        self.advance();
        while self
            .peek()
            .is_some_and(|c| c.is_alphabetic() || c.is_ascii_digit())
        {
            self.advance();
        }

        let text = &self.input[start..self.pos];
        Token {
            kind: TokenKind::keyword(text).unwrap_or(TokenKind::Ident),
            text: text.to_string(),
            span,
        }
    }

    fn read_number(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        Token {
            kind: TokenKind::Number,
            text: self.input[start..self.pos].to_string(),
            span,
        }
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        self.advance(); // skip opening quote
        let start = self.pos;

        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        span,
                    });
                }
                Some('"') => {
                    let text = self.input[start..self.pos].to_string();
                    self.advance();
                    return Ok(Token {
                        kind: TokenKind::String,
                        text,
                        span,
                    });
                }
                Some(_) => self.advance(),
            }
        }
    }

    fn read_symbol(&mut self, ch: char) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;
        self.advance();

        let kind = match ch {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            ':' => TokenKind::Colon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '?' => TokenKind::Question,
            '=' if self.eat('=') => TokenKind::Eq,
            '=' => TokenKind::Assign,
            '<' if self.eat('=') => TokenKind::LtEq,
            '<' => TokenKind::Lt,
            '>' if self.eat('=') => TokenKind::GtEq,
            '>' => TokenKind::Gt,
            '!' if self.eat('=') => TokenKind::NotEq,
            '!' => {
                return Err(LexError {
                    kind: LexErrorKind::LoneBang,
                    span,
                });
            }
            other => {
                return Err(LexError {
                    kind: LexErrorKind::IllegalCharacter(other),
                    span,
                });
            }
        };

        Ok(Token {
            kind,
            text: self.input[start..self.pos].to_string(),
            span,
        })
    }
}

/// Yields every token up to and including end of input, then stops.
///
/// Errors are yielded in place; iteration continues after them.
impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.eof_yielded {
            return None;
        }
        let result = self.next_token();
        if matches!(&result, Ok(token) if token.is_eof()) {
            self.eof_yielded = true;
        }
        Some(result)
    }
}

impl FusedIterator for Scanner<'_> {}
