use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

lazy_static! {
    /// Reserved words and the keyword kind each one scans as.
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("resource", TokenKind::Resource);
        map.insert("service", TokenKind::Service);
        map.insert("model", TokenKind::Model);
        map.insert("provider", TokenKind::Provider);
        map.insert("extends", TokenKind::Extends);
        map.insert("func", TokenKind::Func);
        map.insert("abstract", TokenKind::Abstract);
        map
    };
}

/// Source location for error reporting.
///
/// `line` is 1-based, `column` is 0-based and counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords.
    Resource,
    Service,
    Model,
    Provider,
    Extends,
    Func,
    Abstract,

    /// Letter-initial run that is not a reserved word.
    Ident,
    /// Unsigned run of decimal digits.
    Number,
    /// Double-quoted string; the text excludes the quotes.
    String,

    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `=`
    Assign,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `?`
    Question,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,

    /// End of input. Always has empty text.
    Eof,
}

/// Coarse classification of a [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Identifier,
    Number,
    String,
    /// Delimiters and operators.
    Symbol,
    Eof,
}

impl TokenKind {
    /// Look up a reserved word. The match is exact and case-sensitive.
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        KEYWORDS.get(text).copied()
    }

    /// The coarse category this kind belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Resource
            | Self::Service
            | Self::Model
            | Self::Provider
            | Self::Extends
            | Self::Func
            | Self::Abstract => Category::Keyword,
            Self::Ident => Category::Identifier,
            Self::Number => Category::Number,
            Self::String => Category::String,
            Self::Eof => Category::Eof,
            _ => Category::Symbol,
        }
    }

    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), Category::Keyword)
    }

    /// Fixed spelling of keyword, delimiter and operator kinds.
    ///
    /// Returns `None` for kinds whose text varies (`Ident`, `Number`,
    /// `String`) and for `Eof`.
    #[must_use]
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Resource => "resource",
            Self::Service => "service",
            Self::Model => "model",
            Self::Provider => "provider",
            Self::Extends => "extends",
            Self::Func => "func",
            Self::Abstract => "abstract",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Question => "?",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Ident | Self::Number | Self::String | Self::Eof => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.lexeme() {
            return write!(f, "{text}");
        }
        match self {
            Self::Ident => write!(f, "identifier"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            _ => write!(f, "end of input"),
        }
    }
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Shorthand for `self.kind.category()`.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
