//! Lexical scanner for a declarative resource and service
//! configuration language.
//!
//! Converts source text into classified tokens (`resource`,
//! `service`, `model`, `provider`, `extends`, `func`, `abstract`,
//! identifiers, unsigned numbers, string literals, delimiters and
//! operators) with line and column positions for diagnostics.
//!
//! # Quick start
//!
//! ```
//! use rescfg_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("resource \"db\" = 5").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Resource,
//!         TokenKind::String,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! ## Collecting every error
//!
//! ```
//! use rescfg_lexer::{tokenize_all, LexErrorKind};
//!
//! let (tokens, errors) = tokenize_all("a @ b ! c");
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(errors[0].kind, LexErrorKind::IllegalCharacter('@'));
//! assert_eq!(errors[1].kind, LexErrorKind::LoneBang);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod scanner;
pub mod token;

pub use scanner::{LexError, LexErrorKind, Scanner, tokenize, tokenize_all};
pub use token::{Category, Span, Token, TokenKind};
