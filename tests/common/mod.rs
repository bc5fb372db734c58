#![allow(dead_code)]

use rescfg_lexer::{Token, TokenKind, tokenize};

pub fn scan(input: &str) -> Vec<Token> {
    tokenize(input).unwrap_or_else(|e| panic!("failed to scan {input:?}: {e}"))
}

pub fn kinds(input: &str) -> Vec<TokenKind> {
    scan(input).into_iter().map(|t| t.kind).collect()
}

/// Helper: assert tokens come in non-decreasing (line, column) order
/// and that exactly one end-of-input token closes the stream.
pub fn assert_well_formed(tokens: &[Token]) {
    let eofs = tokens.iter().filter(|t| t.is_eof()).count();
    assert_eq!(eofs, 1, "expected exactly one end-of-input token");
    assert!(
        tokens.last().is_some_and(Token::is_eof),
        "stream does not end with end-of-input"
    );
    for pair in tokens.windows(2) {
        assert!(
            pair[0].span <= pair[1].span,
            "out of order: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}
