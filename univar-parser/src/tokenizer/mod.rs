pub mod token;

use crate::error::SyntaxError;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows the
/// lexical rewriter to look ahead and behind arbitrarily.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, SyntaxError> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                let ch = lexer.slice().chars().next().unwrap_or('\0');
                return Err(SyntaxError::UnexpectedCharacter(ch));
            }
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn implicit_mul_expr() {
        compare_tokens(
            "202sin(50x)",
            [
                (TokenKind::Int, "202"),
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Int, "50"),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn float_literals() {
        compare_tokens(
            "1.5 + .25 / 3.",
            [
                (TokenKind::Float, "1.5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".25"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Div, "/"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "3."),
            ],
        );
    }

    #[test]
    fn unknown_character() {
        assert_eq!(
            tokenize_complete("x + $"),
            Err(SyntaxError::UnexpectedCharacter('$')),
        );
    }
}
