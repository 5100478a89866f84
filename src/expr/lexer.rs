//! Tokenization entry point
//!
//! Runs the logos lexer over source text, pairing every token with its byte
//! span. Unlike the raw lexer iterator, this reports the first unrecognized
//! character as a located user error instead of skipping it.

use logos::Logos;

use crate::expr::tokens::Token;
use crate::expr::{Location, ParseError};

/// Byte range of a token in the source text.
pub type Span = std::ops::Range<usize>;

/// Tokenize source text with location information.
pub fn lex(source: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                let character = source[span.clone()].chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedCharacter {
                    character,
                    location: Location::from_offset(source, span.start),
                });
            }
        }
    }

    Ok(tokens)
}
