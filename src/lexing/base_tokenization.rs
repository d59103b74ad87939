//! Core tokenization for tree lines
//!
//! Raw tokenization is done by logos. On top of it this module enforces that the
//! tokens tile the line: every byte belongs to exactly one token, in order.

use crate::error::{Result, TreeError};
use crate::lexing::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Tokens paired with their byte spans in the source line.
pub type TokenSequence = Vec<(Token, Range<usize>)>;

/// Tokenize one line of tree notation.
///
/// Fails with [`TreeError::MalformedInput`] at the first byte offset that starts no
/// token, or where a token does not begin exactly where the previous one ended.
pub fn tokenize(source: &str) -> Result<TokenSequence> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut position = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        if span.start != position {
            return Err(TreeError::MalformedInput { offset: position });
        }
        match result {
            Ok(token) => {
                position = span.end;
                tokens.push((token, span));
            }
            Err(()) => return Err(TreeError::MalformedInput { offset: span.start }),
        }
    }

    if position != source.len() {
        return Err(TreeError::MalformedInput { offset: position });
    }

    Ok(tokens)
}
