//! Token definitions for the tree notation
//!
//! The notation has exactly four kinds of tokens. They are defined with the logos
//! derive macro; anything else on the line is a lexing error.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in a tree line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Serialize)]
pub enum Token {
    // Natural numbers keep their digit text, no numeric conversion
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    // Exactly one literal space, never a run
    #[token(" ")]
    Space,
}

/// The discriminant of a [`Token`], without its payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    Number,
    LeftParen,
    RightParen,
    Space,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::Space => TokenKind::Space,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(digits) => write!(f, "{}", digits),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Space => write!(f, " "),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::LeftParen => "\"(\"",
            TokenKind::RightParen => "\")\"",
            TokenKind::Space => "space",
        };
        f.write_str(name)
    }
}
