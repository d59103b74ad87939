//! Adjacency grammar of the tree notation
//!
//! Legality of a token depends only on the token immediately before it:
//!
//!     current   | legal predecessors
//!     ----------+---------------------
//!     (         | )  space
//!     )         | number  )
//!     space     | number  )
//!     number    | (  space
//!
//! The first token of a line has no predecessor and must be `(`. A space after `)`
//! is what lets a number follow a nested group, as in `(1 (2 3) 4)`.

use crate::lexing::TokenKind;

/// Kinds that may directly precede `current`.
pub fn legal_predecessors(current: TokenKind) -> &'static [TokenKind] {
    match current {
        TokenKind::LeftParen => &[TokenKind::RightParen, TokenKind::Space],
        TokenKind::RightParen => &[TokenKind::Number, TokenKind::RightParen],
        TokenKind::Space => &[TokenKind::Number, TokenKind::RightParen],
        TokenKind::Number => &[TokenKind::LeftParen, TokenKind::Space],
    }
}

/// Whether `current` may directly follow `previous`.
pub fn may_follow(current: TokenKind, previous: TokenKind) -> bool {
    legal_predecessors(current).contains(&previous)
}
