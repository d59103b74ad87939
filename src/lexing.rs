//! Lexer
//!
//! Tokenization of the tree notation. A line such as `(1 (2 3) 4)` becomes a flat
//! sequence of numbers, brackets and single spaces, each paired with its byte span.
//!
//! The token grammar is deliberately tiny:
//!     - `[0-9]+`  a natural number, kept as its digit text
//!     - `(`       opens a group
//!     - `)`       closes a group
//!     - ` `       separates siblings (one space, never a run)
//!
//! The lexer only guarantees that the line is fully covered by these tokens. Whether
//! they are in a legal order is decided by the renderer.

pub mod base_tokenization;
pub mod tokens;

pub use base_tokenization::{tokenize, TokenSequence};
pub use tokens::{Token, TokenKind};
