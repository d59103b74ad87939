//! Error types for treerender

use crate::lexing::TokenKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

/// Main error type for treerender
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Invalid format of input data. Invalid token position: {offset}")]
    MalformedInput { offset: usize },

    #[error("Invalid tree structure: {0}")]
    InvalidStructure(#[from] StructureError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Violations of the tree grammar found by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("expected opening bracket, found {}", describe(.found))]
    MissingOpening { found: Option<TokenKind> },

    #[error(
        "{token} cannot follow {previous} at byte {offset} (expected one of: {})",
        list(.expected)
    )]
    IllegalSuccession {
        token: TokenKind,
        previous: TokenKind,
        offset: usize,
        expected: &'static [TokenKind],
    },

    #[error("{token} at byte {offset} follows the closed outermost group")]
    TrailingAfterClose { token: TokenKind, offset: usize },

    #[error("unbalanced brackets, {open} group(s) left open")]
    Unbalanced { open: usize },
}

fn describe(found: &Option<TokenKind>) -> String {
    match found {
        Some(kind) => kind.to_string(),
        None => "end of input".to_string(),
    }
}

fn list(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
