//! # treerender
//!
//! Renders a single-line tree of natural numbers, such as `(1 (2 3) 4)`, as indented
//! text with one number per line and four spaces per nesting level:
//!
//! ```text
//! 1
//!     2
//!     3
//! 4
//! ```
//!
//! The work is split in two stages:
//!     - [`lexing`] turns the line into numbers, brackets and spaces with byte spans.
//!     - [`rendering`] checks the order of those tokens and writes the output in the
//!       same pass.
//!
//! [`pipeline`] wires both to files and [`settings`] loads the layered configuration.

pub mod error;
pub mod lexing;
pub mod pipeline;
pub mod rendering;
pub mod settings;

pub use error::{Result, StructureError, TreeError};
pub use lexing::{tokenize, Token, TokenKind, TokenSequence};
pub use pipeline::{read_first_line, render_file, render_line, OutputFormat};
pub use rendering::{render, LineEnding, RenderMode, RenderOptions};
