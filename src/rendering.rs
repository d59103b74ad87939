//! Renderer
//!
//! Grammar validation and indented output happen in the same traversal of the
//! token sequence. The adjacency rules live in [`grammar`]; [`renderer`] walks the
//! tokens, tracks open groups and writes one line per number.

pub mod grammar;
pub mod renderer;

pub use renderer::{render, LineEnding, RenderMode, RenderOptions, INDENT_WIDTH};
