//! Validating renderer
//!
//! Walks the token sequence once, checking every adjacent pair against the grammar
//! while tracking how many groups are open. Each number is written as it is
//! validated, indented by four spaces per level below the outermost group.
//!
//! In [`RenderMode::Streaming`] a failure can surface after some lines were already
//! written; that output is meaningless and callers discard it. [`RenderMode::Validated`]
//! renders into memory and only touches the sink once the whole line is accepted.

use crate::error::{Result, StructureError};
use crate::lexing::{Token, TokenKind};
use crate::rendering::grammar::{legal_predecessors, may_follow};
use serde::Deserialize;
use std::io::Write;
use std::ops::Range;

/// Spaces per nesting level. Fixed by the output format.
pub const INDENT_WIDTH: usize = 4;

/// When output reaches the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Write each line as soon as its number is validated.
    #[default]
    Streaming,
    /// Validate and render the whole line before writing anything.
    Validated,
}

/// Terminator written after every rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// The platform separator.
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub line_ending: LineEnding,
}

/// Validate `tokens` as one tree and write its indented rendering to `sink`.
pub fn render<W: Write>(
    tokens: &[(Token, Range<usize>)],
    sink: &mut W,
    options: &RenderOptions,
) -> Result<()> {
    match options.mode {
        RenderMode::Streaming => render_streaming(tokens, sink, options.line_ending),
        RenderMode::Validated => {
            let mut buffer = Vec::new();
            render_streaming(tokens, &mut buffer, options.line_ending)?;
            sink.write_all(&buffer)?;
            Ok(())
        }
    }
}

fn render_streaming<W: Write>(
    tokens: &[(Token, Range<usize>)],
    sink: &mut W,
    line_ending: LineEnding,
) -> Result<()> {
    let ((first, _), rest) = tokens
        .split_first()
        .ok_or(StructureError::MissingOpening { found: None })?;
    if *first != Token::LeftParen {
        return Err(StructureError::MissingOpening {
            found: Some(first.kind()),
        }
        .into());
    }

    // An empty outermost group is a valid, empty tree, and nothing may follow it.
    if let Some(((Token::RightParen, _), trailing)) = rest.split_first() {
        return match trailing.first() {
            None => Ok(()),
            Some((token, span)) => Err(StructureError::TrailingAfterClose {
                token: token.kind(),
                offset: span.start,
            }
            .into()),
        };
    }

    // The first `(` is already consumed, so the outermost group is open.
    let mut open_groups: usize = 1;
    let mut previous = TokenKind::LeftParen;

    for (token, span) in rest {
        let kind = token.kind();

        if open_groups == 0 {
            return Err(StructureError::TrailingAfterClose {
                token: kind,
                offset: span.start,
            }
            .into());
        }

        if !may_follow(kind, previous) {
            return Err(StructureError::IllegalSuccession {
                token: kind,
                previous,
                offset: span.start,
                expected: legal_predecessors(kind),
            }
            .into());
        }

        match token {
            Token::LeftParen => open_groups += 1,
            Token::RightParen => open_groups -= 1,
            Token::Space => {}
            Token::Number(digits) => {
                write_indent(sink, (open_groups - 1) * INDENT_WIDTH)?;
                sink.write_all(digits.as_bytes())?;
                sink.write_all(line_ending.as_str().as_bytes())?;
            }
        }

        previous = kind;
    }

    if open_groups != 0 {
        return Err(StructureError::Unbalanced { open: open_groups }.into());
    }

    Ok(())
}

// Format widths are capped at u16::MAX, so deep indents are written in blocks.
fn write_indent<W: Write>(sink: &mut W, width: usize) -> std::io::Result<()> {
    const BLOCK: &[u8; 64] = &[b' '; 64];

    let mut remaining = width;
    while remaining > 0 {
        let chunk = remaining.min(BLOCK.len());
        sink.write_all(&BLOCK[..chunk])?;
        remaining -= chunk;
    }
    Ok(())
}
