//! Processing pipeline
//!
//! Glue between the outside world and the core: reads the first line of an input
//! resource, runs tokenization and rendering, and decides when the output file is
//! created. Only this layer logs; the lexer and renderer stay silent.

use crate::error::{Result, TreeError};
use crate::lexing::{tokenize, TokenSequence};
use crate::rendering::{render, RenderMode, RenderOptions};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// What the pipeline writes for an accepted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The indented tree rendering.
    #[default]
    Tree,
    /// The token stream with spans, as pretty JSON.
    TokenJson,
}

/// Read the first line of `reader`, without its terminator.
///
/// Everything after the first line is ignored. An empty reader yields an empty line.
/// A line that is not UTF-8 is malformed at the first invalid byte.
pub fn read_first_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_until(b'\n', &mut bytes)?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    String::from_utf8(bytes).map_err(|e| TreeError::MalformedInput {
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Tokenize a single line.
pub fn tokenize_line(line: &str) -> Result<TokenSequence> {
    let tokens = tokenize(line)?;
    log::trace!("tokenized {} bytes into {} tokens", line.len(), tokens.len());
    Ok(tokens)
}

/// Tokenize and render one line into `sink`.
pub fn render_line<W: Write>(line: &str, sink: &mut W, options: &RenderOptions) -> Result<()> {
    let tokens = tokenize_line(line)?;
    log::debug!("rendering {} tokens in {:?} mode", tokens.len(), options.mode);
    render(&tokens, sink, options)
}

/// Write the token stream of `line` as pretty JSON.
pub fn write_token_json<W: Write>(line: &str, sink: &mut W) -> Result<()> {
    let tokens = tokenize_line(line)?;
    serde_json::to_writer_pretty(&mut *sink, &tokens)?;
    writeln!(sink)?;
    Ok(())
}

/// Render the first line of the file at `input` into the file at `output`.
///
/// In streaming mode the output file is created before rendering starts and may
/// hold partial output when rendering fails. In validated mode it is only created
/// once the tree has been accepted.
pub fn render_file(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<()> {
    log::debug!("reading first line of {}", input.display());
    let line = read_first_line(BufReader::new(File::open(input)?))?;

    if format == OutputFormat::TokenJson {
        let mut buffer = Vec::new();
        write_token_json(&line, &mut buffer)?;
        std::fs::write(output, buffer)?;
        log::info!("wrote token stream to {}", output.display());
        return Ok(());
    }

    match options.mode {
        RenderMode::Streaming => {
            let mut writer = BufWriter::new(File::create(output)?);
            render_line(&line, &mut writer, options)?;
            writer.flush()?;
        }
        RenderMode::Validated => {
            let mut buffer = Vec::new();
            render_line(&line, &mut buffer, options)?;
            std::fs::write(output, buffer)?;
        }
    }

    log::info!("rendered tree to {}", output.display());
    Ok(())
}
