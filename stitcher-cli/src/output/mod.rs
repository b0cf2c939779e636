//! Output formatting

mod json;
mod text;

use anyhow::Result;
use std::io::Write;
use stitcher_engine::EmittedSentence;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with metadata
    Json,
}

/// Write assembled sentences in the requested format.
pub fn write_sentences(
    writer: &mut dyn Write,
    sentences: &[EmittedSentence],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => text::write(writer, sentences),
        OutputFormat::Json => json::write(writer, sentences),
    }
}
