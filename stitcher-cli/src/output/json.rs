//! JSON output

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use stitcher_engine::EmittedSentence;

#[derive(Serialize)]
struct Report<'a> {
    sentence_count: usize,
    sentences: &'a [EmittedSentence],
}

/// Pretty-printed JSON report of emitted sentences.
pub fn write(writer: &mut dyn Write, sentences: &[EmittedSentence]) -> Result<()> {
    let report = Report {
        sentence_count: sentences.len(),
        sentences,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
