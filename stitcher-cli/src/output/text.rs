//! Plain text output

use anyhow::Result;
use std::io::Write;
use stitcher_engine::EmittedSentence;

/// One sentence per line.
pub fn write(writer: &mut dyn Write, sentences: &[EmittedSentence]) -> Result<()> {
    for sentence in sentences {
        writeln!(writer, "{}", sentence.text)?;
    }
    Ok(())
}
