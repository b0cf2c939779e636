//! Process command implementation

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use stitcher_engine::{EmittedSentence, FragmentProcessorBuilder};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input file with one fragment per line (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Language for the assembly rule tables
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Word count at which spans earn length confidence
    #[arg(long, value_name = "N", default_value_t = 8)]
    pub min_words: usize,

    /// Soft per-session word budget (advisory signal only)
    #[arg(long, value_name = "N", default_value_t = 150)]
    pub max_buffer_words: usize,

    /// Force-emit whatever is still buffered at end of input
    #[arg(long)]
    pub flush: bool,

    /// Suppress logging output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("starting fragment replay");
        log::debug!("arguments: {self:?}");

        let processor = FragmentProcessorBuilder::new()
            .language(&self.language)
            .min_sentence_words(self.min_words)
            .max_buffer_words(self.max_buffer_words)
            .build()
            .with_context(|| format!("failed to build processor for '{}'", self.language))?;

        let reader: Box<dyn BufRead> = match &self.input {
            Some(path) => Box::new(BufReader::new(
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
            )),
            None => Box::new(BufReader::new(io::stdin())),
        };

        const SESSION: &str = "cli";
        let mut sentences: Vec<EmittedSentence> = Vec::new();

        for line in reader.lines() {
            let fragment = line.context("failed to read input line")?;
            sentences.extend(processor.on_fragment(SESSION, &fragment, &self.language));
        }

        if self.flush {
            sentences.extend(processor.on_flush(SESSION));
        } else {
            let pending = processor.on_inspect(SESSION);
            if pending.token_count > 0 {
                log::warn!(
                    "{} tokens still buffered (conf={:.2}): '{}' — rerun with --flush to emit",
                    pending.token_count,
                    pending.confidence,
                    pending.preview
                );
            }
        }

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
            ),
            None => Box::new(io::stdout().lock()),
        };

        output::write_sentences(&mut writer, &sentences, self.format)?;
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
