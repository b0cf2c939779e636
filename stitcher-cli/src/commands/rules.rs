//! Rules command implementation

use anyhow::{Context, Result};
use clap::Args;
use stitcher_core::language::get_rules;

/// Arguments for the rules command
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Language code to inspect
    #[arg(short, long, default_value = "en")]
    pub language: String,
}

impl RulesArgs {
    /// Execute the rules command
    pub fn execute(&self) -> Result<()> {
        let rules = get_rules(&self.language)
            .with_context(|| format!("no rule table for '{}'", self.language))?;

        println!("language: {} ({})", rules.name(), rules.code());
        println!("abbreviations: {}", rules.abbreviation_count());
        println!("connectors: {}", rules.connector_count());
        println!("incomplete endings: {}", rules.incomplete_ending_count());
        println!("incomplete patterns: {}", rules.incomplete_pattern_count());
        Ok(())
    }
}
