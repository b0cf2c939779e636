//! Configuration structures and validation
//!
//! This module defines the TOML schema for language rule tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root rule-table configuration for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Language identification.
    pub metadata: Metadata,
    /// Sentence-ending punctuation.
    pub terminators: Terminators,
    /// Mid-sentence pause punctuation.
    pub pause_indicators: PauseIndicators,
    /// Abbreviations that suppress boundary detection.
    pub abbreviations: Abbreviations,
    /// Continuation words that suppress boundary detection.
    pub connectors: Connectors,
    /// Incomplete-clause signals for the confidence scorer.
    #[serde(default)]
    pub incomplete: Incomplete,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language code, e.g. `en`.
    pub code: String,
    /// Human-readable name.
    pub name: String,
}

/// Sentence-ending punctuation characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    /// The characters, each a standalone token after tokenization.
    pub chars: Vec<char>,
}

/// Mid-sentence pause punctuation (commas, dashes, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PauseIndicators {
    /// The characters, each a standalone token after tokenization.
    pub chars: Vec<char>,
}

/// Dot-suffixed abbreviations that must not end a sentence, grouped by
/// category for maintainability. Entries are matched case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviations {
    /// Category name to abbreviation list, e.g. `titles = ["dr.", ...]`.
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Continuation words: a sentence never ends right before one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connectors {
    /// The words, matched case-insensitively.
    pub words: Vec<String>,
}

/// Words and two-word patterns that signal an incomplete clause when they
/// appear immediately before a period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Incomplete {
    /// Single trailing words (`the`, `to`, `was`, ...).
    #[serde(default)]
    pub endings: Vec<String>,
    /// Two-word trailing patterns (`to be`, `in the`, ...).
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl RuleConfig {
    /// Validate structural constraints the serde schema cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }
        if self.terminators.chars.is_empty() {
            return Err("terminators.chars must not be empty".to_string());
        }
        for abbr in self.abbreviations.categories.values().flatten() {
            if !abbr.ends_with('.') {
                return Err(format!("abbreviation '{abbr}' must end with '.'"));
            }
        }
        for pattern in &self.incomplete.patterns {
            if pattern.split(' ').count() != 2 {
                return Err(format!(
                    "incomplete pattern '{pattern}' must be exactly two words"
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> RuleConfig {
        toml::from_str(
            r#"
            [metadata]
            code = "xx"
            name = "Test"

            [terminators]
            chars = [".", "?"]

            [pause_indicators]
            chars = [","]

            [abbreviations]
            titles = ["dr."]

            [connectors]
            words = ["and"]
            "#,
        )
        .expect("minimal config parses")
    }

    #[test]
    fn parses_and_validates() {
        let config = minimal();
        assert_eq!(config.metadata.code, "xx");
        assert_eq!(config.terminators.chars, vec!['.', '?']);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_abbreviation_without_dot() {
        let mut config = minimal();
        config
            .abbreviations
            .categories
            .insert("bad".to_string(), vec!["dr".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_pair_pattern() {
        let mut config = minimal();
        config.incomplete.patterns.push("to be or".to_string());
        assert!(config.validate().is_err());
    }
}
