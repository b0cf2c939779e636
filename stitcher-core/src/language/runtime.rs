//! Runtime rule set built from a parsed configuration.
//!
//! All lookups are O(1) hash-set membership tests; the assembler calls
//! these on every token of every fragment.

use crate::language::config::RuleConfig;
use crate::token::Token;
use std::collections::HashSet;

/// Immutable, process-lifetime token classification tables for one language.
#[derive(Debug, Clone)]
pub struct RuleSet {
    code: String,
    name: String,
    terminators: HashSet<char>,
    pause_indicators: HashSet<char>,
    abbreviations: HashSet<String>,
    connectors: HashSet<String>,
    incomplete_endings: HashSet<String>,
    incomplete_patterns: HashSet<String>,
}

impl RuleSet {
    /// Build a rule set from a validated configuration.
    pub fn from_config(config: &RuleConfig) -> Result<Self, String> {
        config.validate()?;

        let abbreviations = config
            .abbreviations
            .categories
            .values()
            .flatten()
            .map(|s| s.to_lowercase())
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators: config.terminators.chars.iter().copied().collect(),
            pause_indicators: config.pause_indicators.chars.iter().copied().collect(),
            abbreviations,
            connectors: config
                .connectors
                .words
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            incomplete_endings: config
                .incomplete
                .endings
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            incomplete_patterns: config
                .incomplete
                .patterns
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        })
    }

    /// Language code, e.g. `en`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for sentence-ending punctuation tokens (`.`, `?`, `!`).
    pub fn is_terminator(&self, token: &Token) -> bool {
        token
            .as_char()
            .is_some_and(|ch| self.terminators.contains(&ch))
    }

    /// True for pause punctuation tokens (`,`, `;`, `:`, dashes).
    pub fn is_pause(&self, token: &Token) -> bool {
        token
            .as_char()
            .is_some_and(|ch| self.pause_indicators.contains(&ch))
    }

    /// True for any recognized punctuation token.
    pub fn is_punctuation(&self, token: &Token) -> bool {
        self.is_terminator(token) || self.is_pause(token)
    }

    /// True if `word` (already dot-suffixed, e.g. `dr.`) is a known
    /// abbreviation. Matching is case-insensitive.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    /// True if `word` is a continuation word (`and`, `which`, ...).
    pub fn is_connector(&self, word: &str) -> bool {
        self.connectors.contains(&word.to_lowercase())
    }

    /// True if a clause ending in `word` is very likely incomplete.
    pub fn is_incomplete_ending(&self, word: &str) -> bool {
        self.incomplete_endings.contains(word)
    }

    /// True if the space-joined two-word tail matches a known incomplete
    /// pattern (`"to be"`, `"in the"`, ...).
    pub fn is_incomplete_pattern(&self, last_two: &str) -> bool {
        self.incomplete_patterns.contains(last_two)
    }

    /// Count of word tokens: everything that is not terminator or pause
    /// punctuation.
    pub fn word_count(&self, tokens: &[Token]) -> usize {
        tokens.iter().filter(|t| !self.is_punctuation(t)).count()
    }

    /// Number of loaded abbreviations (diagnostics).
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Number of loaded connectors (diagnostics).
    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    /// Number of loaded incomplete-ending words (diagnostics).
    pub fn incomplete_ending_count(&self) -> usize {
        self.incomplete_endings.len()
    }

    /// Number of loaded incomplete two-word patterns (diagnostics).
    pub fn incomplete_pattern_count(&self) -> usize {
        self.incomplete_patterns.len()
    }
}
