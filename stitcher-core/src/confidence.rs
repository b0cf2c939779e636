//! Completeness confidence scorer
//!
//! Scores a candidate token span on how likely it is to be one complete,
//! well-formed sentence. The score is the final gate before auto-emission.

use crate::language::RuleSet;
use crate::token::Token;
use std::sync::Arc;

/// How many words before a trailing period are inspected for
/// incomplete-clause signals.
const LOOKBACK_WORDS: usize = 3;

/// Heuristic confidence scorer over candidate token spans.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    rules: Arc<RuleSet>,
    min_sentence_words: usize,
}

impl ConfidenceScorer {
    /// Create a scorer; `min_sentence_words` is the word count at which a
    /// span starts earning length credit.
    pub fn new(rules: Arc<RuleSet>, min_sentence_words: usize) -> Self {
        Self {
            rules,
            min_sentence_words,
        }
    }

    /// Confidence in [0.0, 1.0] that `tokens` form a complete sentence.
    ///
    /// Short-circuit ladder first (hard disqualifiers return immediately),
    /// then an additive base score from independent positive signals.
    pub fn calculate(&self, tokens: &[Token]) -> f64 {
        let Some(last) = tokens.last() else {
            return 0.0;
        };

        // No terminal punctuation at all.
        if !self.rules.is_terminator(last) {
            return 0.1;
        }

        // Trailing ellipsis means the thought is unfinished.
        if tokens.len() >= 3 && tokens[tokens.len() - 3..].iter().all(|t| t.is_char('.')) {
            return 0.2;
        }

        if last.is_char('.') {
            let words = self.words_before_period(tokens);

            if let Some(word) = words.last() {
                if self.rules.is_incomplete_ending(word) {
                    return 0.25;
                }
            }

            if words.len() >= 2 {
                let last_two = words[words.len() - 2..].join(" ");
                if self.rules.is_incomplete_pattern(&last_two) {
                    return 0.25;
                }
            }
        }

        let word_count = self.rules.word_count(tokens);
        let mut score: f64 = 0.0;

        if word_count >= self.min_sentence_words {
            score += 0.3;
        }
        if word_count >= self.min_sentence_words * 2 {
            score += 0.2;
        }

        if last.is_char('?') || last.is_char('!') {
            score += 0.4;
        } else if last.is_char('.') {
            score += 0.3;
        }

        if tokens[0].starts_uppercase() {
            score += 0.1;
        }

        if self.verb_indicator_count(tokens) >= 2 {
            score += 0.1;
        }

        score.min(1.0)
    }

    /// Lower-cased words in the lookback window before the trailing period,
    /// in original order, skipping punctuation and pause tokens.
    fn words_before_period(&self, tokens: &[Token]) -> Vec<String> {
        let end = tokens.len() - 1; // exclude the period itself
        let start = end.saturating_sub(LOOKBACK_WORDS);

        tokens[start..end]
            .iter()
            .filter(|t| !self.rules.is_punctuation(t))
            .map(Token::lowercase)
            .collect()
    }

    /// Tokens whose lower-cased form carries a common verb suffix. A weak
    /// signal that the span contains an actual predicate.
    fn verb_indicator_count(&self, tokens: &[Token]) -> usize {
        tokens
            .iter()
            .filter(|t| {
                let lower = t.lowercase();
                ["ed", "ing", "s", "es"]
                    .iter()
                    .any(|suffix| lower.ends_with(suffix))
            })
            .count()
    }
}
