//! Boundary classifier
//!
//! Decides whether a punctuation token plausibly ends a sentence.
//! `?` and `!` are strong terminators; periods need abbreviation,
//! continuation and ellipsis checks.

use crate::language::RuleSet;
use crate::token::Token;
use std::sync::Arc;

/// Rule-driven sentence boundary classifier.
#[derive(Debug, Clone)]
pub struct BoundaryClassifier {
    rules: Arc<RuleSet>,
}

impl BoundaryClassifier {
    /// Create a classifier over the given rule set.
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// True if the token at `position` is a plausible sentence terminator.
    pub fn is_sentence_boundary(&self, tokens: &[Token], position: usize) -> bool {
        let Some(token) = tokens.get(position) else {
            return false;
        };

        if !self.rules.is_terminator(token) {
            return false;
        }

        if token.is_char('?') || token.is_char('!') {
            return true;
        }

        if token.is_char('.') {
            // Abbreviation: "Dr" + "." never ends a sentence.
            if position > 0 {
                let candidate = format!("{}.", tokens[position - 1].lowercase());
                if self.rules.is_abbreviation(&candidate) {
                    return false;
                }
            }

            // Lowercase follow-up reads as a continuation of the clause.
            if let Some(next) = tokens.get(position + 1) {
                if next.starts_lowercase() {
                    return false;
                }
            }

            // Part of an ellipsis run.
            if position > 0 && tokens[position - 1].is_char('.') {
                return false;
            }
            if tokens.get(position + 1).is_some_and(|t| t.is_char('.')) {
                return false;
            }
        }

        true
    }

    /// True if the span ends with exactly `.` `.` `.`.
    pub fn is_ellipsis(&self, tokens: &[Token]) -> bool {
        if tokens.len() < 3 {
            return false;
        }
        tokens[tokens.len() - 3..].iter().all(|t| t.is_char('.'))
    }

    /// True if the token after `position` begins a continuation: it starts
    /// with a lowercase letter or is a connector word. The assembler must
    /// not split at `position` when this holds.
    pub fn has_continuation_ahead(&self, all_tokens: &[Token], position: usize) -> bool {
        let Some(next) = all_tokens.get(position + 1) else {
            return false;
        };

        if next.as_str().is_empty() {
            return false;
        }

        next.starts_lowercase() || self.rules.is_connector(next.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_rules;

    fn classifier() -> BoundaryClassifier {
        BoundaryClassifier::new(get_rules("en").unwrap())
    }

    fn toks(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w)).collect()
    }

    #[test]
    fn strong_terminators() {
        let c = classifier();
        assert!(c.is_sentence_boundary(&toks(&["Really", "?"]), 1));
        assert!(c.is_sentence_boundary(&toks(&["Stop", "!"]), 1));
    }

    #[test]
    fn non_terminators_and_out_of_range() {
        let c = classifier();
        assert!(!c.is_sentence_boundary(&toks(&["word", ","]), 1));
        assert!(!c.is_sentence_boundary(&toks(&["word"]), 0));
        assert!(!c.is_sentence_boundary(&toks(&["word", "."]), 5));
    }

    #[test]
    fn abbreviation_suppresses_period() {
        let c = classifier();
        let tokens = toks(&["I", "met", "Dr", ".", "Smith"]);
        assert!(!c.is_sentence_boundary(&tokens, 3));
    }

    #[test]
    fn lowercase_follow_suppresses_period() {
        let c = classifier();
        let tokens = toks(&["done", ".", "next"]);
        assert!(!c.is_sentence_boundary(&tokens, 1));
    }

    #[test]
    fn uppercase_follow_keeps_boundary() {
        let c = classifier();
        let tokens = toks(&["done", ".", "Next"]);
        assert!(c.is_sentence_boundary(&tokens, 1));
    }

    #[test]
    fn ellipsis_dots_are_not_boundaries() {
        let c = classifier();
        let tokens = toks(&["Wait", ".", ".", "."]);
        assert!(!c.is_sentence_boundary(&tokens, 1));
        assert!(!c.is_sentence_boundary(&tokens, 2));
        assert!(!c.is_sentence_boundary(&tokens, 3));
    }

    #[test]
    fn ellipsis_detection() {
        let c = classifier();
        assert!(c.is_ellipsis(&toks(&["Wait", ".", ".", "."])));
        assert!(!c.is_ellipsis(&toks(&["Wait", ".", "."])));
        assert!(!c.is_ellipsis(&toks(&[".", "."])));
    }

    #[test]
    fn continuation_lookahead() {
        let c = classifier();
        let lower = toks(&["done", ".", "and"]);
        assert!(c.has_continuation_ahead(&lower, 1));

        let connector = toks(&["done", ".", "But"]);
        assert!(c.has_continuation_ahead(&connector, 1));

        let fresh = toks(&["done", ".", "Tomorrow"]);
        assert!(!c.has_continuation_ahead(&fresh, 1));

        let tail = toks(&["done", "."]);
        assert!(!c.has_continuation_ahead(&tail, 1));
    }
}
