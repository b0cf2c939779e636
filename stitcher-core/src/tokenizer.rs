//! Micro-tokenizer
//!
//! Splits raw fragment text into words and single punctuation marks,
//! discarding whitespace. Pure and order-preserving; empty or
//! whitespace-only input yields an empty sequence.

use crate::token::Token;
use regex::Regex;
use std::sync::OnceLock;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        // Words (letters, digits, inner apostrophes) or one punctuation
        // mark from the recognized terminator/pause sets.
        Regex::new(r"\b[\w']+\b|[.,;:!?—–\-]").expect("token pattern is a valid regex")
    })
}

/// Break text into micro-tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    token_pattern()
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(Token::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn splits_words_and_punctuation() {
        let tokens = tokenize("Hello, world. Next");
        assert_eq!(texts(&tokens), ["Hello", ",", "world", ".", "Next"]);
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn keeps_apostrophes_inside_words() {
        let tokens = tokenize("don't can't");
        assert_eq!(texts(&tokens), ["don't", "can't"]);
    }

    #[test]
    fn ellipsis_becomes_three_tokens() {
        let tokens = tokenize("Wait...");
        assert_eq!(texts(&tokens), ["Wait", ".", ".", "."]);
    }

    #[test]
    fn dashes_are_single_tokens() {
        let tokens = tokenize("well — yes – no - maybe");
        assert_eq!(texts(&tokens), ["well", "—", "yes", "–", "no", "-", "maybe"]);
    }

    #[test]
    fn unrecognized_punctuation_is_dropped() {
        let tokens = tokenize("hello (world) \"quote\"");
        assert_eq!(texts(&tokens), ["hello", "world", "quote"]);
    }

    #[test]
    fn digits_count_as_word_characters() {
        let tokens = tokenize("room 42.");
        assert_eq!(texts(&tokens), ["room", "42", "."]);
    }
}
