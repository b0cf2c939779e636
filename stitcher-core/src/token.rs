//! Micro-token type shared by every stage of the assembly pipeline.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// The smallest unit the assembler reasons about: a word (letters, digits,
/// apostrophes) or a single punctuation mark.
///
/// No type tag is stored; classification is a set-membership test against
/// the active [`RuleSet`](crate::language::RuleSet) at each use site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

/// Token span that stays on the stack for typical fragment sizes.
pub type TokenBuffer = SmallVec<[Token; 16]>;

impl Token {
    /// Create a token from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased token text, allocated on demand.
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    /// True if the first character is a lowercase letter.
    pub fn starts_lowercase(&self) -> bool {
        self.0.chars().next().is_some_and(|c| c.is_lowercase())
    }

    /// True if the first character is an uppercase letter.
    pub fn starts_uppercase(&self) -> bool {
        self.0.chars().next().is_some_and(|c| c.is_uppercase())
    }

    /// True if the token is exactly the given single character.
    pub fn is_char(&self, ch: char) -> bool {
        let mut chars = self.0.chars();
        chars.next() == Some(ch) && chars.next().is_none()
    }

    /// The token as a single character, if it is one.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token(text.to_string())
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Token(text)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
