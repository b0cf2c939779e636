//! Configuration types for the engine

/// Engine configuration.
///
/// `max_buffer_words` is advisory only: the assembler never truncates or
/// force-flushes a buffer on its own, no matter how large it grows. The
/// limit feeds the over-budget monitoring signal surfaced to callers.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Language code for the rule tables (`en`).
    pub language: String,
    /// Soft word budget per session buffer (monitoring signal only).
    pub max_buffer_words: usize,
    /// Word count at which a span starts earning length confidence.
    pub min_sentence_words: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_buffer_words: 150,
            min_sentence_words: 8,
        }
    }
}

impl EngineConfig {
    /// Configuration for a specific language, defaults otherwise.
    pub fn for_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Low-latency preset: short sentences emit sooner.
    pub fn eager() -> Self {
        Self {
            min_sentence_words: 4,
            ..Self::default()
        }
    }
}
