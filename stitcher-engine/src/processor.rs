//! Fragment processor and builder
//!
//! The caller-facing surface of the engine: a transport layer (WebSocket
//! handler, CLI, test harness) pushes raw fragments in and receives
//! completed sentences back. All operations are synchronous and CPU-bound;
//! same-session calls serialize on the session's buffer lock.

use crate::{
    config::EngineConfig,
    error::{EngineError, Result},
    session::SessionStore,
    transcript::TranscriptLog,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stitcher_core::{get_rules, tokenize, SentenceAssembler};

/// A completed sentence handed back to the caller, who is responsible for
/// timestamping, persisting and broadcasting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmittedSentence {
    /// Reconstructed sentence text.
    pub text: String,
    /// Completeness confidence at emission time.
    pub confidence: f64,
    /// Language tag of the source fragments.
    pub language: String,
    /// True when emission was forced by an explicit flush.
    pub flushed: bool,
}

/// Read-only diagnostic view of one session's pending buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferInfo {
    /// Buffered token count.
    pub token_count: usize,
    /// Buffered word count (punctuation excluded).
    pub word_count: usize,
    /// Current completeness confidence of the buffer.
    pub confidence: f64,
    /// Truncated text preview.
    pub preview: String,
}

/// Per-session streaming sentence assembly engine.
#[derive(Debug)]
pub struct FragmentProcessor {
    assembler: SentenceAssembler,
    store: Arc<SessionStore>,
    transcript: Arc<TranscriptLog>,
    config: EngineConfig,
}

impl FragmentProcessor {
    /// Create a processor with default configuration (English).
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a processor with custom configuration and fresh stores.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Self::with_stores(
            config,
            Arc::new(SessionStore::new()),
            Arc::new(TranscriptLog::new()),
        )
    }

    /// Create a processor over externally owned stores (shared with an
    /// admin surface, or pre-seeded in tests).
    pub fn with_stores(
        config: EngineConfig,
        store: Arc<SessionStore>,
        transcript: Arc<TranscriptLog>,
    ) -> Result<Self> {
        if config.min_sentence_words == 0 {
            return Err(EngineError::Config(
                "min_sentence_words must be at least 1".to_string(),
            ));
        }

        let rules = get_rules(&config.language)?;
        let assembler =
            SentenceAssembler::new(rules, config.min_sentence_words, config.max_buffer_words);

        Ok(Self {
            assembler,
            store,
            transcript,
            config,
        })
    }

    /// Ingest one fragment for a session and return every sentence that
    /// became complete as a result. An empty return means the buffer is
    /// still accumulating.
    pub fn on_fragment(
        &self,
        session_id: &str,
        text: &str,
        language: &str,
    ) -> Vec<EmittedSentence> {
        let new_tokens = tokenize(text);
        if new_tokens.is_empty() {
            return Vec::new();
        }

        let handle = self.store.get_or_create(session_id);
        let mut buffer = handle.lock();
        buffer.extend(new_tokens);

        let (completed, remaining) = self.assembler.assemble(&buffer);
        *buffer = remaining;

        if completed.is_empty() {
            let snapshot = self.assembler.buffer_snapshot(&buffer);
            log::debug!(
                "session {session_id}: pending, {} words, conf={:.2}: '{}'",
                snapshot.word_count,
                snapshot.confidence,
                snapshot.preview
            );
            if snapshot.over_budget {
                log::warn!(
                    "session {session_id}: buffer over soft budget ({} words >= 2x{}), \
                     consider flushing",
                    snapshot.word_count,
                    self.config.max_buffer_words
                );
            }
            return Vec::new();
        }

        completed
            .into_iter()
            .map(|sentence| {
                log::info!(
                    "session {session_id}: emitted conf={:.2}, {} chars: '{}'",
                    sentence.confidence,
                    sentence.text.len(),
                    sentence.text
                );
                self.transcript
                    .append(&sentence.text, sentence.confidence, language, false);
                EmittedSentence {
                    text: sentence.text,
                    confidence: sentence.confidence,
                    language: language.to_string(),
                    flushed: false,
                }
            })
            .collect()
    }

    /// Force-emit the session's entire pending buffer verbatim, bypassing
    /// every confidence check, then clear it. `None` when there is nothing
    /// buffered (including for unknown sessions).
    pub fn on_flush(&self, session_id: &str) -> Option<EmittedSentence> {
        let handle = self.store.get(session_id)?;
        let mut buffer = handle.lock();
        if buffer.is_empty() {
            return None;
        }

        let snapshot = self.assembler.buffer_snapshot(&buffer);
        let text = self.assembler.reconstruct(&buffer);
        let token_count = buffer.len();
        buffer.clear();

        log::info!("session {session_id}: flushed {token_count} tokens: '{text}'");
        self.transcript
            .append(&text, snapshot.confidence, &self.config.language, true);

        Some(EmittedSentence {
            text,
            confidence: snapshot.confidence,
            language: self.config.language.clone(),
            flushed: true,
        })
    }

    /// Discard the session's pending buffer without emitting. The session
    /// itself stays alive. Unknown sessions are a no-op.
    pub fn on_clear(&self, session_id: &str) {
        if let Some(handle) = self.store.get(session_id) {
            let mut buffer = handle.lock();
            let dropped = buffer.len();
            buffer.clear();
            log::debug!("session {session_id}: cleared {dropped} pending tokens");
        }
    }

    /// Diagnostic view of the session's buffer. Unknown sessions read as
    /// empty; no mutation.
    pub fn on_inspect(&self, session_id: &str) -> BufferInfo {
        let snapshot = match self.store.get(session_id) {
            Some(handle) => {
                let buffer = handle.lock();
                self.assembler.buffer_snapshot(&buffer)
            }
            None => self.assembler.buffer_snapshot(&[]),
        };

        BufferInfo {
            token_count: snapshot.token_count,
            word_count: snapshot.word_count,
            confidence: snapshot.confidence,
            preview: snapshot.preview,
        }
    }

    /// Tear the session down entirely: buffer and key are removed with no
    /// emission. Frees the session's memory.
    pub fn on_session_end(&self, session_id: &str) {
        if self.store.teardown(session_id) {
            log::debug!("session {session_id}: torn down");
        }
    }

    /// The session store backing this processor.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// The emission log backing this processor.
    pub fn transcript(&self) -> &Arc<TranscriptLog> {
        &self.transcript
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Builder for [`FragmentProcessor`].
pub struct FragmentProcessorBuilder {
    config: EngineConfig,
    store: Option<Arc<SessionStore>>,
    transcript: Option<Arc<TranscriptLog>>,
}

impl Default for FragmentProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentProcessorBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            store: None,
            transcript: None,
        }
    }

    /// Set the rule-table language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the soft per-session word budget (advisory).
    pub fn max_buffer_words(mut self, words: usize) -> Self {
        self.config.max_buffer_words = words;
        self
    }

    /// Set the word count at which spans earn length confidence.
    pub fn min_sentence_words(mut self, words: usize) -> Self {
        self.config.min_sentence_words = words;
        self
    }

    /// Use an externally owned session store.
    pub fn store(mut self, store: Arc<SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use an externally owned transcript log.
    pub fn transcript(mut self, transcript: Arc<TranscriptLog>) -> Self {
        self.transcript = Some(transcript);
        self
    }

    /// Build the processor.
    pub fn build(self) -> Result<FragmentProcessor> {
        FragmentProcessor::with_stores(
            self.config,
            self.store.unwrap_or_else(|| Arc::new(SessionStore::new())),
            self.transcript
                .unwrap_or_else(|| Arc::new(TranscriptLog::new())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor(min_words: usize) -> FragmentProcessor {
        FragmentProcessorBuilder::new()
            .min_sentence_words(min_words)
            .build()
            .unwrap()
    }

    #[test]
    fn empty_fragment_is_a_no_op() {
        let p = processor(8);
        assert!(p.on_fragment("s1", "", "en").is_empty());
        assert!(p.on_fragment("s1", "   ", "en").is_empty());
        assert!(p.store().is_empty());
    }

    #[test]
    fn unknown_session_reads_as_empty() {
        let p = processor(8);
        assert!(p.on_flush("ghost").is_none());
        p.on_clear("ghost");
        let info = p.on_inspect("ghost");
        assert_eq!(info.token_count, 0);
        assert_eq!(info.confidence, 0.0);
        assert_eq!(info.preview, "");
    }

    #[test]
    fn fragment_then_flush() {
        let p = processor(8);
        assert!(p.on_fragment("s1", "Hello world", "en").is_empty());

        let flushed = p.on_flush("s1").unwrap();
        assert_eq!(flushed.text, "Hello world");
        assert!(flushed.flushed);

        assert!(p.on_flush("s1").is_none());
        assert_eq!(p.on_inspect("s1").token_count, 0);
    }
}
