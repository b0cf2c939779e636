//! Sentence assembler
//!
//! Scans a pending token buffer left to right and carves off every span
//! that passes the boundary and confidence gates. Whatever is left stays
//! buffered; the assembler never force-flushes on its own.

use crate::boundary::BoundaryClassifier;
use crate::confidence::ConfidenceScorer;
use crate::language::RuleSet;
use crate::token::{Token, TokenBuffer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Minimum confidence for automatic emission. Fixed: only spans the scorer
/// is sure about leave the buffer without an explicit flush.
pub const AUTO_EMIT_THRESHOLD: f64 = 0.75;

/// Advisory confidence at which a caller may choose to surface the buffer.
pub const ADVISORY_SEND_CONFIDENCE: f64 = 0.6;

/// Maximum characters in a buffer preview.
pub const PREVIEW_CHARS: usize = 100;

/// A completed sentence carved out of the buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledSentence {
    /// Reconstructed sentence text.
    pub text: String,
    /// Confidence score the span was emitted with.
    pub confidence: f64,
}

/// Read-only diagnostic view of a pending buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferSnapshot {
    /// Number of buffered tokens.
    pub token_count: usize,
    /// Number of buffered word tokens (punctuation excluded).
    pub word_count: usize,
    /// Current completeness confidence of the whole buffer.
    pub confidence: f64,
    /// First [`PREVIEW_CHARS`] characters of the reconstructed text,
    /// `…`-terminated when truncated.
    pub preview: String,
    /// Advisory: the buffer has grown far past the soft word budget.
    /// Never triggers truncation; surfaced for monitoring/backpressure.
    pub over_budget: bool,
    /// Advisory: confidence or size suggest the caller may want to flush.
    pub should_send: bool,
}

/// Composes tokenizer output, boundary classification and confidence
/// scoring into per-call sentence assembly.
#[derive(Debug, Clone)]
pub struct SentenceAssembler {
    rules: Arc<RuleSet>,
    classifier: BoundaryClassifier,
    scorer: ConfidenceScorer,
    max_buffer_words: usize,
}

impl SentenceAssembler {
    /// Create an assembler. `min_sentence_words` feeds the confidence
    /// scorer; `max_buffer_words` is the soft budget behind the
    /// `over_budget` signal.
    pub fn new(rules: Arc<RuleSet>, min_sentence_words: usize, max_buffer_words: usize) -> Self {
        Self {
            classifier: BoundaryClassifier::new(Arc::clone(&rules)),
            scorer: ConfidenceScorer::new(Arc::clone(&rules), min_sentence_words),
            rules,
            max_buffer_words,
        }
    }

    /// The rule set this assembler classifies with.
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Scan `buffer` and split off every complete sentence.
    ///
    /// Returns the completed sentences in order and the remaining tokens,
    /// which become the new buffer state. Tokens are only ever removed as
    /// a contiguous prefix; the incomplete tail is never emitted here.
    pub fn assemble(&self, buffer: &[Token]) -> (Vec<AssembledSentence>, Vec<Token>) {
        if buffer.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let mut completed = Vec::new();
        let mut span = TokenBuffer::new();

        for (position, token) in buffer.iter().enumerate() {
            span.push(token.clone());

            // Split points only ever sit on terminal punctuation.
            if !self.rules.is_terminator(token) {
                continue;
            }

            if self.classifier.is_ellipsis(&span) {
                continue;
            }

            // Lookahead runs over the full buffer, not the current span.
            if self.classifier.has_continuation_ahead(buffer, position) {
                continue;
            }

            if !self.classifier.is_sentence_boundary(&span, span.len() - 1) {
                continue;
            }

            let confidence = self.scorer.calculate(&span);
            if confidence < AUTO_EMIT_THRESHOLD {
                continue;
            }

            let text = self.reconstruct(&span);
            // Ellipsis that survived the token checks, e.g. via odd spacing.
            if text.trim_end().ends_with("...") {
                continue;
            }

            completed.push(AssembledSentence { text, confidence });
            span.clear();
        }

        (completed, span.into_vec())
    }

    /// Join tokens back into natural text: words separated by single
    /// spaces, punctuation glued to the preceding word. A span that opens
    /// with punctuation keeps it as its own leading element.
    pub fn reconstruct(&self, tokens: &[Token]) -> String {
        let mut parts: Vec<String> = Vec::new();

        for token in tokens {
            if self.rules.is_punctuation(token) {
                match parts.last_mut() {
                    Some(last) => last.push_str(token.as_str()),
                    None => parts.push(token.as_str().to_string()),
                }
            } else {
                parts.push(token.as_str().to_string());
            }
        }

        parts.join(" ")
    }

    /// Diagnostic snapshot of a pending buffer. Read-only.
    pub fn buffer_snapshot(&self, tokens: &[Token]) -> BufferSnapshot {
        let word_count = self.rules.word_count(tokens);
        let confidence = self.scorer.calculate(tokens);
        let text = self.reconstruct(tokens);

        let preview: String = if text.chars().count() > PREVIEW_CHARS {
            let mut p: String = text.chars().take(PREVIEW_CHARS).collect();
            p.push('…');
            p
        } else {
            text
        };

        let over_budget = self.is_over_budget(tokens);

        BufferSnapshot {
            token_count: tokens.len(),
            word_count,
            confidence,
            preview,
            over_budget,
            should_send: confidence >= ADVISORY_SEND_CONFIDENCE || over_budget,
        }
    }

    /// Advisory only: the buffer holds at least twice the soft word budget.
    /// The assembler itself never acts on this.
    pub fn is_over_budget(&self, tokens: &[Token]) -> bool {
        self.rules.word_count(tokens) >= self.max_buffer_words * 2
    }
}
