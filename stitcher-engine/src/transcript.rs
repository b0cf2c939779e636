//! Emission history
//!
//! Ordered log of every sentence the processor has emitted, with support
//! for manual correction. Injected alongside the session store rather than
//! living as process-global state.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One emitted sentence in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Position in the transcript, assigned at append time.
    pub id: usize,
    /// Sentence text (possibly corrected).
    pub text: String,
    /// Confidence the sentence was emitted with.
    pub confidence: f64,
    /// Language tag supplied with the source fragments.
    pub language: String,
    /// True when the sentence left the buffer via an explicit flush.
    pub flushed: bool,
    /// True once an operator has overwritten the text.
    pub corrected: bool,
}

/// Append-only emission log with in-place correction.
#[derive(Debug, Default)]
pub struct TranscriptLog {
    entries: Mutex<Vec<TranscriptEntry>>,
}

impl TranscriptLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an emission; returns the stored entry.
    pub fn append(
        &self,
        text: impl Into<String>,
        confidence: f64,
        language: impl Into<String>,
        flushed: bool,
    ) -> TranscriptEntry {
        let mut entries = self.entries.lock();
        let entry = TranscriptEntry {
            id: entries.len(),
            text: text.into(),
            confidence,
            language: language.into(),
            flushed,
            corrected: false,
        };
        entries.push(entry.clone());
        entry
    }

    /// Overwrite the text of entry `id`; returns the updated entry, or
    /// `None` for an unknown id.
    pub fn correct(&self, id: usize, text: impl Into<String>) -> Option<TranscriptEntry> {
        let mut entries = self.entries.lock();
        let entry = entries.get_mut(id)?;
        entry.text = text.into();
        entry.corrected = true;
        Some(entry.clone())
    }

    /// Entry by id.
    pub fn get(&self, id: usize) -> Option<TranscriptEntry> {
        self.entries.lock().get(id).cloned()
    }

    /// Copy of the whole transcript.
    pub fn snapshot(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Discard the whole transcript.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_assigns_sequential_ids() {
        let log = TranscriptLog::new();
        assert_eq!(log.append("First.", 0.9, "en", false).id, 0);
        assert_eq!(log.append("Second.", 0.8, "en", true).id, 1);
        assert_eq!(log.len(), 2);
        assert!(log.get(1).unwrap().flushed);
    }

    #[test]
    fn correction_marks_the_entry() {
        let log = TranscriptLog::new();
        log.append("Teh sentence.", 0.9, "en", false);

        let updated = log.correct(0, "The sentence.").unwrap();
        assert_eq!(updated.text, "The sentence.");
        assert!(updated.corrected);
        assert_eq!(log.get(0).unwrap().text, "The sentence.");

        assert!(log.correct(42, "nope").is_none());
    }

    #[test]
    fn clear_empties_the_log() {
        let log = TranscriptLog::new();
        log.append("A sentence.", 0.9, "en", false);
        log.clear();
        assert!(log.is_empty());
    }
}
