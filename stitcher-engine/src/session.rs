//! Per-session token buffer store
//!
//! Each session owns an independent pending-token buffer. The store hands
//! out per-session mutexes so fragments for one session serialize while
//! distinct sessions proceed in parallel. Buffers grow at the tail only
//! and shrink by prefix removal or wholesale clearing.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use stitcher_core::Token;

/// Shared handle to one session's pending buffer.
pub type BufferHandle = Arc<Mutex<Vec<Token>>>;

/// Injected store of per-session buffers. Replaces process-global state so
/// the assembler can be unit-tested and multiple engines can coexist.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, BufferHandle>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer for `session_id`, created on first use.
    pub fn get_or_create(&self, session_id: &str) -> BufferHandle {
        if let Some(handle) = self.sessions.read().get(session_id) {
            return Arc::clone(handle);
        }

        let mut sessions = self.sessions.write();
        Arc::clone(
            sessions
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Vec::new()))),
        )
    }

    /// Buffer for `session_id`, if the session exists.
    pub fn get(&self, session_id: &str) -> Option<BufferHandle> {
        self.sessions.read().get(session_id).cloned()
    }

    /// Remove the session entirely, buffer and key. Returns true if the
    /// session existed.
    pub fn teardown(&self, session_id: &str) -> bool {
        self.sessions.write().remove(session_id).is_some()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// True when no session is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Identifiers of all live sessions.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.read().keys().cloned().collect()
    }

    /// Drop every session (admin reset).
    pub fn clear_all(&self) {
        self.sessions.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_are_created_on_first_use() {
        let store = SessionStore::new();
        assert!(store.is_empty());
        assert!(store.get("a").is_none());

        let handle = store.get_or_create("a");
        handle.lock().push(Token::new("hello"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().lock().len(), 1);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new();
        store.get_or_create("a").lock().push(Token::new("x"));
        store.get_or_create("b").lock().push(Token::new("y"));

        assert_eq!(store.get("a").unwrap().lock()[0], "x");
        assert_eq!(store.get("b").unwrap().lock()[0], "y");
    }

    #[test]
    fn teardown_removes_the_key() {
        let store = SessionStore::new();
        store.get_or_create("a");
        assert!(store.teardown("a"));
        assert!(!store.teardown("a"));
        assert!(store.get("a").is_none());
    }

    #[test]
    fn get_or_create_returns_the_same_buffer() {
        let store = SessionStore::new();
        let first = store.get_or_create("a");
        let second = store.get_or_create("a");
        assert!(Arc::ptr_eq(&first, &second));
    }
}
