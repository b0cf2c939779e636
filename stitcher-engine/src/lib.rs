//! Orchestration layer for streaming sentence assembly
//!
//! Wraps the pure pipeline from `stitcher-core` with per-session buffering,
//! an emission log and the operations a transport layer calls: fragment
//! ingestion, flush, clear, inspect and session teardown.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod processor;
pub mod session;
pub mod transcript;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use processor::{BufferInfo, EmittedSentence, FragmentProcessor, FragmentProcessorBuilder};
pub use session::SessionStore;
pub use transcript::{TranscriptEntry, TranscriptLog};
