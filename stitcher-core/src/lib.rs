//! Confidence-scored sentence assembly over streaming transcript fragments
//!
//! Streaming speech-to-text produces short, overlapping text fragments.
//! This crate decides, incrementally, when enough fragments have
//! accumulated to form one complete, well-formed sentence.
//!
//! # Pipeline
//!
//! 1. [`tokenize`] splits raw text into micro-tokens (words and single
//!    punctuation marks).
//! 2. [`BoundaryClassifier`] decides whether a punctuation token plausibly
//!    ends a sentence (abbreviation, continuation and ellipsis checks).
//! 3. [`ConfidenceScorer`] rates a candidate span's completeness in
//!    `[0.0, 1.0]`.
//! 4. [`SentenceAssembler`] scans a pending buffer and carves off every
//!    span that clears the fixed confidence gate; the rest stays buffered.
//!
//! All stages are pure and synchronous. Per-session buffering and the
//! caller-facing operations live in `stitcher-engine`.
//!
//! # Example
//!
//! ```rust
//! use stitcher_core::{language::get_rules, tokenize, SentenceAssembler};
//!
//! let rules = get_rules("en").unwrap();
//! let assembler = SentenceAssembler::new(rules, 2, 150);
//!
//! let buffer = tokenize("Hello world? This is");
//! let (completed, remaining) = assembler.assemble(&buffer);
//!
//! assert_eq!(completed.len(), 1);
//! assert_eq!(completed[0].text, "Hello world?");
//! assert_eq!(assembler.reconstruct(&remaining), "This is");
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod boundary;
pub mod confidence;
pub mod error;
pub mod language;
pub mod token;
pub mod tokenizer;

pub use assembler::{
    AssembledSentence, BufferSnapshot, SentenceAssembler, ADVISORY_SEND_CONFIDENCE,
    AUTO_EMIT_THRESHOLD, PREVIEW_CHARS,
};
pub use boundary::BoundaryClassifier;
pub use confidence::ConfidenceScorer;
pub use error::{CoreError, Result};
pub use language::{get_rules, RuleSet};
pub use token::{Token, TokenBuffer};
pub use tokenizer::tokenize;
