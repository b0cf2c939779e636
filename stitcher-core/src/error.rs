//! Core error types

use thiserror::Error;

/// Errors from the core assembly layer.
///
/// The pipeline itself is pure and total; only rule-table loading can fail.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No rule table for the requested language code.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// Rule table failed to parse or validate.
    #[error("invalid rule table: {0}")]
    RuleTable(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
