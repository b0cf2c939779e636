//! Language-specific rule tables for sentence assembly.
//!
//! Token sets (terminators, pauses, abbreviations, connectors, incomplete
//! endings and patterns) are data loaded from TOML, not hard-coded logic,
//! so the classifier stays testable and extensible per language.

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod runtime;

pub use config::RuleConfig;
pub use loader::{get_rules, load_rules_from_toml};
pub use runtime::RuleSet;
