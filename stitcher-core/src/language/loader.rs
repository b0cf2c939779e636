//! Rule-table loader
//!
//! Manages embedded rule tables with caching.

use crate::error::CoreError;
use crate::language::{config::RuleConfig, runtime::RuleSet};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Embedded rule tables, keyed by language code and alias.
static EMBEDDED: OnceLock<HashMap<String, Arc<RuleSet>>> = OnceLock::new();

/// Load the rule set for a language code (`en` or `english`).
pub fn get_rules(code: &str) -> Result<Arc<RuleSet>, CoreError> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match load_embedded("en", include_str!("../../configs/languages/english.toml")) {
            Ok(rules) => {
                map.insert("en".to_string(), Arc::clone(&rules));
                map.insert("english".to_string(), rules);
            }
            Err(e) => {
                // Embedded tables are validated by the test suite; a parse
                // failure here means a broken build, not a runtime input.
                eprintln!("warning: failed to load embedded English rules: {e}");
            }
        }

        map
    });

    embedded
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::UnknownLanguage(code.to_string()))
}

/// Parse a rule set from a TOML document (for user-supplied tables).
pub fn load_rules_from_toml(toml_str: &str) -> Result<RuleSet, CoreError> {
    let config: RuleConfig =
        toml::from_str(toml_str).map_err(|e| CoreError::RuleTable(e.to_string()))?;
    RuleSet::from_config(&config).map_err(CoreError::RuleTable)
}

fn load_embedded(code: &str, toml_str: &str) -> Result<Arc<RuleSet>, String> {
    let config: RuleConfig =
        toml::from_str(toml_str).map_err(|e| format!("failed to parse {code} table: {e}"))?;
    let rules = RuleSet::from_config(&config)?;
    Ok(Arc::new(rules))
}
