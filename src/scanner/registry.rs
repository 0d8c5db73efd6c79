//! Language-keyed registry of compiled rule sets.
//!
//! The registry is built once at startup from the static tables in
//! [`super::rules`], is read-only afterwards, and is shared across all scan
//! workers without locking. Compiling every pattern up front makes a
//! malformed rule a fatal configuration error instead of a per-file one.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::error::ConfigError;
use crate::scanner::model::{Rule, RuleSet};
use crate::scanner::rules;

#[derive(Debug)]
pub struct RuleRegistry {
    sets: BTreeMap<&'static str, RuleSet>,
}

impl RuleRegistry {
    /// Compile all static rule tables. Fails fast on the first malformed
    /// pattern; no I/O is performed.
    pub fn build() -> Result<Self, ConfigError> {
        let mut sets = BTreeMap::new();
        for &(language, defs) in rules::LANGUAGES {
            let compiled = defs
                .iter()
                .map(|def| {
                    let pattern = Regex::new(def.pattern).map_err(|source| {
                        ConfigError::InvalidPattern {
                            language,
                            rule_id: def.id,
                            source,
                        }
                    })?;
                    Ok(Rule {
                        id: def.id,
                        pattern,
                        severity: def.severity,
                        category: def.category,
                        message: def.message,
                    })
                })
                .collect::<Result<Vec<_>, ConfigError>>()?;
            debug!("registered {} rules for language `{}`", compiled.len(), language);
            sets.insert(
                language,
                RuleSet {
                    language,
                    rules: compiled,
                },
            );
        }
        Ok(Self { sets })
    }

    /// Look up the rule set for a language key.
    pub fn load(&self, language: &str) -> Result<&RuleSet, ConfigError> {
        self.sets
            .get(language)
            .ok_or_else(|| ConfigError::UnknownLanguage(language.to_string()))
    }

    /// All registered language keys, in stable order.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sets.keys().copied()
    }
}

/// Resolve the language key for a file from its extension, or `None` when no
/// rule table covers it.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "c" | "h" => Some("c"),
        "js" | "jsx" | "ts" | "tsx" => Some("javascript"),
        "php" => Some("php"),
        "py" => Some("python"),
        "rs" => Some("rust"),
        "scala" => Some("scala"),
        _ => None,
    }
}
