//! Static per-language rule tables.
//!
//! One module per supported language. Tables are plain data; the registry
//! compiles them into [`crate::scanner::RuleSet`]s at startup, and a pattern
//! that fails to compile is a fatal configuration error.
//!
//! Case sensitivity is deliberately heterogeneous: each rule's pattern
//! encodes its own behavior (the C, PHP and Scala tables match
//! case-insensitively via `(?i)`, most Rust rules do not). Tables are grouped
//! by category purely for readability; every rule in a language's table is
//! applied uniformly.

use crate::scanner::model::Severity;

pub(crate) mod c;
pub(crate) mod javascript;
pub(crate) mod php;
pub(crate) mod python;
pub(crate) mod rust;
pub(crate) mod scala;

/// One rule table entry before compilation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleDef {
    pub id: &'static str,
    pub pattern: &'static str,
    pub severity: Severity,
    pub category: &'static str,
    pub message: &'static str,
}

/// All registered languages and their tables, in stable registry order.
pub(crate) const LANGUAGES: &[(&str, &[RuleDef])] = &[
    ("c", c::RULES),
    ("javascript", javascript::RULES),
    ("php", php::RULES),
    ("python", python::RULES),
    ("rust", rust::RULES),
    ("scala", scala::RULES),
];
