//! Core data types shared across the scanning pipeline.
//!
//! Everything here is an immutable value: a `Finding` is produced once by the
//! file scanner and moves by value through aggregation into the rendered
//! report. No component mutates another component's output.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Finding severity levels, ordered most severe first.
///
/// The declaration order is the canonical sort order: `Critical` sorts before
/// `High`, and so on down to `Low`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities in canonical order.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detection rule: one compiled pattern with its classification.
///
/// Rules are immutable once the registry is built. `category` is a short
/// machine-readable tag (e.g. `buffer_overflow`); `message` is the
/// human-readable remediation hint.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    pub pattern: Regex,
    pub severity: Severity,
    pub category: &'static str,
    pub message: &'static str,
}

/// The full ordered rule collection for one source language.
///
/// Iteration order is the table declaration order and is stable across runs,
/// which fixes the finding order when several rules match the same line.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub language: &'static str,
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One concrete match of a rule against one line of one file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub file: PathBuf,
    /// 1-based line number in the scanned file.
    pub line: usize,
    pub severity: Severity,
    pub category: String,
    pub message: String,
    /// The matched source line with leading/trailing whitespace trimmed.
    pub snippet: String,
}

/// A per-file failure that prevented producing findings for that file.
///
/// A file either fully succeeds (zero or more findings) or fails entirely
/// with one of these; partial per-line failure is not modeled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanError {
    pub file: PathBuf,
    pub reason: String,
}

/// Outcome of scanning one file.
pub type ScanResult = Result<Vec<Finding>, ScanError>;

/// A scanned file paired with its outcome, as handed to the aggregator.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub file: PathBuf,
    pub result: ScanResult,
}

/// The complete, renderable output of one scan invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    /// Files actually scanned (including ones that failed with a `ScanError`).
    pub total_files: usize,
    pub files_with_findings: usize,
    /// Files skipped because no rule table covers their extension.
    pub files_skipped: usize,
    /// Always carries all four severities, zero counts included.
    pub severity_counts: BTreeMap<Severity, usize>,
    pub findings: Vec<Finding>,
    pub errors: Vec<ScanError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_critical_first() {
        let mut severities = vec![Severity::Low, Severity::Critical, Severity::Medium, Severity::High];
        severities.sort();
        assert_eq!(severities, Severity::ALL.to_vec());
    }

    #[test]
    fn severity_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"CRITICAL\"");
        let parsed: Severity = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(parsed, Severity::Low);
    }

    #[test]
    fn severity_works_as_json_map_key() {
        let mut counts = BTreeMap::new();
        counts.insert(Severity::High, 3usize);
        counts.insert(Severity::Low, 0usize);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"HIGH":3,"LOW":0}"#);
        let back: BTreeMap<Severity, usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
