//! Folds per-file outcomes into a single deterministic [`Report`].
//!
//! The same set of outcomes always produces the same report regardless of
//! the order worker threads delivered them in.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::scanner::model::{FileOutcome, Report, Severity};

/// Merge worker outcomes into a finished report.
///
/// Findings are ordered by severity (critical first), then file path, then
/// line number. The sort is stable, so multiple rules firing on the same
/// line keep their rule-table order. Errors are ordered by file path.
pub fn aggregate(mut outcomes: Vec<FileOutcome>, files_skipped: usize) -> Report {
    outcomes.sort_by(|a, b| a.file.cmp(&b.file));

    let total_files = outcomes.len();
    let mut files_with_findings = 0;
    let mut findings = Vec::new();
    let mut errors = Vec::new();

    for outcome in outcomes {
        match outcome.result {
            Ok(file_findings) => {
                if !file_findings.is_empty() {
                    files_with_findings += 1;
                }
                findings.extend(file_findings);
            }
            Err(e) => errors.push(e),
        }
    }

    findings.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.file.cmp(&b.file))
            .then_with(|| a.line.cmp(&b.line))
    });
    errors.sort_by(|a, b| a.file.cmp(&b.file));

    // Every severity appears in the tally, even at zero.
    let mut severity_counts: BTreeMap<Severity, usize> =
        Severity::ALL.iter().map(|s| (*s, 0)).collect();
    for finding in &findings {
        *severity_counts.entry(finding.severity).or_insert(0) += 1;
    }

    Report {
        generated_at: Utc::now(),
        total_files,
        files_with_findings,
        files_skipped,
        severity_counts,
        findings,
        errors,
    }
}
