//! Single-file scanning.

use std::fs;
use std::io;
use std::path::Path;

use log::trace;

use crate::scanner::matcher::match_line;
use crate::scanner::model::{Finding, RuleSet, ScanError, ScanResult};

/// Scan one file with one rule set.
///
/// The file is read as UTF-8 text; a read, permission or decode failure
/// aborts the whole file with a single [`ScanError`] - no findings are
/// emitted for an unreadable file. Line numbering is 1-based and a trailing
/// newline does not produce a phantom final line. Findings come out in line
/// order, then rule-table order for same-line matches.
pub fn scan_file(path: &Path, rules: &RuleSet) -> ScanResult {
    trace!("scanning {} with `{}` rules", path.display(), rules.language);

    let content = fs::read_to_string(path).map_err(|e| ScanError {
        file: path.to_path_buf(),
        reason: read_failure_reason(&e),
    })?;

    let mut findings = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        for rule in match_line(rules, line) {
            findings.push(Finding {
                file: path.to_path_buf(),
                line: idx + 1,
                severity: rule.severity,
                category: rule.category.to_string(),
                message: rule.message.to_string(),
                snippet: line.trim().to_string(),
            });
        }
    }
    Ok(findings)
}

fn read_failure_reason(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::InvalidData => "decode error: file is not valid UTF-8".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        io::ErrorKind::NotFound => "file not found".to_string(),
        _ => err.to_string(),
    }
}
