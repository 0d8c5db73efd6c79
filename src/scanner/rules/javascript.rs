//! Rule table for JavaScript/TypeScript sources.

use super::RuleDef;
use crate::scanner::model::Severity::{Critical, High, Medium};

pub(crate) const RULES: &[RuleDef] = &[
    // code_injection
    RuleDef {
        id: "js-001",
        pattern: r"\beval\s*\(",
        severity: High,
        category: "code_injection",
        message: "Use of eval() can lead to code injection vulnerabilities",
    },
    RuleDef {
        id: "js-002",
        pattern: r"new\s+Function\s*\(",
        severity: High,
        category: "code_injection",
        message: "Function constructor evaluates strings as code",
    },
    // xss
    RuleDef {
        id: "js-003",
        pattern: r"\.innerHTML\s*=",
        severity: Medium,
        category: "xss",
        message: "innerHTML can lead to XSS if used with unsanitized data",
    },
    RuleDef {
        id: "js-004",
        pattern: r"document\.write\s*\(",
        severity: Medium,
        category: "xss",
        message: "document.write with dynamic content can lead to XSS",
    },
    RuleDef {
        id: "js-005",
        pattern: r"dangerouslySetInnerHTML",
        severity: Medium,
        category: "xss",
        message: "dangerouslySetInnerHTML bypasses React XSS protection",
    },
    // command_injection
    RuleDef {
        id: "js-006",
        pattern: r"child_process",
        severity: High,
        category: "command_injection",
        message: "child_process execution with untrusted input is dangerous",
    },
    // hardcoded_secrets
    RuleDef {
        id: "js-007",
        pattern: r"AKIA[0-9A-Z]{16}",
        severity: Critical,
        category: "hardcoded_secrets",
        message: "AWS access key ID detected",
    },
    RuleDef {
        id: "js-008",
        pattern: r"gh[pousr]_[A-Za-z0-9_]{36,255}",
        severity: High,
        category: "hardcoded_secrets",
        message: "GitHub token detected",
    },
    RuleDef {
        id: "js-009",
        pattern: r#"(?i)(?:api[_-]?key|apikey)["']?\s*[:=]\s*["'][A-Za-z0-9_\-]{20,}["']"#,
        severity: High,
        category: "hardcoded_secrets",
        message: "Hardcoded API key",
    },
    // insecure_config
    RuleDef {
        id: "js-010",
        pattern: r"rejectUnauthorized\s*:\s*false",
        severity: High,
        category: "insecure_config",
        message: "TLS certificate validation disabled",
    },
];
