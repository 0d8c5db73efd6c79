//! Rule table for Python sources.

use super::RuleDef;
use crate::scanner::model::Severity::{Critical, High, Medium};

pub(crate) const RULES: &[RuleDef] = &[
    // sql_injection
    RuleDef {
        id: "py-001",
        pattern: r#"\.execute\s*\(\s*f?["'][^"']*%[sd]"#,
        severity: High,
        category: "sql_injection",
        message: "String formatting in SQL queries can lead to SQL injection",
    },
    RuleDef {
        id: "py-002",
        pattern: r#"\.execute\s*\(\s*f["']"#,
        severity: High,
        category: "sql_injection",
        message: "f-string in SQL query - use parameterized queries",
    },
    // deserialization
    RuleDef {
        id: "py-003",
        pattern: r"\bpickle\.loads?\s*\(",
        severity: High,
        category: "deserialization",
        message: "Pickle can execute arbitrary code during deserialization",
    },
    RuleDef {
        id: "py-004",
        pattern: r"\byaml\.load\s*\(",
        severity: High,
        category: "deserialization",
        message: "yaml.load without SafeLoader can execute arbitrary code",
    },
    // code_injection
    RuleDef {
        id: "py-005",
        pattern: r"\beval\s*\(",
        severity: Critical,
        category: "code_injection",
        message: "Use of eval() can lead to code injection",
    },
    RuleDef {
        id: "py-006",
        pattern: r"\bexec\s*\(",
        severity: Critical,
        category: "code_injection",
        message: "Use of exec() can lead to code injection",
    },
    // command_injection
    RuleDef {
        id: "py-007",
        pattern: r"\bos\.system\s*\(",
        severity: Critical,
        category: "command_injection",
        message: "os.system with untrusted input allows command injection",
    },
    RuleDef {
        id: "py-008",
        pattern: r"subprocess\.\w+\s*\([^)]*shell\s*=\s*True",
        severity: High,
        category: "command_injection",
        message: "subprocess with shell=True allows command injection",
    },
    // weak_crypto
    RuleDef {
        id: "py-009",
        pattern: r"hashlib\.md5\s*\(",
        severity: Medium,
        category: "weak_crypto",
        message: "MD5 is cryptographically broken",
    },
    // hardcoded_secrets
    RuleDef {
        id: "py-010",
        pattern: r#"(?i)SECRET_KEY\s*=\s*["'][^"']{20,}["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded framework secret key",
    },
    RuleDef {
        id: "py-011",
        pattern: r#"(?i)(?:api_key|apikey|auth_token)\s*=\s*["'][A-Za-z0-9_\-]{20,}["']"#,
        severity: High,
        category: "hardcoded_secrets",
        message: "Hardcoded API key or token",
    },
];
