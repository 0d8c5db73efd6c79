//! Rule table for Scala sources. Rules match case-insensitively except the
//! path-traversal pair, which matches literal dot-dot sequences as written.

use super::RuleDef;
use crate::scanner::model::Severity::{Critical, High, Medium};

pub(crate) const RULES: &[RuleDef] = &[
    // sql_injection
    RuleDef {
        id: "scala-001",
        pattern: r#"(?i)sql""#,
        severity: Critical,
        category: "sql_injection",
        message: "Raw SQL string interpolation",
    },
    RuleDef {
        id: "scala-002",
        pattern: r"(?i)executeQuery\s*\(",
        severity: Critical,
        category: "sql_injection",
        message: "Direct SQL query execution",
    },
    RuleDef {
        id: "scala-003",
        pattern: r"(?i)executeUpdate\s*\(",
        severity: Critical,
        category: "sql_injection",
        message: "Direct SQL update execution",
    },
    // command_injection
    RuleDef {
        id: "scala-004",
        pattern: r"(?i)Runtime\.getRuntime\(\)\.exec",
        severity: Critical,
        category: "command_injection",
        message: "Runtime command execution",
    },
    RuleDef {
        id: "scala-005",
        pattern: r"(?i)ProcessBuilder",
        severity: High,
        category: "command_injection",
        message: "Process builder usage",
    },
    // code_injection
    RuleDef {
        id: "scala-006",
        pattern: r"(?i)eval\s*\(",
        severity: Critical,
        category: "code_injection",
        message: "Code evaluation",
    },
    // reflection
    RuleDef {
        id: "scala-007",
        pattern: r"(?i)Class\.forName",
        severity: High,
        category: "reflection",
        message: "Dynamic class loading",
    },
    RuleDef {
        id: "scala-008",
        pattern: r"(?i)getClass\.getMethod",
        severity: High,
        category: "reflection",
        message: "Dynamic method invocation",
    },
    // deserialization
    RuleDef {
        id: "scala-009",
        pattern: r"(?i)ObjectInputStream",
        severity: High,
        category: "deserialization",
        message: "Object deserialization of untrusted data",
    },
    RuleDef {
        id: "scala-010",
        pattern: r"(?i)readObject\s*\(",
        severity: High,
        category: "deserialization",
        message: "Object deserialization of untrusted data",
    },
    // weak_crypto
    RuleDef {
        id: "scala-011",
        pattern: r#"(?i)MessageDigest\.getInstance\s*\(\s*["']MD5["']"#,
        severity: High,
        category: "weak_crypto",
        message: "MD5 hash usage",
    },
    RuleDef {
        id: "scala-012",
        pattern: r#"(?i)MessageDigest\.getInstance\s*\(\s*["']SHA-1["']"#,
        severity: Medium,
        category: "weak_crypto",
        message: "SHA-1 hash usage",
    },
    RuleDef {
        id: "scala-013",
        pattern: r#"(?i)Cipher\.getInstance\s*\(\s*["']DES["']"#,
        severity: High,
        category: "weak_crypto",
        message: "DES encryption",
    },
    // hardcoded_secrets
    RuleDef {
        id: "scala-014",
        pattern: r#"(?i)password\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded password detected",
    },
    RuleDef {
        id: "scala-015",
        pattern: r#"(?i)secret\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded secret detected",
    },
    RuleDef {
        id: "scala-016",
        pattern: r#"(?i)api_key\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded API key detected",
    },
    RuleDef {
        id: "scala-017",
        pattern: r#"(?i)token\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded token detected",
    },
    // unsafe_access
    RuleDef {
        id: "scala-018",
        pattern: r"(?i)\.asInstanceOf\[",
        severity: Medium,
        category: "unsafe_access",
        message: "Unsafe type casting",
    },
    RuleDef {
        id: "scala-019",
        pattern: r"(?i)\.head\b",
        severity: Medium,
        category: "unsafe_access",
        message: "Unsafe list head access",
    },
    // network_access
    RuleDef {
        id: "scala-020",
        pattern: r"(?i)HttpURLConnection",
        severity: Medium,
        category: "network_access",
        message: "HTTP connection",
    },
    RuleDef {
        id: "scala-021",
        pattern: r"(?i)Socket\s*\(",
        severity: Medium,
        category: "network_access",
        message: "Socket creation",
    },
    // exception_handling
    RuleDef {
        id: "scala-022",
        pattern: r"(?i)throw\s+new\s+Exception",
        severity: Medium,
        category: "exception_handling",
        message: "Generic exception throwing",
    },
    // concurrency
    RuleDef {
        id: "scala-023",
        pattern: r"(?i)synchronized\s*\(",
        severity: Medium,
        category: "concurrency",
        message: "Synchronized block",
    },
    RuleDef {
        id: "scala-024",
        pattern: r"(?i)volatile\s+",
        severity: Medium,
        category: "concurrency",
        message: "Volatile variable declaration",
    },
    // xss
    RuleDef {
        id: "scala-025",
        pattern: r"(?i)\.innerHTML\s*=",
        severity: High,
        category: "xss",
        message: "Potential XSS via innerHTML assignment",
    },
    RuleDef {
        id: "scala-026",
        pattern: r"(?i)\.outerHTML\s*=",
        severity: High,
        category: "xss",
        message: "Potential XSS via outerHTML assignment",
    },
    RuleDef {
        id: "scala-027",
        pattern: r"(?i)document\.write\s*\(",
        severity: High,
        category: "xss",
        message: "Potential XSS via document.write",
    },
    // path_traversal (case-sensitive, matching literal dot-dot sequences)
    RuleDef {
        id: "scala-028",
        pattern: r"\.\./",
        severity: High,
        category: "path_traversal",
        message: "Potential path traversal sequence",
    },
    RuleDef {
        id: "scala-029",
        pattern: r"\.\.\\",
        severity: High,
        category: "path_traversal",
        message: "Potential path traversal sequence",
    },
];
